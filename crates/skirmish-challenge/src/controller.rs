//! Challenge controller: one scenario played until won.
//!
//! Owns the definition cache and restart bookkeeping. The host wires a
//! battle lifecycle controller per attempt; on each finish event it asks
//! this controller for the verdict and either reports completion or
//! rebuilds the battle.

use tracing::info;

use skirmish_core::constants::PLAYER_TANK_NAME;
use skirmish_core::engine::AiDefinitionFactory;
use skirmish_core::errors::Result;
use skirmish_core::sources::AiSource;
use skirmish_core::state::BattleResult;

use crate::cache::AiDefinitionCache;
use crate::policy::{is_winning_result, ChallengeOutcome, RestartPolicy};
use crate::scenario::ChallengeScenario;

pub struct ChallengeController<F: AiDefinitionFactory> {
    scenario: ChallengeScenario,
    policy: RestartPolicy,
    cache: AiDefinitionCache<F>,
    restarts: u32,
    won: bool,
}

impl<F: AiDefinitionFactory> ChallengeController<F> {
    pub fn new(scenario: ChallengeScenario, policy: RestartPolicy) -> Self {
        Self {
            scenario,
            policy,
            cache: AiDefinitionCache::new(),
            restarts: 0,
            won: false,
        }
    }

    pub fn scenario(&self) -> &ChallengeScenario {
        &self.scenario
    }

    /// Canonical source list for this challenge: the scenario's canned
    /// opponents in order, then the player's inline-code tank. Rejects
    /// descriptors with unknown source kinds.
    pub fn sources(&self, player_code: &str) -> Result<Vec<AiSource>> {
        let mut sources = self
            .scenario
            .ai_def_list
            .iter()
            .map(AiSource::try_from)
            .collect::<Result<Vec<_>>>()?;
        sources.push(AiSource::code(PLAYER_TANK_NAME, player_code));
        Ok(sources)
    }

    /// Engine definitions for the current source list, rebuilt only when
    /// the opponents or the player code changed since the last call.
    pub fn ai_definitions(&mut self, factory: &F, player_code: &str) -> Result<&[F::Definition]> {
        let sources = self.sources(player_code)?;
        self.cache.get_or_build(factory, &sources)
    }

    /// Battle roster names, in the same order as [`sources`](Self::sources).
    pub fn roster(&self) -> Vec<String> {
        let mut roster: Vec<String> = self
            .scenario
            .ai_def_list
            .iter()
            .map(|descriptor| descriptor.name.clone())
            .collect();
        roster.push(PLAYER_TANK_NAME.to_string());
        roster
    }

    /// Judge one terminal battle result.
    pub fn handle_finish(&mut self, result: &BattleResult) -> ChallengeOutcome {
        if is_winning_result(result, PLAYER_TANK_NAME) {
            self.won = true;
            info!(challenge = %self.scenario.id, "challenge won");
            return ChallengeOutcome::Won;
        }

        if self.policy.allows_restart(self.restarts) {
            self.restarts += 1;
            info!(
                challenge = %self.scenario.id,
                restarts = self.restarts,
                "challenge lost, restarting battle"
            );
            return ChallengeOutcome::Restart;
        }

        info!(challenge = %self.scenario.id, "challenge lost, restart cap spent");
        ChallengeOutcome::RetriesExhausted
    }

    /// Drop cached definitions, forcing a rebuild on the next attempt.
    pub fn invalidate_definitions(&mut self) {
        self.cache.invalidate();
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Restarts performed so far.
    pub fn restarts(&self) -> u32 {
        self.restarts
    }
}
