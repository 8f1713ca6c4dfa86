//! Challenge completion and restart policy.

use serde::{Deserialize, Serialize};

use skirmish_core::state::BattleResult;

/// How often a lost challenge battle may be restarted.
///
/// The default is unbounded: challenge mode is a practice loop that replays
/// the battle until the player wins. A cap makes the loop observable and
/// finite for hosts where restarts are costly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestartPolicy {
    /// Maximum number of restarts; `None` means no limit.
    pub max_restarts: Option<u32>,
}

impl RestartPolicy {
    /// Restart forever until the player wins.
    pub fn unbounded() -> Self {
        Self { max_restarts: None }
    }

    /// Allow at most `max` restarts before giving up.
    pub fn capped(max: u32) -> Self {
        Self {
            max_restarts: Some(max),
        }
    }

    /// Whether another restart is allowed after `restarts_so_far`.
    pub fn allows_restart(&self, restarts_so_far: u32) -> bool {
        match self.max_restarts {
            None => true,
            Some(max) => restarts_so_far < max,
        }
    }
}

/// Verdict on one finished challenge battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeOutcome {
    /// The player won alone; report completion upward.
    Won,
    /// Lost or drawn; the battle is to be restarted.
    Restart,
    /// Lost, and the restart cap is spent. Only reachable with a bounded
    /// policy.
    RetriesExhausted,
}

/// A challenge is won when exactly one tank survives and it is the
/// designated player, compared case-insensitively. Two or more survivors
/// (including the player) and a dead player both count as a loss; the
/// policy does not distinguish the two.
pub fn is_winning_result(result: &BattleResult, player_name: &str) -> bool {
    let mut alive = result.tank_list.iter().filter(|tank| tank.energy > 0.0);
    match (alive.next(), alive.next()) {
        (Some(survivor), None) => survivor.name.eq_ignore_ascii_case(player_name),
        _ => false,
    }
}
