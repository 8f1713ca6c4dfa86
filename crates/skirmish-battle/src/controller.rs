//! Battle lifecycle controller.
//!
//! Owns the battlefield handle between mount and unmount, tracks the
//! Loading → Battle phase, and keeps the current ranked snapshot and
//! visibility decision up to date as engine events arrive. Finish and
//! error notifications are forwarded to optional owner handlers.

use tracing::debug;

use skirmish_core::engine::{Battlefield, TankDescriptor};
use skirmish_core::enums::BattlePhase;
use skirmish_core::errors::{BattleError, Result};
use skirmish_core::events::BattleEvent;
use skirmish_core::state::{BattleResult, TankSnapshot, TankState, VisibilityDecision};

use crate::{quality, ranking};

/// Owner callback for the terminal battle result.
pub type FinishHandler = Box<dyn FnMut(&BattleResult)>;

/// Owner callback for engine runtime errors.
pub type ErrorHandler = Box<dyn FnMut(&str)>;

/// Drives one visible battle through its lifecycle.
///
/// The engine handle is acquired with [`mount`](Self::mount) and released
/// with [`unmount`](Self::unmount). After release, late render/finish/error
/// events are ignored; only [`handle_ready`](Self::handle_ready) treats a
/// missing handle as an error, since it is an owner-driven setup step.
pub struct BattleLifecycleController<E: Battlefield> {
    engine: Option<E>,
    phase: BattlePhase,
    roster: Vec<String>,
    snapshot: Vec<TankSnapshot>,
    visibility: VisibilityDecision,
    quality: f64,
    on_finish: Option<FinishHandler>,
    on_error: Option<ErrorHandler>,
}

impl<E: Battlefield> BattleLifecycleController<E> {
    /// Create a controller for the given roster. Registration order is
    /// preserved and defines the leaderboard tie-break order.
    pub fn new(roster: Vec<String>) -> Self {
        let quality = 1.0;
        Self {
            engine: None,
            phase: BattlePhase::Loading,
            roster,
            snapshot: Vec::new(),
            visibility: quality::evaluate(BattlePhase::Loading, quality),
            quality,
            on_finish: None,
            on_error: None,
        }
    }

    /// Acquire the engine handle and prepare the simulation.
    pub fn mount(&mut self, mut engine: E) {
        engine.build_simulation();
        self.engine = Some(engine);
    }

    /// Release the engine handle. Events arriving afterwards are ignored.
    /// Returns the handle so the host can dispose of it.
    pub fn unmount(&mut self) -> Option<E> {
        self.engine.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.engine.is_some()
    }

    /// Register the owner's finish handler. Without one, finish results
    /// are dropped.
    pub fn set_finish_handler(&mut self, handler: impl FnMut(&BattleResult) + 'static) {
        self.on_finish = Some(Box::new(handler));
    }

    /// Register the owner's error handler. Without one, engine errors
    /// are dropped.
    pub fn set_error_handler(&mut self, handler: impl FnMut(&str) + 'static) {
        self.on_error = Some(Box::new(handler));
    }

    /// Dispatch one engine event.
    pub fn handle_event(&mut self, event: BattleEvent) -> Result<()> {
        match event {
            BattleEvent::Ready => self.handle_ready(),
            BattleEvent::Render => {
                self.handle_render();
                Ok(())
            }
            BattleEvent::Finish { result } => {
                self.handle_finish(&result);
                Ok(())
            }
            BattleEvent::Error { message } => {
                self.handle_error(&message);
                Ok(())
            }
        }
    }

    /// Ready event: register the roster in order, start the simulation,
    /// take an initial snapshot, and enter the battle phase.
    pub fn handle_ready(&mut self) -> Result<()> {
        let engine = self.engine.as_mut().ok_or(BattleError::HandleReleased)?;

        for name in &self.roster {
            engine.add_tank(&TankDescriptor::new(name.clone()));
        }
        let tanks = engine.tank_list();
        let quality = engine.actual_renderer_quality();
        engine.start();

        self.phase = BattlePhase::Battle;
        self.apply_tick(&tanks, quality);
        Ok(())
    }

    /// Render tick: pull the tank list and quality from the engine and
    /// refresh the snapshot. No-op after release.
    pub fn handle_render(&mut self) {
        let Some(engine) = self.engine.as_ref() else {
            debug!("render tick after handle release, ignoring");
            return;
        };
        let tanks = engine.tank_list();
        let quality = engine.actual_renderer_quality();
        self.apply_tick(&tanks, quality);
    }

    /// Replace the snapshot and visibility decision from one tick's data.
    pub fn apply_tick(&mut self, tanks: &[TankState], quality: f64) {
        self.snapshot = ranking::build_ranked_snapshot(tanks);
        self.quality = quality;
        self.visibility = quality::evaluate(self.phase, quality);
    }

    /// Finish event: forward the result unchanged to the owner's handler,
    /// if registered. Ignored after release.
    pub fn handle_finish(&mut self, result: &BattleResult) {
        if self.engine.is_none() {
            debug!("finish event after handle release, ignoring");
            return;
        }
        match self.on_finish.as_mut() {
            Some(handler) => handler(result),
            None => debug!("battle finished with no handler registered, dropping result"),
        }
    }

    /// Error event: forward the message to the owner's handler, if
    /// registered. Best-effort; not fatal to the controller.
    pub fn handle_error(&mut self, message: &str) {
        if self.engine.is_none() {
            debug!("error event after handle release, ignoring");
            return;
        }
        match self.on_error.as_mut() {
            Some(handler) => handler(message),
            None => debug!(message, "engine error with no handler registered"),
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Current ranked leaderboard snapshot.
    pub fn snapshot(&self) -> &[TankSnapshot] {
        &self.snapshot
    }

    /// Current UI visibility decision.
    pub fn visibility(&self) -> &VisibilityDecision {
        &self.visibility
    }

    /// Most recent engine-reported quality level.
    pub fn quality_level(&self) -> f64 {
        self.quality
    }

    /// Roster names in registration order.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }
}
