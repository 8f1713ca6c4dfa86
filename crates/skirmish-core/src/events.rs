//! Events emitted by the battlefield engine toward the viewer.
//!
//! Events are delivered in engine order and processed synchronously;
//! the controller has no buffering or coalescing.

use serde::{Deserialize, Serialize};

use crate::state::BattleResult;

/// All events the lifecycle controller consumes from its engine host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleEvent {
    /// Engine is prepared; the roster may now be registered.
    Ready,
    /// One render tick — fresh tank list and quality level are available.
    Render,
    /// Simulation ended with a terminal result.
    Finish { result: BattleResult },
    /// Engine runtime error. Best-effort notification, not fatal to the view.
    Error { message: String },
}
