//! Enumeration types used throughout the viewer.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a battle view.
///
/// A battle starts in `Loading` and moves to `Battle` once the engine
/// reports ready and the roster is registered. There is no transition back:
/// a finished battle is reported to the owner, who decides whether to tear
/// the view down or rebuild it from scratch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Engine is being prepared; no roster registered yet.
    #[default]
    Loading,
    /// Simulation is running and emitting render ticks.
    Battle,
}
