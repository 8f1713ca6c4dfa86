//! View-model state — what the presentation layer renders each tick.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw per-tank state as reported by the engine on each render tick.
///
/// Read-only input: the viewer never mutates these. `state` and `debug_data`
/// are engine-opaque payloads passed through to the debug panel untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TankState {
    pub id: u32,
    pub full_name: String,
    #[serde(default)]
    pub debug_data: Value,
    #[serde(default)]
    pub state: Value,
    pub score: f64,
    pub energy: f64,
}

/// One ranked, display-ready leaderboard entry derived from a [`TankState`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TankSnapshot {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub debug: Value,
    #[serde(default)]
    pub state: Value,
    pub score: f64,
    pub energy: f64,
    /// 0-based leaderboard position, assigned after sorting by score.
    pub rank: usize,
}

/// Terminal battle report handed to the finish handler.
///
/// Carried through the lifecycle controller unchanged; the challenge layer
/// inspects it to decide win vs restart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleResult {
    pub tank_list: Vec<TankResult>,
}

/// Final standing of one tank at battle end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankResult {
    pub name: String,
    pub score: f64,
    pub energy: f64,
}

/// Which UI elements the presentation layer should show, derived purely
/// from the battle phase and the engine-reported quality level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibilityDecision {
    /// Show the "loading..." placeholder instead of the battlefield panels.
    pub show_loading_placeholder: bool,
    /// Show the reduced-FPS warning box.
    pub show_fps_warning: bool,
    /// Replace the scoreboard with a "hidden for performance" placeholder.
    pub show_scoreboard_placeholder: bool,
    /// Replace the debug view with a "hidden for performance" placeholder.
    pub show_debug_placeholder: bool,
    /// Render the debug view with full highlight.
    pub debug_highlight: bool,
    /// Advisory scoreboard refresh interval (milliseconds). Consumed by the
    /// presentation layer; the controller itself processes every tick.
    pub scoreboard_refresh_ms: f64,
}
