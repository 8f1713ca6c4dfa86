//! Quality policy: maps battle phase and renderer quality to a UI
//! visibility decision and an advisory scoreboard refresh interval.
//!
//! Pure functions over plain data, evaluated from the instantaneous
//! quality value on every tick. No hysteresis: a quality oscillating
//! around a threshold flaps the warning/placeholder state.

use skirmish_core::constants::*;
use skirmish_core::enums::BattlePhase;
use skirmish_core::state::VisibilityDecision;

/// Compute the visibility decision for one tick.
pub fn evaluate(phase: BattlePhase, quality: f64) -> VisibilityDecision {
    let in_battle = phase == BattlePhase::Battle;
    let degraded = in_battle && quality <= QUALITY_PLACEHOLDER_MAX;

    VisibilityDecision {
        show_loading_placeholder: !in_battle,
        // No warning while the views are replaced by placeholders
        show_fps_warning: in_battle && !degraded && quality < QUALITY_WARNING_MAX,
        show_scoreboard_placeholder: degraded,
        show_debug_placeholder: degraded,
        debug_highlight: quality > QUALITY_HIGHLIGHT_MIN,
        scoreboard_refresh_ms: scoreboard_refresh_ms(quality),
    }
}

/// Advisory scoreboard refresh interval in milliseconds.
///
/// Linear interpolation: 1500 ms at quality 0, 200 ms at quality 1.
pub fn scoreboard_refresh_ms(quality: f64) -> f64 {
    SCOREBOARD_REFRESH_MIN_MS + SCOREBOARD_REFRESH_SPAN_MS * (1.0 - quality)
}
