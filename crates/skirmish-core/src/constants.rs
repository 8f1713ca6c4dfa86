//! Viewer tuning constants.

// --- Quality policy ---

/// Quality at or below which the scoreboard and debug view are replaced by
/// "hidden for performance" placeholders.
pub const QUALITY_PLACEHOLDER_MAX: f64 = 0.05;

/// Quality below which the reduced-FPS warning is shown (battle phase only).
pub const QUALITY_WARNING_MAX: f64 = 0.3;

/// Quality above which the debug view renders with full highlight.
pub const QUALITY_HIGHLIGHT_MIN: f64 = 0.66;

// --- Scoreboard refresh ---

/// Scoreboard refresh interval at full quality (milliseconds).
pub const SCOREBOARD_REFRESH_MIN_MS: f64 = 200.0;

/// Additional refresh delay at zero quality (milliseconds).
/// The interval interpolates linearly from 1500 ms at quality 0
/// to 200 ms at quality 1.
pub const SCOREBOARD_REFRESH_SPAN_MS: f64 = 1300.0;

// --- Challenge mode ---

/// Designated player tank identifier. Challenge completion compares the sole
/// survivor's name against this, case-insensitively.
pub const PLAYER_TANK_NAME: &str = "Player";
