//! Built-in challenge ladder — hardcoded scenario definitions.
//!
//! Each scenario names its canned opponents (file-sourced engine scripts),
//! an RNG seed so replays are reproducible, and a time limit after which
//! the engine calls the battle.

use serde::{Deserialize, Serialize};

use skirmish_core::sources::ScriptDescriptor;

/// One challenge: a fixed opponent lineup the player must beat alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeScenario {
    pub id: String,
    /// Ladder position, 1-based.
    pub level: u32,
    pub name: String,
    pub description: String,
    /// Seed handed to the engine so a restarted battle replays the same way.
    pub rng_seed: u64,
    /// Engine-enforced battle duration cap (seconds).
    pub time_limit_secs: f64,
    /// Canned opponents, in roster order. The player's tank is appended by
    /// the challenge controller, not listed here.
    pub ai_def_list: Vec<ScriptDescriptor>,
}

/// The built-in ladder, ordered by level.
pub fn builtin_challenges() -> Vec<ChallengeScenario> {
    vec![first_shot(), moving_target(), crossfire(), outnumbered()]
}

/// Look up a built-in challenge by id.
pub fn find_challenge(id: &str) -> Option<ChallengeScenario> {
    builtin_challenges().into_iter().find(|c| c.id == id)
}

fn file_script(name: &str) -> ScriptDescriptor {
    ScriptDescriptor {
        source: "file".to_string(),
        name: name.to_string(),
        code: None,
    }
}

/// Level 1: a single stationary opponent. Teaches aiming and shooting.
fn first_shot() -> ChallengeScenario {
    ChallengeScenario {
        id: "first-shot".to_string(),
        level: 1,
        name: "First Shot".to_string(),
        description: "Destroy a stationary tank before the clock runs out.".to_string(),
        rng_seed: 101,
        time_limit_secs: 60.0,
        ai_def_list: vec![file_script("dummy")],
    }
}

/// Level 2: one slow-moving opponent. Teaches leading the target.
fn moving_target() -> ChallengeScenario {
    ChallengeScenario {
        id: "moving-target".to_string(),
        level: 2,
        name: "Moving Target".to_string(),
        description: "The crawler keeps moving. Predict where it will be, not where it is."
            .to_string(),
        rng_seed: 202,
        time_limit_secs: 90.0,
        ai_def_list: vec![file_script("crawler")],
    }
}

/// Level 3: two opponents with different behaviors.
fn crossfire() -> ChallengeScenario {
    ChallengeScenario {
        id: "crossfire".to_string(),
        level: 3,
        name: "Crossfire".to_string(),
        description: "A crawler closes in while a sniper covers it from range.".to_string(),
        rng_seed: 303,
        time_limit_secs: 120.0,
        ai_def_list: vec![file_script("crawler"), file_script("sniper")],
    }
}

/// Level 4: outnumbered three to one.
fn outnumbered() -> ChallengeScenario {
    ChallengeScenario {
        id: "outnumbered".to_string(),
        level: 4,
        name: "Outnumbered".to_string(),
        description: "Three opponents, one of them suicidal. Survive and win alone.".to_string(),
        rng_seed: 404,
        time_limit_secs: 180.0,
        ai_def_list: vec![
            file_script("sniper"),
            file_script("kamikaze"),
            file_script("chicken"),
        ],
    }
}
