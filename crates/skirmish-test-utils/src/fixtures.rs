//! State builders and deterministic value sweeps.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use skirmish_core::state::{BattleResult, TankResult, TankState};

/// Build a raw engine tank state with a representative debug payload.
pub fn tank_state(id: u32, name: &str, score: f64, energy: f64) -> TankState {
    TankState {
        id,
        full_name: name.to_string(),
        debug_data: json!({"target": null}),
        state: json!({"x": 100 + id * 10, "y": 200, "angle": 0}),
        score,
        energy,
    }
}

/// Build a terminal battle result from `(name, energy)` pairs.
pub fn battle_result(tanks: &[(&str, f64)]) -> BattleResult {
    BattleResult {
        tank_list: tanks
            .iter()
            .map(|(name, energy)| TankResult {
                name: name.to_string(),
                score: 0.0,
                energy: *energy,
            })
            .collect(),
    }
}

/// Deterministic quality-level sweep in `[0, 1]`. Same seed, same sequence.
pub fn quality_sequence(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(0.0..=1.0)).collect()
}
