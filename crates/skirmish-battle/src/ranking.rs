//! Ranked snapshot builder: turns the raw engine tank list into the
//! display-ready leaderboard.
//!
//! Read-only over its input — the engine states are never mutated.

use skirmish_core::state::{TankSnapshot, TankState};

/// Build the ranked leaderboard snapshot for one tick.
///
/// Entries are sorted by score descending and assigned `rank = index`.
/// The sort is stable, so tanks with equal scores keep the engine list
/// order (roster registration order) and their ranks do not flicker
/// between ticks.
pub fn build_ranked_snapshot(tanks: &[TankState]) -> Vec<TankSnapshot> {
    let mut snapshot: Vec<TankSnapshot> = tanks
        .iter()
        .map(|tank| TankSnapshot {
            id: tank.id,
            name: tank.full_name.clone(),
            debug: tank.debug_data.clone(),
            state: tank.state.clone(),
            score: tank.score,
            energy: tank.energy,
            rank: 0,
        })
        .collect();

    snapshot.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (rank, entry) in snapshot.iter_mut().enumerate() {
        entry.rank = rank;
    }
    snapshot
}
