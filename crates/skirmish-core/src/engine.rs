//! Ports to the external simulation engine.
//!
//! The engine itself is an external collaborator: it simulates the battle,
//! renders pixels, and emits [`BattleEvent`](crate::events::BattleEvent)s.
//! The viewer reaches it only through these traits, so controllers run
//! unchanged against the real engine or the scripted doubles in
//! `skirmish-test-utils`.

use crate::errors::Result;
use crate::state::TankState;

/// Participant registration descriptor.
#[derive(Debug, Clone)]
pub struct TankDescriptor {
    pub name: String,
}

impl TankDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Handle to one battlefield engine instance.
///
/// Call order: `build_simulation` once, then `add_tank` for each roster
/// entry (registration order defines the initial roster order used for
/// rank tie-breaks), then `start`. `tank_list` and
/// `actual_renderer_quality` are read on every render tick.
pub trait Battlefield {
    /// Prepare the engine instance. Idempotent precondition for [`start`].
    ///
    /// [`start`]: Battlefield::start
    fn build_simulation(&mut self);

    /// Register one participant before start.
    fn add_tank(&mut self, descriptor: &TankDescriptor);

    /// Begin the simulation; the engine subsequently emits events.
    fn start(&mut self);

    /// Current tank states, in roster registration order.
    fn tank_list(&self) -> Vec<TankState>;

    /// Current rendering quality in `[0, 1]`; 1 is full fidelity.
    fn actual_renderer_quality(&self) -> f64;
}

/// Factory for engine-owned AI definitions.
///
/// The engine exposes a builder (`createAiDefinition().fromFile(..)` /
/// `.fromCode(..)`); this port expresses it as two fallible constructors.
/// Construction failures (e.g. malformed inline code) propagate to the
/// caller unchanged — the cache layer never classifies them.
pub trait AiDefinitionFactory {
    /// Engine-owned definition object, opaque to the viewer.
    type Definition;

    /// Build a definition from a named file reference.
    fn from_file(&self, name: &str) -> Result<Self::Definition>;

    /// Build a definition from inline source text and a display name.
    fn from_code(&self, name: &str, code: &str) -> Result<Self::Definition>;
}
