//! Challenge mode: canned-opponent battles replayed until the player wins.
//!
//! Owns the memoized AI-definition cache, the restart policy, and the
//! built-in challenge ladder. Consumes the terminal results produced by
//! `skirmish-battle`'s lifecycle controller.

pub mod cache;
pub mod controller;
pub mod policy;
pub mod scenario;

pub use cache::AiDefinitionCache;
pub use controller::ChallengeController;
pub use policy::{ChallengeOutcome, RestartPolicy};
pub use scenario::ChallengeScenario;

#[cfg(test)]
mod tests;
