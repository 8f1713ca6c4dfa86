//! Test doubles and fixtures for the SKIRMISH viewer crates.
//!
//! Provides a scripted battlefield engine, a recording AI-definition
//! factory, and small state builders for consistent testing.

pub mod factory;
pub mod fixtures;
pub mod scripted;

pub use factory::{FakeAiDefinition, RecordingFactory};
pub use fixtures::{battle_result, quality_sequence, tank_state};
pub use scripted::ScriptedBattlefield;
