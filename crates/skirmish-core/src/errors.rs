//! Error taxonomy for the viewer crates.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BattleError {
    /// A script descriptor declared a source kind the viewer does not know.
    #[error("unknown script source kind {kind:?} for tank {name:?}")]
    UnknownScriptSource { kind: String, name: String },

    /// A script descriptor declared an inline-code source without code text.
    #[error("script {name:?} declares an inline source but carries no code")]
    MissingInlineCode { name: String },

    /// The engine-side factory rejected an AI definition.
    #[error("AI definition rejected by engine: {0}")]
    DefinitionRejected(String),

    /// An operation required the battlefield handle after it was released.
    #[error("battlefield handle already released")]
    HandleReleased,
}

pub type Result<T> = std::result::Result<T, BattleError>;
