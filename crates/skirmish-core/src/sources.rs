//! AI script sources — the declarative opponent list for challenge battles.
//!
//! Scenario data carries opponents in a loose, string-keyed form
//! ([`ScriptDescriptor`], matching the host's challenge format). Before any
//! definitions are built the list is converted to the exhaustive
//! [`AiSource`] union; descriptors with an unrecognized kind are rejected
//! with a typed error instead of being silently dropped.

use serde::{Deserialize, Serialize};

use crate::errors::BattleError;

/// A raw opponent descriptor as it appears in scenario data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDescriptor {
    /// Source kind: `"file"` or `"code"`.
    pub source: String,
    /// Tank name. For file sources this doubles as the script file reference.
    pub name: String,
    /// Inline script text; required when `source` is `"code"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Validated AI script source. Order-sensitive deep equality over this type
/// is the cache key for built definition lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum AiSource {
    /// Script loaded from a named file reference.
    File { name: String },
    /// Script supplied as inline source text with a display name.
    Code { name: String, code: String },
}

impl AiSource {
    /// Display name of the tank this source defines.
    pub fn name(&self) -> &str {
        match self {
            AiSource::File { name } => name,
            AiSource::Code { name, .. } => name,
        }
    }

    /// Inline-code convenience constructor.
    pub fn code(name: impl Into<String>, code: impl Into<String>) -> Self {
        AiSource::Code {
            name: name.into(),
            code: code.into(),
        }
    }

    /// File-reference convenience constructor.
    pub fn file(name: impl Into<String>) -> Self {
        AiSource::File { name: name.into() }
    }
}

impl TryFrom<&ScriptDescriptor> for AiSource {
    type Error = BattleError;

    fn try_from(descriptor: &ScriptDescriptor) -> Result<Self, Self::Error> {
        match descriptor.source.as_str() {
            "file" => Ok(AiSource::File {
                name: descriptor.name.clone(),
            }),
            "code" => {
                let code = descriptor
                    .code
                    .clone()
                    .ok_or_else(|| BattleError::MissingInlineCode {
                        name: descriptor.name.clone(),
                    })?;
                Ok(AiSource::Code {
                    name: descriptor.name.clone(),
                    code,
                })
            }
            other => Err(BattleError::UnknownScriptSource {
                kind: other.to_string(),
                name: descriptor.name.clone(),
            }),
        }
    }
}
