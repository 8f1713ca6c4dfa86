//! Recording AI-definition factory double.

use std::cell::RefCell;

use skirmish_core::engine::AiDefinitionFactory;
use skirmish_core::errors::{BattleError, Result};

/// Stand-in for an engine-built AI definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeAiDefinition {
    pub name: String,
    /// `"file"` or `"code"`, matching the constructor used.
    pub origin: &'static str,
}

/// Factory that logs every dispatch and can be told to fail for one name.
#[derive(Default)]
pub struct RecordingFactory {
    calls: RefCell<Vec<String>>,
    fail_on: Option<String>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with `DefinitionRejected` whenever the given tank name is built.
    pub fn failing_on(name: impl Into<String>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(name.into()),
        }
    }

    /// Dispatch log, e.g. `["file:a", "code:b"]`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn build(&self, origin: &'static str, name: &str) -> Result<FakeAiDefinition> {
        self.calls.borrow_mut().push(format!("{}:{}", origin, name));
        if self.fail_on.as_deref() == Some(name) {
            return Err(BattleError::DefinitionRejected(format!(
                "scripted failure for {}",
                name
            )));
        }
        Ok(FakeAiDefinition {
            name: name.to_string(),
            origin,
        })
    }
}

impl AiDefinitionFactory for RecordingFactory {
    type Definition = FakeAiDefinition;

    fn from_file(&self, name: &str) -> Result<FakeAiDefinition> {
        self.build("file", name)
    }

    fn from_code(&self, name: &str, _code: &str) -> Result<FakeAiDefinition> {
        self.build("code", name)
    }
}
