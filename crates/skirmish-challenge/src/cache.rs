//! Memoized AI-definition builds.
//!
//! Engine-side definition objects are rebuilt only when the declarative
//! source list actually changes; the cache is queried on potentially every
//! view refresh cycle, so a hit must cost one slice comparison and zero
//! factory calls.

use tracing::debug;

use skirmish_core::engine::AiDefinitionFactory;
use skirmish_core::errors::Result;
use skirmish_core::sources::AiSource;

/// Cache of the last built definition sequence, keyed by order-sensitive
/// structural equality over the source list.
///
/// There is no partial memoization: a change to any entry rebuilds the
/// entire sequence, and the cached state is replaced only after every
/// definition built. A failed rebuild leaves the previous entry intact.
pub struct AiDefinitionCache<F: AiDefinitionFactory> {
    last_sources: Vec<AiSource>,
    definitions: Vec<F::Definition>,
}

impl<F: AiDefinitionFactory> AiDefinitionCache<F> {
    /// Empty cache. Note that an empty source list compares equal to the
    /// initial state and is served without a build, which is also correct:
    /// building an empty list yields an empty sequence.
    pub fn new() -> Self {
        Self {
            last_sources: Vec::new(),
            definitions: Vec::new(),
        }
    }

    /// Return the cached definition sequence if `sources` matches the last
    /// input, otherwise rebuild the whole sequence in order.
    ///
    /// Factory failures propagate unchanged.
    pub fn get_or_build(&mut self, factory: &F, sources: &[AiSource]) -> Result<&[F::Definition]> {
        if sources == self.last_sources.as_slice() {
            return Ok(&self.definitions);
        }

        debug!(count = sources.len(), "rebuilding AI definition list");
        let mut definitions = Vec::with_capacity(sources.len());
        for source in sources {
            let definition = match source {
                AiSource::File { name } => factory.from_file(name)?,
                AiSource::Code { name, code } => factory.from_code(name, code)?,
            };
            definitions.push(definition);
        }

        self.last_sources = sources.to_vec();
        self.definitions = definitions;
        Ok(&self.definitions)
    }

    /// Drop the cached entry; the next query rebuilds unconditionally.
    pub fn invalidate(&mut self) {
        self.last_sources = Vec::new();
        self.definitions = Vec::new();
    }

    /// Number of definitions currently cached.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl<F: AiDefinitionFactory> Default for AiDefinitionCache<F> {
    fn default() -> Self {
        Self::new()
    }
}
