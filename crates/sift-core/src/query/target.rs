use std::sync::Arc;

use crate::Runtime;

use super::{Capability, Hint, NativeQuery, SelectBuilder};

/// The closed set of query representations a WHERE clause can be attached
/// to.
#[derive(Debug)]
pub enum QueryTarget {
    /// Finalized SQL text, extended by textual concatenation.
    Native(NativeQuery),

    /// Incrementally built query with an AND-composing filter expression.
    Builder(SelectBuilder),
}

impl QueryTarget {
    pub fn runtime(&self) -> &Arc<Runtime> {
        match self {
            Self::Native(query) => query.runtime(),
            Self::Builder(builder) => builder.runtime(),
        }
    }

    pub fn capability(&self) -> Capability {
        match self {
            Self::Native(query) => query.capability(),
            Self::Builder(builder) => builder.capability(),
        }
    }

    pub fn set_hint(&mut self, name: impl Into<String>, hint: Hint) {
        match self {
            Self::Native(query) => query.set_hint(name, hint),
            Self::Builder(builder) => builder.set_hint(name, hint),
        }
    }

    pub fn hint(&self, name: &str) -> Option<&Hint> {
        match self {
            Self::Native(query) => query.hint(name),
            Self::Builder(builder) => builder.hint(name),
        }
    }
}

impl From<NativeQuery> for QueryTarget {
    fn from(value: NativeQuery) -> Self {
        Self::Native(value)
    }
}

impl From<SelectBuilder> for QueryTarget {
    fn from(value: SelectBuilder) -> Self {
        Self::Builder(value)
    }
}
