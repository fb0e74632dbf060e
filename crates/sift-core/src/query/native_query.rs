use std::sync::Arc;

use indexmap::IndexMap;

use crate::Runtime;

use super::{Capability, Hint};

/// A finalized query: complete SQL text that can only be extended by
/// appending more text.
#[derive(Debug)]
pub struct NativeQuery {
    runtime: Arc<Runtime>,
    sql: String,
    capability: Capability,
    hints: IndexMap<String, Hint>,
}

impl NativeQuery {
    pub fn new(runtime: Arc<Runtime>, sql: impl Into<String>) -> Self {
        Self::with_capability(
            runtime,
            sql,
            Capability {
                hint_attachment: true,
                incremental_append: false,
            },
        )
    }

    /// Declares a non-default capability set, e.g. for wrappers that strip
    /// hint support.
    pub fn with_capability(runtime: Arc<Runtime>, sql: impl Into<String>, capability: Capability) -> Self {
        Self {
            runtime,
            sql: sql.into(),
            capability,
            hints: IndexMap::new(),
        }
    }

    pub fn runtime(&self) -> &Arc<Runtime> {
        &self.runtime
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn append_text(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    pub fn set_hint(&mut self, name: impl Into<String>, hint: Hint) {
        self.hints.insert(name.into(), hint);
    }

    pub fn hint(&self, name: &str) -> Option<&Hint> {
        self.hints.get(name)
    }
}
