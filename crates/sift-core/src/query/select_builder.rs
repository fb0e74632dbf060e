use std::sync::Arc;

use indexmap::IndexMap;

use crate::Runtime;

use super::{Capability, Hint};

/// An incrementally built query whose filter expression grows by
/// conjunction.
#[derive(Debug)]
pub struct SelectBuilder {
    runtime: Arc<Runtime>,
    where_parts: Vec<String>,
    capability: Capability,
    hints: IndexMap<String, Hint>,
}

impl SelectBuilder {
    pub fn new(runtime: Arc<Runtime>) -> Self {
        Self::with_capability(
            runtime,
            Capability {
                hint_attachment: true,
                incremental_append: true,
            },
        )
    }

    pub fn with_capability(runtime: Arc<Runtime>, capability: Capability) -> Self {
        Self {
            runtime,
            where_parts: Vec::new(),
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

    /// Adds `expr` to the filter expression, AND-ed with what is already
    /// there.
    pub fn and_where(&mut self, expr: impl Into<String>) {
        self.where_parts.push(expr.into());
    }

    /// The accumulated filter expression.
    pub fn where_sql(&self) -> String {
        self.where_parts.join(" AND ")
    }

    pub fn set_hint(&mut self, name: impl Into<String>, hint: Hint) {
        self.hints.insert(name.into(), hint);
    }

    pub fn hint(&self, name: &str) -> Option<&Hint> {
        self.hints.get(name)
    }
}
