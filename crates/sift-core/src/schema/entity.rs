use indexmap::{IndexMap, IndexSet};

use super::Association;

/// Metadata for one mapped storage object.
#[derive(Debug, Clone)]
pub struct Entity {
    pub name: String,
    pub columns: IndexSet<String>,
    pub associations: IndexMap<String, Association>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: IndexSet::new(),
            associations: IndexMap::new(),
        }
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.insert(name.into());
        self
    }

    pub fn association(mut self, property: impl Into<String>, association: Association) -> Self {
        self.associations.insert(property.into(), association);
        self
    }
}
