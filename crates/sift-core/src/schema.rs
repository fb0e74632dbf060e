mod association;
pub use association::Association;

mod entity;
pub use entity::Entity;

mod join_path;
pub use join_path::JoinPath;

use indexmap::IndexMap;

/// Entity metadata the mapping runtime exposes to clause generation.
///
/// The runtime performs whatever reflection it needs elsewhere; this type
/// only answers pure lookups.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entities: IndexMap<String, Entity>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.insert(entity.name.clone(), entity);
        self
    }

    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Resolves a single-step association path of the form
    /// `association.column` against `entity`.
    ///
    /// Returns `None` when the association or the column on its target does
    /// not exist. Callers reject multi-step paths before calling this.
    pub fn resolve_association_path(&self, entity: &str, property: &str) -> Option<JoinPath> {
        let (association, column) = property.split_once('.')?;
        let association = self.entities.get(entity)?.associations.get(association)?;
        let target = self.entities.get(&association.target_entity)?;

        if !target.columns.contains(column) {
            return None;
        }

        Some(JoinPath {
            entity: association.target_entity.clone(),
            alias: association.join_alias.clone(),
            column: column.to_string(),
        })
    }
}
