use indexmap::IndexMap;

use sift_core::{schema::Schema, stmt::FieldSet, Error, Result};

use super::{FieldMapping, FieldOptions};

/// Entity/alias applied to registrations that omit an explicit scope.
///
/// Changing the scope never touches already-registered fields; each mapping
/// snapshots the scope in effect when it was registered.
#[derive(Debug, Clone)]
pub struct DefaultScope {
    pub entity: String,
    pub alias: String,
}

/// Single- and multi-mapping states are mutually exclusive per field.
/// Registering a named mapping over a single entry discards the single
/// entry, and vice versa.
#[derive(Debug, Clone)]
enum FieldEntry {
    Single(FieldMapping),
    Multi(IndexMap<String, FieldMapping>),
}

/// Registration-ordered store of field mappings.
///
/// The registry itself is always mutable; freezing after compilation is
/// enforced by the owning generator state, which is the only mutation
/// entry point.
#[derive(Debug, Default)]
pub struct MappingRegistry {
    default_scope: Option<DefaultScope>,
    fields: IndexMap<String, FieldEntry>,
}

impl MappingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scope used by subsequent registrations that omit an
    /// explicit entity/alias.
    pub fn set_default_scope(&mut self, entity: impl Into<String>, alias: impl Into<String>) {
        self.default_scope = Some(DefaultScope {
            entity: entity.into(),
            alias: alias.into(),
        });
    }

    /// Registers or replaces the mapping for `name`, which is either a bare
    /// field name or `field#mapping`.
    ///
    /// The field must belong to `field_set`. A property of the form
    /// `association.column` is resolved one step through `schema`; longer
    /// paths are rejected and must be modeled as an explicit alias/entity
    /// pair pointing at the already-joined table.
    pub fn set_field(
        &mut self,
        schema: &Schema,
        field_set: &FieldSet,
        name: &str,
        property: &str,
        options: FieldOptions,
    ) -> Result<()> {
        let (field, mapping_name) = match name.split_once('#') {
            Some((field, mapping)) => (field, Some(mapping.to_string())),
            None => (name, None),
        };

        if !field_set.contains(field) {
            return Err(Error::UnknownField(field.to_string()));
        }

        let (entity, alias) = self.scope_for(field, &options)?;
        if schema.get_entity(&entity).is_none() {
            return Err(Error::UnknownEntity(entity));
        }

        let mapping = resolve_property(schema, field, mapping_name, entity, alias, property, &options)?;
        self.insert(field, mapping);
        Ok(())
    }

    /// Looks up the mapping for `field`, optionally discriminated by
    /// mapping name.
    pub fn resolve(&self, field: &str, mapping_name: Option<&str>) -> Result<&FieldMapping> {
        let entry = self
            .fields
            .get(field)
            .ok_or_else(|| Error::UnmappedField(field.to_string()))?;

        match (entry, mapping_name) {
            (FieldEntry::Single(mapping), None) => Ok(mapping),
            (FieldEntry::Multi(mappings), Some(name)) => mappings
                .get(name)
                .ok_or_else(|| Error::UnmappedField(format!("{field}#{name}"))),
            (FieldEntry::Single(_), Some(name)) => {
                Err(Error::UnmappedField(format!("{field}#{name}")))
            }
            (FieldEntry::Multi(_), None) => Err(Error::UnmappedField(field.to_string())),
        }
    }

    /// All registered mappings, in registration order.
    pub fn mappings(&self) -> Vec<&FieldMapping> {
        self.fields
            .values()
            .flat_map(|entry| match entry {
                FieldEntry::Single(mapping) => vec![mapping],
                FieldEntry::Multi(mappings) => mappings.values().collect(),
            })
            .collect()
    }

    /// The mappings registered for one field, if any.
    pub fn mappings_for(&self, field: &str) -> Option<Vec<&FieldMapping>> {
        Some(match self.fields.get(field)? {
            FieldEntry::Single(mapping) => vec![mapping],
            FieldEntry::Multi(mappings) => mappings.values().collect(),
        })
    }

    /// The subset of mappings whose values need a conversion replayed
    /// during result hydration.
    pub fn conversion_mappings(&self) -> Vec<FieldMapping> {
        self.mappings()
            .into_iter()
            .filter(|mapping| mapping.requires_hydration())
            .cloned()
            .collect()
    }

    fn scope_for(&self, field: &str, options: &FieldOptions) -> Result<(String, String)> {
        let default = self.default_scope.as_ref();
        let entity = options
            .entity
            .clone()
            .or_else(|| default.map(|scope| scope.entity.clone()));
        let alias = options
            .alias
            .clone()
            .or_else(|| default.map(|scope| scope.alias.clone()));

        match (entity, alias) {
            (Some(entity), Some(alias)) => Ok((entity, alias)),
            _ => Err(Error::MissingScope(field.to_string())),
        }
    }

    fn insert(&mut self, field: &str, mapping: FieldMapping) {
        let entry = match mapping.mapping_name.clone() {
            None => FieldEntry::Single(mapping),
            Some(name) => {
                if let Some(FieldEntry::Multi(mappings)) = self.fields.get_mut(field) {
                    mappings.insert(name, mapping);
                    return;
                }
                // Absent, or a single entry being invalidated by the first
                // named registration.
                let mut mappings = IndexMap::new();
                mappings.insert(name, mapping);
                FieldEntry::Multi(mappings)
            }
        };
        self.fields.insert(field.to_string(), entry);
    }
}

fn resolve_property(
    schema: &Schema,
    field: &str,
    mapping_name: Option<String>,
    entity: String,
    alias: String,
    property: &str,
    options: &FieldOptions,
) -> Result<FieldMapping> {
    match property.matches('.').count() {
        0 => Ok(FieldMapping {
            field: field.to_string(),
            mapping_name,
            entity,
            alias,
            column: property.to_string(),
            db_type: options.db_type,
        }),
        1 => {
            let path = schema
                .resolve_association_path(&entity, property)
                .ok_or_else(|| Error::UnsupportedAssociationPath(format!("{entity}.{property}")))?;
            Ok(FieldMapping {
                field: field.to_string(),
                mapping_name,
                entity: path.entity,
                alias: path.alias,
                column: path.column,
                db_type: options.db_type,
            })
        }
        _ => Err(Error::UnsupportedAssociationPath(property.to_string())),
    }
}
