use super::DbType;

/// The resolved binding of one logical search field to a concrete column:
/// entity identity, table alias, column name and database type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    /// Logical search-field name.
    pub field: String,

    /// Secondary discriminator when one field binds to several columns.
    pub mapping_name: Option<String>,

    pub entity: String,
    pub alias: String,
    pub column: String,
    pub db_type: Option<DbType>,
}

impl FieldMapping {
    /// Whether this mapping must travel with the query for result
    /// hydration.
    pub fn requires_hydration(&self) -> bool {
        self.db_type.is_some_and(DbType::requires_hydration)
    }

    /// The alias-qualified column reference emitted into SQL.
    pub fn qualified_column(&self) -> String {
        format!("{}.{}", self.alias, self.column)
    }
}

/// Optional per-registration overrides for
/// [`MappingRegistry::set_field`](super::MappingRegistry::set_field).
///
/// An omitted `entity`/`alias` falls back to the default scope in effect at
/// registration time.
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    pub entity: Option<String>,
    pub alias: Option<String>,
    pub db_type: Option<DbType>,
}

impl FieldOptions {
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn db_type(mut self, db_type: DbType) -> Self {
        self.db_type = Some(db_type);
        self
    }
}
