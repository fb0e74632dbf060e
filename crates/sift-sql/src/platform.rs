use std::fmt::Write;

use sift_core::{driver::Dialect, stmt::Value, Connection};

/// Dialect-specific rendering strategy for placeholders and inline
/// literals.
///
/// Values the query generator inlines instead of binding are recorded so
/// they can be recovered out of band after generation via
/// [`embedded_values`](Self::embedded_values).
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    dialect: Dialect,
    embedded: Vec<Value>,
}

impl Platform {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            embedded: Vec::new(),
        }
    }

    /// A platform bound to the dialect of `connection`.
    pub fn for_connection(connection: &Connection) -> Self {
        Self::new(connection.dialect())
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Writes the placeholder for the `ordinal`-th bound parameter
    /// (1-based).
    pub fn push_placeholder(&self, dst: &mut String, ordinal: usize) {
        match self.dialect {
            Dialect::Mysql => dst.push('?'),
            Dialect::Postgresql => write!(dst, "${ordinal}").unwrap(),
            Dialect::Sqlite => write!(dst, "?{ordinal}").unwrap(),
        }
    }

    /// Renders `value` as an inline SQL literal and records it for later
    /// recovery.
    pub fn embed(&mut self, value: &Value) -> String {
        let text = self.literal(value);
        self.embedded.push(value.clone());
        text
    }

    /// Values inlined into the clause text instead of being bound.
    pub fn embedded_values(&self) -> &[Value] {
        &self.embedded
    }

    fn literal(&self, value: &Value) -> String {
        match value {
            Value::Bool(value) => match self.dialect {
                // SQLite has no boolean literals
                Dialect::Sqlite => if *value { "1" } else { "0" }.to_string(),
                _ => if *value { "TRUE" } else { "FALSE" }.to_string(),
            },
            Value::I64(value) => value.to_string(),
            Value::F64(value) => value.to_string(),
            Value::String(value) => format!("'{}'", value.replace('\'', "''")),
            Value::Null => "NULL".to_string(),
        }
    }
}
