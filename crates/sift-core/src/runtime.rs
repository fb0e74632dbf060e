use crate::{driver::Connection, schema::Schema};

/// The metadata/connection provider backing caller-built queries.
///
/// Queries hand out a shared reference to their runtime; generators keep it
/// for their whole lifetime.
#[derive(Debug)]
pub struct Runtime {
    schema: Schema,
    connection: Connection,
}

impl Runtime {
    pub fn new(schema: Schema, connection: Connection) -> Self {
        Self { schema, connection }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}
