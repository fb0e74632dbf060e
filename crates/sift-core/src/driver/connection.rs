use super::Dialect;

/// A borrowed handle to a database connection.
///
/// Clause generation performs no I/O; the handle carries what generation
/// needs to know about the connection it targets. Opening and closing the
/// real connection is the caller's business.
#[derive(Debug, Clone)]
pub struct Connection {
    dialect: Dialect,
}

impl Connection {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}
