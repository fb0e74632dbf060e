mod compiled;
pub use compiled::CompiledClause;

mod state;
pub use state::GeneratorState;

use sift_core::Result;

use crate::mapping::FieldOptions;

/// The backend-independent protocol for turning a search condition into a
/// parameterized WHERE clause: configure mappings, compile once, attach to
/// the query.
pub trait ConditionGenerator {
    /// Sets the entity/alias used by subsequent [`set_field`] calls that
    /// omit an explicit scope. Fails once a clause has been compiled.
    ///
    /// [`set_field`]: Self::set_field
    fn set_default_scope(&mut self, entity: &str, alias: &str) -> Result<()>;

    /// Registers or replaces the mapping for `name` (a bare field name or
    /// `field#mapping`). Fails once a clause has been compiled.
    fn set_field(&mut self, name: &str, property: &str, options: FieldOptions) -> Result<()>;

    /// Compiles the WHERE clause, caching the result on first success.
    ///
    /// `prepend` (typically `" WHERE "` or `" AND "`) is applied per call
    /// and only when the compiled clause is non-empty, so callers can
    /// concatenate unconditionally without producing a dangling operator.
    fn compile_where_clause(&mut self, prepend: &str) -> Result<String>;

    /// Compiles if necessary, then writes the clause and the conversion
    /// hint onto the query. A no-op when the clause is empty.
    fn attach_to_query(&mut self, prepend: &str) -> Result<()>;
}
