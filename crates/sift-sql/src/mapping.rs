mod db_type;
pub use db_type::DbType;

mod field;
pub use field::{FieldMapping, FieldOptions};

mod registry;
pub use registry::{DefaultScope, MappingRegistry};
