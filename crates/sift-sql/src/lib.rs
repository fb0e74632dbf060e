mod conversion;
pub use conversion::ConversionContext;

pub mod generator;
pub use generator::{CompiledClause, ConditionGenerator};

pub mod mapping;
pub use mapping::{DbType, FieldMapping, FieldOptions, MappingRegistry};

mod platform;
pub use platform::Platform;

mod query_gen;
pub use query_gen::{GeneratedWhere, QueryGenerator};

mod where_builder;
pub use where_builder::WhereBuilder;

pub use sift_core::{Error, Result};
