mod capability;
pub use capability::Capability;

mod hint;
pub use hint::Hint;

mod native_query;
pub use native_query::NativeQuery;

mod select_builder;
pub use select_builder::SelectBuilder;

mod target;
pub use target::QueryTarget;
