mod compare_op;
pub use compare_op::CompareOp;

mod comparison;
pub use comparison::Comparison;

mod condition_group;
pub use condition_group::ConditionGroup;

mod field_constraints;
pub use field_constraints::FieldConstraints;

mod field_set;
pub use field_set::FieldSet;

mod logical;
pub use logical::Logical;

mod search_condition;
pub use search_condition::SearchCondition;

mod value;
pub use value::Value;
