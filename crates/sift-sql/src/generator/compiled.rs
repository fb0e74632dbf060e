use sift_core::stmt::Value;

/// The memoized result of clause compilation: WHERE text without any
/// prepend, plus the bound parameter values in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledClause {
    pub text: String,
    pub parameters: Vec<Value>,
}
