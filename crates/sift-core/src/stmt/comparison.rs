use super::{CompareOp, Value};

/// A single constraint on a search field: an operator and the value it is
/// compared against.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    op: CompareOp,
    value: Value,
}

impl Comparison {
    pub fn new(op: CompareOp, value: impl Into<Value>) -> Self {
        Self {
            op,
            value: value.into(),
        }
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
