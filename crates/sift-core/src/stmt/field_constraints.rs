use super::Comparison;

/// The ordered constraints placed on one search field within a group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldConstraints {
    comparisons: Vec<Comparison>,
}

impl FieldConstraints {
    pub fn push(&mut self, comparison: Comparison) {
        self.comparisons.push(comparison);
    }

    pub fn comparisons(&self) -> &[Comparison] {
        &self.comparisons
    }

    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }
}
