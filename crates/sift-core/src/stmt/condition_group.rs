use indexmap::IndexMap;

use super::{CompareOp, Comparison, FieldConstraints, Logical, Value};

/// A nested logical group of per-field constraints.
///
/// Field order and constraint order are preserved; generated SQL follows
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionGroup {
    logical: Logical,
    fields: IndexMap<String, FieldConstraints>,
    groups: Vec<ConditionGroup>,
}

impl ConditionGroup {
    pub fn new(logical: Logical) -> Self {
        Self {
            logical,
            ..Default::default()
        }
    }

    pub fn logical(&self) -> Logical {
        self.logical
    }

    /// Adds a comparison constraint on `field`. Field-set membership is
    /// validated when the group is handed to [`SearchCondition::new`].
    ///
    /// [`SearchCondition::new`]: super::SearchCondition::new
    pub fn add_comparison(&mut self, field: impl Into<String>, op: CompareOp, value: impl Into<Value>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(Comparison::new(op, value));
    }

    pub fn add_group(&mut self, group: ConditionGroup) {
        self.groups.push(group);
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldConstraints)> {
        self.fields.iter().map(|(name, c)| (name.as_str(), c))
    }

    pub fn groups(&self) -> &[ConditionGroup] {
        &self.groups
    }

    /// True when neither this group nor any nested group holds a constraint.
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(FieldConstraints::is_empty)
            && self.groups.iter().all(ConditionGroup::is_empty)
    }
}
