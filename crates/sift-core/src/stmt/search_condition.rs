use crate::{Error, Result};

use super::{ConditionGroup, FieldSet, Logical};

/// A validated tree of per-field constraints and nested logical groups.
///
/// Produced by an upstream parsing/validation stage and consumed read-only
/// by clause generation. Construction validates that every constrained field
/// belongs to the field set; the tree is immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCondition {
    field_set: FieldSet,
    root: ConditionGroup,
}

impl SearchCondition {
    pub fn new(field_set: FieldSet, root: ConditionGroup) -> Result<Self> {
        validate_group(&field_set, &root)?;
        Ok(Self { field_set, root })
    }

    /// A condition with no constraints; compiles to an empty clause.
    pub fn empty(field_set: FieldSet) -> Self {
        Self {
            field_set,
            root: ConditionGroup::new(Logical::And),
        }
    }

    pub fn field_set(&self) -> &FieldSet {
        &self.field_set
    }

    pub fn root(&self) -> &ConditionGroup {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn validate_group(field_set: &FieldSet, group: &ConditionGroup) -> Result<()> {
    for (field, _) in group.fields() {
        if !field_set.contains(field) {
            return Err(Error::UnknownField(field.to_string()));
        }
    }
    for sub in group.groups() {
        validate_group(field_set, sub)?;
    }
    Ok(())
}
