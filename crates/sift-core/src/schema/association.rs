/// A named single-step reference from one entity to another.
#[derive(Debug, Clone)]
pub struct Association {
    /// Entity on the far side of the association.
    pub target_entity: String,

    /// Alias under which the target is joined in caller-built queries.
    pub join_alias: String,
}

impl Association {
    pub fn new(target_entity: impl Into<String>, join_alias: impl Into<String>) -> Self {
        Self {
            target_entity: target_entity.into(),
            join_alias: join_alias.into(),
        }
    }
}
