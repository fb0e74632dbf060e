use indexmap::IndexSet;

/// The set of logical search-field names a condition was built against.
///
/// Field names identify what can be filtered on independent of storage
/// layout; mapping registration is validated against this set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    names: IndexSet<String>,
}

impl FieldSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
