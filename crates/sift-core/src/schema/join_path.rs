/// The result of resolving a single-step association: the joined entity,
/// the alias it is joined under, and the column on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinPath {
    pub entity: String,
    pub alias: String,
    pub column: String,
}
