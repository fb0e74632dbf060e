/// The conjunction joining the parts of a condition group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Logical {
    #[default]
    And,
    Or,
}

impl Logical {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}
