/// Database-level type attached to a field mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbType {
    Integer,
    BigInt,
    Text,
    Boolean,
    Decimal,
    Uuid,
    Json,
    Timestamp,
}

impl DbType {
    /// True when values of this type need a conversion replayed during
    /// result hydration, after the final bound parameter values are known.
    pub fn requires_hydration(self) -> bool {
        matches!(self, Self::Uuid | Self::Json | Self::Timestamp)
    }
}
