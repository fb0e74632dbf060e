use thiserror::Error;

/// An error raised while configuring or compiling a search condition.
///
/// Every variant indicates a programmer or configuration mistake. None of
/// them are transient: retrying the same call yields the same error, so they
/// must propagate rather than be swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The field name is not part of the field set the search condition was
    /// built against.
    #[error("unknown search field `{0}`")]
    UnknownField(String),

    /// A mapping lookup named a field (or `field#mapping` pair) that has no
    /// registered mapping.
    #[error("search field `{0}` has no registered mapping")]
    UnmappedField(String),

    /// Mapping mutation was attempted after the WHERE clause was generated.
    /// Changing mappings at that point would silently desynchronize the
    /// clause text from its parameters.
    #[error("mapping configuration is closed, the WHERE clause has already been generated")]
    ConfigurationClosed,

    /// The target query object satisfies neither the finalized-query nor the
    /// incremental-builder contract.
    #[error("unsupported query type: {0}")]
    UnsupportedQueryType(&'static str),

    /// The target query object is of a supported kind but lacks a capability
    /// the generator requires.
    #[error("query object lacks required capability: {0}")]
    MissingCapability(&'static str),

    /// A registered property traverses more than one association step, or a
    /// step that does not exist in the schema. Pre-joined tables must be
    /// addressed with an explicit alias/entity pair instead.
    #[error("cannot resolve association path `{0}`, only single-step associations known to the schema are supported")]
    UnsupportedAssociationPath(String),

    /// The conversion context was requested before the first compilation;
    /// platform and parameters are undefined at that point.
    #[error("conversion context requested before the WHERE clause was compiled")]
    NotYetCompiled,

    /// A field was registered with neither an explicit entity/alias nor a
    /// default scope in effect.
    #[error("search field `{0}` has no entity scope, set a default scope or pass an explicit entity and alias")]
    MissingScope(String),

    /// A scope or mapping referenced an entity the schema does not define.
    #[error("unknown entity `{0}`")]
    UnknownEntity(String),
}
