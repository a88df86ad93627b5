use thiserror::Error;

/// A failure surfaced by a collection collaborator while a filter was applied.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while declaring options on a registry.
///
/// These indicate a programming mistake in the schema author's option list and
/// should abort schema construction entirely.
#[derive(Error, Debug)]
pub enum DeclareError {
    #[error("option '{option}' was declared without a type")]
    MissingType { option: String },
    #[error("option '{option}' cannot be both required and carry a default value")]
    RequiredWithDefault { option: String },
    #[error("enum type '{ty}' declares member label '{label}' more than once")]
    DuplicateEnumLabel { ty: String, label: String },
}

/// Errors raised while compiling a registry into a field descriptor.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("permission denied for argument '{argument}'")]
    PermissionDenied { argument: String },
    #[error("field complexity must be a positive number")]
    InvalidComplexity,
}

/// Errors raised while resolving a single request.
///
/// Resolution failures are fatal to that request only. They propagate to the
/// host's response path without retry and the collection chain is discarded.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no filter handler registered for option '{option}'")]
    UnknownFilter { option: String },
    #[error("value `{value}` does not match any member of enum '{ty}' for option '{option}'")]
    UnknownEnumMember {
        option: String,
        ty: String,
        value: serde_json::Value,
    },
    #[error("no handler registered for member '{member}' of option '{option}'")]
    MissingEnumHandler { option: String, member: String },
    #[error(transparent)]
    Scope(#[from] BoxError),
}

impl ResolveError {
    /// Wraps a collaborator failure so it can cross the resolver unmasked.
    pub fn scope<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Scope(Box::new(err))
    }
}
