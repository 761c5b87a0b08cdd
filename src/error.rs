use thiserror::Error;

/// A sort specification that cannot be resolved into a comparator.
///
/// Raised while resolving, before any element is compared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfigError {
    #[error("Expected `asc` or `desc` property")]
    MissingOrder,

    #[error("Ambiguous object with `asc` and `desc` config properties")]
    AmbiguousOrder,

    #[error("String syntax not allowed for nested properties: `{0}`")]
    NestedProperty(String),
}

pub type Result<T> = std::result::Result<T, InvalidConfigError>;

/// An algorithm name that is not one of the known strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort algorithm: `{0}`")]
pub struct ParseAlgorithmError(pub String);
