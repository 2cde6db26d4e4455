use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum FetchError {
    #[error("Token URI or trait type is empty")]
    InvalidInput,
    #[error("Protocol `{0}` is not supported. Expected `https` or one of the gateway protocols")]
    UnsupportedProtocol(String),
    #[error("Request to `{url}` failed: {reason}")]
    RequestFailed { url: String, reason: String },
    #[error("Metadata does not contain any traits")]
    NoAttributes,
    #[error("Trait `{0}` not found")]
    TraitNotFound(String),
}
