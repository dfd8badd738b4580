use thiserror::Error;

/// Reasons the slider declines to start. None of them reach the page as an
/// exception; they are logged and the page keeps its static layout.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("slide container `{0}` not found")]
    MissingContainer(String),
    #[error("no sections match `{0}`")]
    NoSections(String),
    #[error("invalid selector `{0}`")]
    Selector(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config object cannot be serialized")]
    NotSerializable,
}
