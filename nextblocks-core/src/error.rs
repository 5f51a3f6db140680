/// Errors from the fallible edges of the core: configuration input and scene output
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid page configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("failed to encode scene: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
