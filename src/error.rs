use thiserror::Error;

pub type ViewerResult<T> = Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("engine failure: {0}")]
    Engine(String),

    #[error("plot handler for kind `{kind}` failed: {message}")]
    Plugin { kind: String, message: String },
}
