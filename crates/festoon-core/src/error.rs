use thiserror::Error;

#[derive(Debug, Error)]
pub enum FestoonError {
    #[error("document error: {0}")]
    Document(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FestoonResult<T> = Result<T, FestoonError>;
