#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StreamError {
    #[error("No element found.")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, StreamError>;
