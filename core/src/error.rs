use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not inside a git repository: {0}")]
    NotARepo(String),
}
