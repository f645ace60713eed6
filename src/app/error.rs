use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration search error: {0}")]
    Search(#[from] crate::sorting::SearchError),
    #[error("Containment error: {0}")]
    Containment(#[from] crate::containment::ContainmentError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
