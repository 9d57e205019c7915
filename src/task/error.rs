//! Task store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("index {index} out of range for list of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
