use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("Please enter a title")]
    MissingTitle,
    #[error("Please enter a URL")]
    MissingUrl,
    #[error("Failed to save links: {0}")]
    Storage(#[from] StorageError),
}
