use thiserror::Error;

/// Failure reported by a catalog collaborator.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request for page {page} failed: {message}")]
    Page { page: u32, message: String },

    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("failed to decode catalog response: {0}")]
    Decode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    pub fn page(page: u32, message: impl Into<String>) -> Self {
        Self::Page {
            page,
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
