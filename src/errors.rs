use thiserror::Error;

use crate::catalog::ContentType;

/// Failures raised by a key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing file could not be read or written
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded or decoded
    #[error("Failed to encode stored value: {0}")]
    Encode(#[from] serde_json::Error),

    /// Browser storage missing or refused the write
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Recoverable conditions met while browsing the catalog
#[derive(Debug, Error)]
pub enum BrowseError {
    /// A detail or watch-later reference no longer resolves to a catalog item
    #[error("No {content_type} with id {id} in the catalog")]
    StaleReference { content_type: ContentType, id: usize },

    /// Persisted or requested section id is not one of the known sections
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Persisted or requested content type is not series or movie
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    /// Catalog file could not be parsed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl BrowseError {
    /// Text shown to the user in a notice
    pub fn user_message(&self) -> String {
        match self {
            BrowseError::StaleReference { content_type, .. } => {
                format!(
                    "This {} is no longer available. Returning to the previous section.",
                    content_type.as_str()
                )
            }
            BrowseError::UnknownSection(id) => format!("Section '{}' does not exist.", id),
            BrowseError::UnknownContentType(kind) => {
                format!("'{}' is not a series or a movie.", kind)
            }
            BrowseError::InvalidCatalog(_) => "The catalog could not be loaded.".to_string(),
            BrowseError::Storage(_) => "Your changes could not be saved.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_reference_message_names_the_kind() {
        let err = BrowseError::StaleReference {
            content_type: ContentType::Movie,
            id: 9,
        };
        assert_eq!(err.to_string(), "No movie with id 9 in the catalog");
        assert!(err.user_message().starts_with("This movie is no longer available"));
    }
}
