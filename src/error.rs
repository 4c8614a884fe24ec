use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while searching for or loading recipes
#[derive(Error, Debug)]
pub enum FinderError {
    /// The search term was empty or whitespace only
    #[error("Search term cannot be empty")]
    EmptyQuery,

    /// The API answered successfully but held no matching meal
    #[error("No matching meals")]
    NotFound,

    /// The API answered with a non-success status
    #[error("Unexpected HTTP status: {0}")]
    Status(StatusCode),

    /// Failed to reach the API or decode its response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

/// How an error should be presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caught locally before any network call; the input stays editable
    LocalValidation,
    /// The call succeeded but nothing matched; informational
    EmptyResult,
    /// Network or HTTP failure; only a generic retry message is shown
    Transport,
}

impl FinderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FinderError::EmptyQuery => ErrorKind::LocalValidation,
            FinderError::NotFound => ErrorKind::EmptyResult,
            FinderError::Status(_) | FinderError::Transport(_) | FinderError::ConfigError(_) => {
                ErrorKind::Transport
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(FinderError::EmptyQuery.kind(), ErrorKind::LocalValidation);
        assert_eq!(FinderError::NotFound.kind(), ErrorKind::EmptyResult);
        assert_eq!(
            FinderError::Status(StatusCode::SERVICE_UNAVAILABLE).kind(),
            ErrorKind::Transport
        );
    }

    #[test]
    fn test_status_message_includes_code() {
        let err = FinderError::Status(StatusCode::NOT_FOUND);
        assert!(err.to_string().contains("404"));
    }
}
