use serde::Serialize;
use std::fmt;

/// Result type for erpview-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// SQLite operation failed
    Database(rusqlite::Error),

    /// A row could not be encoded or decoded
    Serialization(serde_json::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Query-specific error (invalid input, row not found, etc.)
    Query(String),

    /// Write rejected because it would break a uniqueness rule
    Conflict(String),

    /// Backend reported a failure that has no better category
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                // Detect schema mismatch errors and provide actionable hint
                if msg.contains("no such column") || msg.contains("no such table") {
                    write!(
                        f,
                        "Database schema mismatch: {}. Reopen the store to auto-migrate.",
                        msg
                    )
                } else {
                    write!(f, "Database error: {}", err)
                }
            }
            Error::Serialization(err) => write!(f, "Serialization error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Query(msg) => write!(f, "Query error: {}", msg),
            Error::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Error::Backend(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Serialization(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Query(_) | Error::Conflict(_) | Error::Backend(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// The `{data, error}` pair for hosts that embed the store outside Rust,
/// e.g. a UI bridge serializing results to JSON. Exactly one side is set;
/// the error is a human-readable message.
///
/// Library API only. Rust callers, the `erpview` binary included, work with
/// [`Result`] directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> StoreResponse<T> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl<T> From<Result<T>> for StoreResponse<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                error: None,
            },
            Err(err) => Self {
                data: None,
                error: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("no such column: body".to_string()),
        );
        let err = Error::Database(sqlite_err);
        let msg = err.to_string();

        assert!(msg.contains("Database schema mismatch"));
        assert!(msg.contains("Reopen the store to auto-migrate"));
    }

    #[test]
    fn test_regular_database_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("UNIQUE constraint failed".to_string()),
        );
        let err = Error::Database(sqlite_err);
        let msg = err.to_string();

        assert!(msg.starts_with("Database error:"));
        assert!(!msg.contains("auto-migrate"));
    }

    #[test]
    fn test_response_from_result() {
        let ok: StoreResponse<u32> = Ok(7).into();
        assert_eq!(ok.data, Some(7));
        assert!(ok.is_ok());

        let failed: StoreResponse<u32> = Err(Error::Query("row not found".to_string())).into();
        assert_eq!(failed.data, None);
        assert_eq!(failed.error.as_deref(), Some("Query error: row not found"));
    }

    #[test]
    fn test_response_serializes_both_sides() {
        let failed: StoreResponse<u32> = Err(Error::Query("row not found".to_string())).into();
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({"data": null, "error": "Query error: row not found"})
        );
    }
}
