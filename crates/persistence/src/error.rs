//! Error types for the persistence layer.
//!
//! Clause builders only ever produce [`ValidationError`]. The wider
//! [`StorageError`] wraps it together with the errors raised by callers
//! that execute statements (missing rows, driver failures).

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Bad input rejected before any SQL is built
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Row state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Bad input to one of the clause builders.
///
/// Raised synchronously; a builder never returns a partial clause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A partial update was requested with no fields.
    #[error("no data to update")]
    EmptyUpdate,

    /// None of the entity's recognized filter keys were supplied.
    #[error("no recognized {entity} filter in {supplied:?}")]
    NoFilterCriteria {
        entity: &'static str,
        supplied: Vec<String>,
    },

    /// A minimum bound exceeds the maximum bound on the same column.
    #[error("{min_key} ({min}) cannot be greater than {max_key} ({max})")]
    InvertedRange {
        min_key: &'static str,
        max_key: &'static str,
        /// Integer value of the minimum, without any trailing text.
        min: String,
        /// Integer value of the maximum, without any trailing text.
        max: String,
    },

    /// A filter key the entity does not recognize.
    #[error("{key} is not a valid {entity} filter")]
    UnknownFilter { entity: &'static str, key: String },
}

/// Errors related to row state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested row was not found.
    #[error("no {entity}: {id}")]
    NotFound { entity: &'static str, id: String },
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// A bound value could not be coerced to the column type the server inferred.
    #[error("parameter ${index} cannot be bound as {expected}: {message}")]
    ParameterType {
        index: usize,
        expected: String,
        message: String,
    },

    /// The statement's values do not match its placeholders one to one.
    #[error("statement expects {expected} parameters, {supplied} supplied")]
    ParameterCount { expected: usize, supplied: usize },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type alias for clause building.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(feature = "postgres")]
impl From<tokio_postgres::Error> for StorageError {
    fn from(err: tokio_postgres::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "postgres".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "postgres")]
impl From<deadpool_postgres::PoolError> for StorageError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        match err {
            deadpool_postgres::PoolError::Timeout(_) => {
                StorageError::Backend(BackendError::PoolExhausted {
                    backend_name: "postgres".to_string(),
                })
            }
            other => StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "postgres".to_string(),
                message: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyUpdate.to_string(), "no data to update");

        let err = ValidationError::InvertedRange {
            min_key: "minEmployees",
            max_key: "maxEmployees",
            min: "10".to_string(),
            max: "5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "minEmployees (10) cannot be greater than maxEmployees (5)"
        );

        let err = ValidationError::UnknownFilter {
            entity: "company",
            key: "color".to_string(),
        };
        assert_eq!(err.to_string(), "color is not a valid company filter");
    }

    #[test]
    fn test_resource_error_display() {
        let err = StorageError::Resource(ResourceError::NotFound {
            entity: "job",
            id: "42".to_string(),
        });
        assert_eq!(err.to_string(), "no job: 42");
    }

    #[test]
    fn test_storage_error_from_validation() {
        let storage_err: StorageError = ValidationError::EmptyUpdate.into();
        assert!(matches!(
            storage_err,
            StorageError::Validation(ValidationError::EmptyUpdate)
        ));
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::ParameterType {
            index: 2,
            expected: "int4".to_string(),
            message: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().starts_with("parameter $2 cannot be bound as int4"));

        let err = BackendError::ParameterCount {
            expected: 1,
            supplied: 2,
        };
        assert_eq!(err.to_string(), "statement expects 1 parameters, 2 supplied");
    }
}
