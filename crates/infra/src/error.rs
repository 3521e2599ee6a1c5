use thiserror::Error;

use stockpulse_core::DomainError;

/// Failure to obtain products or sales from the catalog store.
///
/// These are never recovered inside the service; callers translate them into
/// a user-visible failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error in {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("invalid record in {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("failed to load seed data: {0}")]
    Seed(String),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn database(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Database { operation, source }
    }

    pub fn decode(operation: &'static str, source: DomainError) -> Self {
        Self::Decode { operation, source }
    }
}
