//! Shared Diesel error mapping for the library repositories.
//!
//! Messages handed back to the domain are sanitised; the raw database text is
//! only logged at debug level.

use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    debug!(%error, "connection pool failed");
    let message = match error {
        PoolError::Checkout { .. } => "database connection error",
        PoolError::Build { .. } => "database pool unavailable",
    };
    connection(message.to_owned())
}

/// Map Diesel errors into query/connection constructors.
pub(crate) fn map_basic_diesel_error<E, Q, C>(
    error: diesel::result::Error,
    query: Q,
    connection: C,
) -> E
where
    Q: Fn(&'static str) -> E,
    C: Fn(&'static str) -> E,
{
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            query("referenced row does not exist")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            query("row violates a table constraint")
        }
        _ => query("database error"),
    }
}
