// src/common/db_utils.rs

use crate::common::error::AppError;

/// Turns a Postgres constraint violation into a 409, everything else stays a
/// database error.
///
/// `23505` (unique) and `23503` (foreign key) are the codes inspected.
pub(crate) fn conflict_on_constraint<F>(err: sqlx::Error, message: F) -> AppError
where
    F: FnOnce() -> String,
{
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
            tracing::warn!(
                code = db_err.code().as_deref().unwrap_or("?"),
                constraint = db_err.constraint().unwrap_or("?"),
                "Constraint violation"
            );
            return AppError::Conflict(message());
        }
    }
    AppError::DatabaseError(err)
}
