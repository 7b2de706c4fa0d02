// src/services/import.rs

use serde::de::DeserializeOwned;

use crate::common::error::AppError;

/// Decodes an uploaded JSON array. Empty uploads, broken JSON and empty
/// arrays are all client errors; `what` names the records in messages.
pub fn parse_json_array<T: DeserializeOwned>(bytes: &[u8], what: &str) -> Result<Vec<T>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("File is empty.".to_string()));
    }

    let records: Vec<T> = serde_json::from_slice(bytes)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON: {e}")))?;

    if records.is_empty() {
        return Err(AppError::BadRequest(format!("No {what} found in JSON.")));
    }

    Ok(records)
}

/// A database error while writing an import batch goes back to the caller
/// as a 400 carrying the reason; the batch itself is rolled back.
pub fn import_failure(err: AppError) -> AppError {
    match err {
        AppError::DatabaseError(e) => {
            tracing::warn!("Import rolled back: {}", e);
            let reason = e
                .as_database_error()
                .map(|db_err| db_err.message().to_string())
                .unwrap_or_else(|| e.to_string());
            AppError::BadRequest(format!("Import failed: {reason}"))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::guest::GuestImportRecord;

    fn message(err: AppError) -> String {
        match err {
            AppError::BadRequest(message) => message,
            other => panic!("expected a bad request, got {other:?}"),
        }
    }

    #[test]
    fn empty_upload_is_rejected() {
        let err = parse_json_array::<GuestImportRecord>(b"  \n", "guests").unwrap_err();
        assert_eq!(message(err), "File is empty.");
    }

    #[test]
    fn broken_json_is_reported() {
        let err = parse_json_array::<GuestImportRecord>(b"[{\"firstName\": ", "guests").unwrap_err();
        assert!(message(err).starts_with("Invalid JSON:"));
    }

    #[test]
    fn empty_array_is_rejected() {
        let err = parse_json_array::<GuestImportRecord>(b"[]", "guests").unwrap_err();
        assert_eq!(message(err), "No guests found in JSON.");
    }

    #[test]
    fn database_errors_during_import_become_bad_requests() {
        let err = import_failure(AppError::DatabaseError(sqlx::Error::RowNotFound));
        assert!(message(err).starts_with("Import failed:"));
    }

    #[test]
    fn other_import_errors_keep_their_kind() {
        let err = import_failure(AppError::NotFound("gone".to_string()));
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn camel_and_pascal_case_keys_are_accepted() {
        let json = br#"[
            {"firstName": "Ana", "lastName": "Souza", "email": "ana@example.com"},
            {"FirstName": "Bruno", "LastName": "Lima", "DateOfBirth": "1985-02-10"}
        ]"#;
        let records = parse_json_array::<GuestImportRecord>(json, "guests").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].email, "ana@example.com");
        assert_eq!(records[1].last_name, "Lima");
        assert!(records[1].date_of_birth.is_some());
    }
}
