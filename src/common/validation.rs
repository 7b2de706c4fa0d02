// src/common/validation.rs

use rust_decimal::Decimal;
use validator::ValidationError;

/// `validator` ranges don't cover `Decimal`.
pub fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("range");
        err.message = Some("must not be negative".into());
        return Err(err);
    }
    Ok(())
}
