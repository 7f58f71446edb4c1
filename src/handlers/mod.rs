//! HTTP handlers for owner and account endpoints.

pub mod account;
pub mod owner;

use crate::error::AppError;
use serde_json::Value;

/// Decode a JSON body at the boundary so malformed or missing bodies map to
/// 400 rather than the framework's default rejection.
fn decode_body<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, AppError> {
    if body.is_null() {
        return Err(AppError::Validation("request body is required".into()));
    }
    serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("invalid request body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::owner::OwnerForCreation;

    #[test]
    fn null_body_is_a_validation_error() {
        let got = decode_body::<OwnerForCreation>(Value::Null);
        assert!(matches!(got, Err(AppError::Validation(_))));
    }

    #[test]
    fn missing_fields_are_a_validation_error() {
        let got = decode_body::<OwnerForCreation>(serde_json::json!({"name": "Ann"}));
        assert!(matches!(got, Err(AppError::Validation(_))));
    }

    #[test]
    fn well_formed_body_decodes() {
        let got = decode_body::<OwnerForCreation>(serde_json::json!({
            "name": "Ann",
            "dateOfBirth": "1995-03-14",
            "address": "12 Main St"
        }));
        assert!(got.is_ok());
    }
}
