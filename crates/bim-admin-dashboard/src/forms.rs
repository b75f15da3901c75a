//! Field-level error handling shared by the create forms

use bim_admin_client::{ClientError, FieldErrors};
use validator::ValidationErrors;

/// Per-field messages from either local validation or the server
pub fn field_errors(err: &ClientError) -> Option<FieldErrors> {
    match err {
        ClientError::Validation(errors) => Some(errors.clone()),
        ClientError::InvalidForm(errors) => Some(from_validation(errors)),
        _ => None,
    }
}

/// Flatten `validator` errors into the server's field map shape
pub fn from_validation(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), ToString::to_string)
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// First message of the first field in `order` that has one
pub fn first_message<'a>(errors: &'a FieldErrors, order: &[&str]) -> Option<&'a str> {
    order
        .iter()
        .find_map(|field| errors.get(*field).and_then(|m| m.first()))
        .map(String::as_str)
}
