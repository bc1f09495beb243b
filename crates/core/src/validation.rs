//! Request validation.
//!
//! Wraps `validator` so callers get a [`CoreError::Validation`] listing
//! every violated rule instead of stopping at the first.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run all field rules on `request`.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), CoreError> {
    request
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten `errors` into `"<field>: <message>"` lines, ordered by field name.
pub fn describe(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), errs))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: failed '{}' rule", err.code),
            })
        })
        .collect()
}
