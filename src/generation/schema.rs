//! Contract enforcement for parsed model output.
//!
//! [`validate_response`] is the single gate between untrusted JSON and a
//! typed [`AiResponse`]: shape and enum membership are enforced by serde,
//! minimum-length/range/index constraints by the `validator` rules on the
//! entity types. Nothing is coerced or repaired; a mismatch reports every
//! violated field.

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::domain::entities::AiResponse;

/// Validates a parsed JSON value against the response contract.
///
/// # Errors
///
/// Returns the list of violated fields (dotted paths with the rule
/// message) when the value does not satisfy the contract. A value that
/// fails structural deserialization yields a single violation describing
/// the serde error.
pub fn validate_response(value: serde_json::Value) -> Result<AiResponse, Vec<String>> {
    let response: AiResponse =
        serde_json::from_value(value).map_err(|e| vec![e.to_string()])?;

    match response.validate() {
        Ok(()) => Ok(response),
        Err(errors) => Err(flatten_violations(&errors)),
    }
}

/// Flattens the nested validation error tree into sorted dotted paths.
fn flatten_violations(errors: &ValidationErrors) -> Vec<String> {
    let mut out = Vec::new();
    collect(errors, "", &mut out);
    out.sort();
    out
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(map) => {
                for (index, nested) in map {
                    collect(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}
