//! Validation for registration credentials.

use serde::Deserialize;

use crate::validation::FieldViolation;

/// Minimum length for usernames and passwords.
const MIN_CREDENTIAL_LEN: usize = 4;

/// Unvalidated credentials as received from the caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Validated credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

fn check_credential(
    value: Option<&str>,
    field: &'static str,
    label: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match value {
        None => {
            violations.push(FieldViolation::new(field, format!("{label} is required")));
            None
        }
        Some("") => {
            violations.push(FieldViolation::new(
                field,
                format!("{label} cannot be empty"),
            ));
            None
        }
        Some(s) if s.chars().count() < MIN_CREDENTIAL_LEN => {
            violations.push(FieldViolation::new(
                field,
                format!("{label} must be at least {MIN_CREDENTIAL_LEN} characters long"),
            ));
            None
        }
        Some(s) => Some(s.to_string()),
    }
}

/// Validate registration credentials, returning the parsed pair or every
/// field-level violation in declaration order.
pub fn validate_credentials(input: &CredentialsInput) -> Result<Credentials, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let username = check_credential(
        input.username.as_deref(),
        "username",
        "Username",
        &mut violations,
    );
    let password = check_credential(
        input.password.as_deref(),
        "password",
        "Password",
        &mut violations,
    );

    match (username, password) {
        (Some(username), Some(password)) if violations.is_empty() => Ok(Credentials {
            username,
            password,
        }),
        _ => Err(violations),
    }
}
