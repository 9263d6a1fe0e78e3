use validator::ValidationError;

use crate::validations::add_error;

// Deliberately loose: credential hardening is out of scope, the bounds only
// keep garbage out of the documents.
const MIN_PASSWORD_LENGTH: usize = 4;
const MAX_PASSWORD_LENGTH: usize = 128;

fn has_min_length(password: &str) -> Result<(), String> {
    if password.len() < MIN_PASSWORD_LENGTH {
        Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ))
    } else {
        Ok(())
    }
}

fn has_max_length(password: &str) -> Result<(), String> {
    if password.len() > MAX_PASSWORD_LENGTH {
        Err(format!(
            "Password must be no more than {} characters long",
            MAX_PASSWORD_LENGTH
        ))
    } else {
        Ok(())
    }
}

fn has_no_space(password: &str) -> Result<(), String> {
    if password.contains(' ') {
        Err("Password must not contain spaces".to_string())
    } else {
        Ok(())
    }
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let validations = [has_min_length, has_max_length, has_no_space];

    let errors: Vec<String> = validations
        .iter()
        .filter_map(|validate_fn| validate_fn(password).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        let concatenated_errors = errors.join(", ");
        Err(add_error("password.invalid", concatenated_errors, password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_passwords() {
        assert!(validate_password("1234").is_ok());
        assert!(validate_password("correct-horse").is_ok());
    }

    #[test]
    fn rejects_short_and_spaced_passwords() {
        assert!(validate_password("abc").is_err());
        assert!(validate_password("has space").is_err());
    }
}
