use validator::ValidationError;

use crate::validations::add_error;

const MIN_ACCOUNT_LENGTH: usize = 2;
const MAX_ACCOUNT_LENGTH: usize = 30;

fn is_not_empty(account: &str) -> Result<(), String> {
    if account.trim().is_empty() {
        Err("Account must not be empty".to_string())
    } else {
        Ok(())
    }
}

fn has_min_length(account: &str) -> Result<(), String> {
    if account.chars().count() < MIN_ACCOUNT_LENGTH {
        Err(format!(
            "Account must be at least {} characters long",
            MIN_ACCOUNT_LENGTH
        ))
    } else {
        Ok(())
    }
}

fn has_max_length(account: &str) -> Result<(), String> {
    if account.chars().count() > MAX_ACCOUNT_LENGTH {
        Err(format!(
            "Account must be no more than {} characters long",
            MAX_ACCOUNT_LENGTH
        ))
    } else {
        Ok(())
    }
}

// Any character is fair game; accounts only have to be unique and
// reasonably sized.
pub fn validate_account(account: &str) -> Result<(), ValidationError> {
    let validations = [is_not_empty, has_min_length, has_max_length];

    let errors: Vec<String> = validations
        .iter()
        .filter_map(|validate_fn| validate_fn(account).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        let concatenated_errors = errors.join(", ");
        Err(add_error("account.invalid", concatenated_errors, account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_accounts() {
        assert!(validate_account("alice_01").is_ok());
        assert!(validate_account("bob-travels").is_ok());
        assert!(validate_account("小美").is_ok());
    }

    #[test]
    fn rejects_blank_accounts() {
        assert!(validate_account("").is_err());
        assert!(validate_account("   ").is_err());
    }

    #[test]
    fn rejects_overlong_accounts() {
        assert!(validate_account(&"a".repeat(31)).is_err());
    }
}
