use validator::ValidationError;

use crate::validations::add_error;

const MAX_NICKNAME_LENGTH: usize = 50;

// Empty nicknames are allowed; readers fall back to the account name.
pub fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    if nickname.chars().count() > MAX_NICKNAME_LENGTH {
        let message = format!(
            "Nickname must be no more than {} characters long",
            MAX_NICKNAME_LENGTH
        );
        return Err(add_error("nickname.invalid", message, nickname));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_unicode_and_empty_nicknames() {
        assert!(validate_nickname("小美").is_ok());
        assert!(validate_nickname("").is_ok());
    }

    #[test]
    fn rejects_overlong_nicknames() {
        assert!(validate_nickname(&"x".repeat(51)).is_err());
    }
}
