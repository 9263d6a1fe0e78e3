pub mod account;
pub mod nickname;
pub mod password;

use serde_json::json;
use std::borrow::Cow;
use std::collections::HashMap;
use validator::{ValidationError, ValidationErrors};

use crate::types::requests::auth::RegisterRequest;

pub fn add_error(code: &'static str, message: String, field_value: &str) -> ValidationError {
    ValidationError {
        code: code.into(),
        message: Some(Cow::Owned(message)),
        params: {
            let mut params = HashMap::new();
            params.insert("value".into(), json!(field_value));
            params
        },
    }
}

pub fn validate_register_data(data: &RegisterRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = account::validate_account(&data.account) {
        errors.add("account", e);
    }
    if let Err(e) = password::validate_password(&data.password) {
        errors.add("password", e);
    }
    if let Err(e) = nickname::validate_nickname(&data.nickname) {
        errors.add("nickname", e);
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
