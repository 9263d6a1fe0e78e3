use serde::Deserialize;

/// The profile editor always submits the full profile; leaving the three
/// fields required keeps a partial body from blanking stored values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub user_id: String,

    pub nickname: String,

    pub gender: String,

    pub avatar: String,

    /// Only applied when non-empty; the client must re-login afterwards.
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AccountsQuery {
    /// Comma-separated account list.
    #[serde(default)]
    pub accounts: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_update_requires_the_full_profile() {
        let body = r#"{"userId": "abc123", "nickname": "Ali"}"#;
        assert!(serde_json::from_str::<UpdateProfileRequest>(body).is_err());
    }

    #[test]
    fn password_may_be_omitted() {
        let body = r#"{"userId": "abc123", "nickname": "Ali", "gender": "f", "avatar": ""}"#;
        let request: UpdateProfileRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.password, "");
    }
}
