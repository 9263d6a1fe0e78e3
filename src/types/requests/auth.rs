use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub account: String,

    pub password: String,

    #[serde(default)]
    pub nickname: String,

    #[serde(default)]
    pub gender: String,

    #[serde(default)]
    pub license_key: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub account: String,

    pub password: String,
}
