use serde::Deserialize;

use crate::models::user_model::Role;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRoleRequest {
    pub target_user_id: String,

    pub new_role: Role,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub target_user_id: String,

    pub new_password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateLicenseRequest {
    pub limit: u32,
}
