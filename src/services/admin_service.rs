use chrono::Utc;
use log::info;
use rand::{Rng, distributions::Alphanumeric};
use std::sync::Arc;

use crate::{
    constants::{LICENSE_KEY_PREFIX, LICENSE_KEY_RANDOM_LEN, SUPER_ADMIN_ACCOUNT},
    errors::ApiError,
    models::{
        license_model::License,
        user_model::{Role, User},
    },
    repositories::{license_repository::LicenseRepository, user_repository::UserRepository},
    types::responses::user::UserView,
    utils::parse_object_id,
};

pub struct AdminService {
    user_repository: Arc<UserRepository>,
    license_repository: Arc<LicenseRepository>,
}

impl AdminService {
    pub fn new(
        user_repository: Arc<UserRepository>,
        license_repository: Arc<LicenseRepository>,
    ) -> Self {
        Self {
            user_repository,
            license_repository,
        }
    }

    pub async fn list_users(&self) -> Result<Vec<UserView>, ApiError> {
        let users = self.user_repository.get_all_users().await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }

    pub async fn change_role(&self, target_user_id: &str, new_role: Role) -> Result<User, ApiError> {
        let user_id = parse_object_id(target_user_id)?;
        let target = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("User"))?;

        if target.account == SUPER_ADMIN_ACCOUNT {
            return Err(ApiError::Forbidden(
                "The super admin role cannot be changed".to_string(),
            ));
        }

        self.user_repository
            .set_role(user_id, new_role.as_str())
            .await?
            .ok_or_else(|| ApiError::not_found("User"))
    }

    pub async fn reset_password(
        &self,
        target_user_id: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let user_id = parse_object_id(target_user_id)?;
        self.user_repository
            .set_password(user_id, new_password)
            .await?;
        Ok(())
    }

    pub async fn delete_user(&self, target_user_id: &str) -> Result<(), ApiError> {
        let user_id = parse_object_id(target_user_id)?;
        let target = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("User"))?;

        if target.account == SUPER_ADMIN_ACCOUNT {
            return Err(ApiError::Forbidden(
                "The super admin account cannot be deleted".to_string(),
            ));
        }

        self.user_repository.delete_by_id(user_id).await?;
        info!("Removed account '{}'", target.account);
        Ok(())
    }

    pub async fn list_licenses(&self) -> Result<Vec<License>, ApiError> {
        Ok(self.license_repository.get_all_licenses().await?)
    }

    pub async fn create_license(&self, limit: u32) -> Result<License, ApiError> {
        let license = License {
            _id: None,
            key: generate_license_key(),
            limit,
            used: 0,
            created_at: Utc::now(),
        };
        Ok(self.license_repository.create_license(&license).await?)
    }

    pub async fn delete_license(&self, license_id: &str) -> Result<(), ApiError> {
        let license_id = parse_object_id(license_id)?;
        if !self.license_repository.delete_by_id(license_id).await? {
            return Err(ApiError::not_found("License key"));
        }
        Ok(())
    }
}

fn generate_license_key() -> String {
    let random: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(LICENSE_KEY_RANDOM_LEN)
        .map(|byte| (byte as char).to_ascii_uppercase())
        .collect();
    format!("{}{}", LICENSE_KEY_PREFIX, random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn license_keys_have_the_expected_shape() {
        let key = generate_license_key();
        assert!(key.starts_with(LICENSE_KEY_PREFIX));
        assert_eq!(key.len(), LICENSE_KEY_PREFIX.len() + LICENSE_KEY_RANDOM_LEN);
        assert!(
            key[LICENSE_KEY_PREFIX.len()..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn license_keys_are_not_constant() {
        let keys: std::collections::HashSet<String> =
            (0..16).map(|_| generate_license_key()).collect();
        assert!(keys.len() > 1);
    }
}
