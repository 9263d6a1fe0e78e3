use log::info;
use std::sync::Arc;

use crate::{
    constants::SUPER_ADMIN_ACCOUNT,
    errors::ApiError,
    models::user_model::{Role, User},
    repositories::{license_repository::LicenseRepository, user_repository::UserRepository},
    types::{
        requests::{auth::RegisterRequest, user::UpdateProfileRequest},
        responses::user::PublicProfile,
    },
    utils::parse_object_id,
};

pub struct UserService {
    user_repository: Arc<UserRepository>,
    license_repository: Arc<LicenseRepository>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<UserRepository>,
        license_repository: Arc<LicenseRepository>,
    ) -> Self {
        Self {
            user_repository,
            license_repository,
        }
    }

    /// Registration is gated by a license key with a remaining-use budget.
    /// The reserved `admin` account registers straight into the admin role.
    pub async fn register_user(&self, data: RegisterRequest) -> Result<User, ApiError> {
        let license = self
            .license_repository
            .find_by_key(data.license_key.trim())
            .await?
            .filter(|license| !license.is_exhausted())
            .ok_or_else(|| {
                ApiError::Forbidden(
                    "License key is invalid or has reached its usage limit".to_string(),
                )
            })?;

        if self
            .user_repository
            .find_by_account(&data.account)
            .await?
            .is_some()
        {
            return Err(ApiError::BadRequest("Account already exists".to_string()));
        }

        let role = if data.account == SUPER_ADMIN_ACCOUNT {
            Role::Admin
        } else {
            Role::User
        };

        let user = User {
            _id: None,
            account: data.account,
            password: data.password,
            nickname: data.nickname,
            gender: data.gender,
            role,
            avatar: String::new(),
        };
        let user = self.user_repository.create_user(&user).await?;

        if let Some(license_id) = license._id {
            self.license_repository.increment_used(license_id).await?;
        }

        info!("Registered account '{}'", user.account);
        Ok(user)
    }

    pub async fn authenticate_user(
        &self,
        account: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        self.user_repository
            .find_by_credentials(account, password)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Incorrect account or password".to_string()))
    }

    /// Applies a profile edit; the password only changes when one was typed,
    /// and in that case the caller must be logged out to re-authenticate.
    pub async fn update_profile(
        &self,
        data: UpdateProfileRequest,
    ) -> Result<(User, bool), ApiError> {
        let user_id = parse_object_id(&data.user_id)?;

        let password_changed = !data.password.trim().is_empty();
        let new_password = password_changed.then_some(data.password.as_str());

        let user = self
            .user_repository
            .update_profile(user_id, &data.nickname, &data.gender, &data.avatar, new_password)
            .await?
            .ok_or_else(|| ApiError::not_found("User"))?;

        Ok((user, password_changed))
    }

    /// Batch lookup of public profiles, preserving the requested order and
    /// substituting a bare fallback for unknown accounts.
    pub async fn public_profiles(&self, raw_accounts: &str) -> Result<Vec<PublicProfile>, ApiError> {
        let accounts: Vec<String> = raw_accounts
            .split(',')
            .map(str::trim)
            .filter(|account| !account.is_empty())
            .map(str::to_string)
            .collect();

        if accounts.is_empty() {
            return Ok(Vec::new());
        }

        let users = self.user_repository.find_by_accounts(&accounts).await?;
        Ok(map_public_profiles(&accounts, users))
    }
}

fn map_public_profiles(accounts: &[String], users: Vec<User>) -> Vec<PublicProfile> {
    let mut by_account = std::collections::HashMap::new();
    for user in users {
        by_account.insert(user.account.clone(), user);
    }

    accounts
        .iter()
        .map(|account| match by_account.get(account) {
            Some(user) => PublicProfile {
                account: user.account.clone(),
                nickname: if user.nickname.is_empty() {
                    user.account.clone()
                } else {
                    user.nickname.clone()
                },
                avatar: user.avatar.clone(),
            },
            None => PublicProfile {
                account: account.clone(),
                nickname: account.clone(),
                avatar: String::new(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(account: &str, nickname: &str) -> User {
        User {
            _id: None,
            account: account.to_string(),
            password: "pw".to_string(),
            nickname: nickname.to_string(),
            gender: String::new(),
            role: Role::User,
            avatar: String::new(),
        }
    }

    #[test]
    fn profiles_keep_the_requested_order() {
        let accounts = vec!["carol".to_string(), "alice".to_string()];
        let users = vec![user("alice", "Alice"), user("carol", "Carol")];

        let profiles = map_public_profiles(&accounts, users);
        assert_eq!(profiles[0].account, "carol");
        assert_eq!(profiles[1].account, "alice");
    }

    #[test]
    fn unknown_accounts_get_a_fallback_profile() {
        let accounts = vec!["ghost".to_string()];
        let profiles = map_public_profiles(&accounts, Vec::new());

        assert_eq!(profiles[0].nickname, "ghost");
        assert_eq!(profiles[0].avatar, "");
    }

    #[test]
    fn empty_nickname_falls_back_to_the_account() {
        let accounts = vec!["bob".to_string()];
        let profiles = map_public_profiles(&accounts, vec![user("bob", "")]);

        assert_eq!(profiles[0].nickname, "bob");
    }
}
