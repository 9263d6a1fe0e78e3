use bson::oid::ObjectId;
use serde::Serialize;

use crate::models::user_model::{Role, User};

/// A user as exposed to admin listings, with the password stripped.
#[derive(Debug, Serialize)]
pub struct UserView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    pub account: String,
    pub nickname: String,
    pub gender: String,
    pub role: Role,
    pub avatar: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            _id: user._id,
            account: user.account,
            nickname: user.nickname,
            gender: user.gender,
            role: user.role,
            avatar: user.avatar,
        }
    }
}

/// The public slice of a profile other trip members are allowed to see.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PublicProfile {
    pub account: String,
    pub nickname: String,
    pub avatar: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateResponse {
    pub user: User,
    pub logout_required: bool,
}
