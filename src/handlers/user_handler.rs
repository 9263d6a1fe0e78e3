use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::user_service::UserService,
    types::{
        requests::user::{AccountsQuery, UpdateProfileRequest},
        responses::{api_response::ApiResponse, user::ProfileUpdateResponse},
    },
};

pub async fn update_profile_handler(
    user_service: web::Data<Arc<UserService>>,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, ApiError> {
    let (user, logout_required) = user_service.update_profile(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Profile updated",
        ProfileUpdateResponse {
            user,
            logout_required,
        },
    )))
}

pub async fn public_profiles_handler(
    user_service: web::Data<Arc<UserService>>,
    query: web::Query<AccountsQuery>,
) -> Result<HttpResponse, ApiError> {
    let profiles = user_service.public_profiles(&query.accounts).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Profiles fetched", profiles)))
}
