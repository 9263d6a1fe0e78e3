use actix_web::{HttpResponse, web};
use log::info;
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::user_service::UserService,
    types::{
        requests::auth::{LoginRequest, RegisterRequest},
        responses::api_response::ApiResponse,
    },
    validations::validate_register_data,
};

pub async fn register_user_handler(
    user_service: web::Data<Arc<UserService>>,
    new_user: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let data = new_user.into_inner();

    validate_register_data(&data).map_err(|errors| ApiError::Validation {
        message: "Invalid registration data".to_string(),
        errors,
    })?;

    let user = user_service.register_user(data).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Registration successful", user)))
}

pub async fn login_handler(
    user_service: web::Data<Arc<UserService>>,
    credentials: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let data = credentials.into_inner();

    let user = user_service
        .authenticate_user(&data.account, &data.password)
        .await?;

    info!("User '{}' successfully logged in.", data.account);
    Ok(HttpResponse::Ok().json(ApiResponse::success("Login successful", user)))
}
