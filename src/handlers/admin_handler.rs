use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::admin_service::AdminService,
    types::{
        requests::admin::{ChangeRoleRequest, CreateLicenseRequest, ResetPasswordRequest},
        responses::api_response::ApiResponse,
    },
};

pub async fn list_users_handler(
    admin_service: web::Data<Arc<AdminService>>,
) -> Result<HttpResponse, ApiError> {
    let users = admin_service.list_users().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Users fetched", users)))
}

pub async fn change_role_handler(
    admin_service: web::Data<Arc<AdminService>>,
    payload: web::Json<ChangeRoleRequest>,
) -> Result<HttpResponse, ApiError> {
    let data = payload.into_inner();
    let user = admin_service
        .change_role(&data.target_user_id, data.new_role)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Role updated", user)))
}

pub async fn reset_password_handler(
    admin_service: web::Data<Arc<AdminService>>,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    let data = payload.into_inner();
    admin_service
        .reset_password(&data.target_user_id, &data.new_password)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Password reset", ())))
}

pub async fn delete_user_handler(
    admin_service: web::Data<Arc<AdminService>>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    admin_service.delete_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("User removed", ())))
}

pub async fn list_licenses_handler(
    admin_service: web::Data<Arc<AdminService>>,
) -> Result<HttpResponse, ApiError> {
    let licenses = admin_service.list_licenses().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Licenses fetched", licenses)))
}

pub async fn create_license_handler(
    admin_service: web::Data<Arc<AdminService>>,
    payload: web::Json<CreateLicenseRequest>,
) -> Result<HttpResponse, ApiError> {
    let license = admin_service.create_license(payload.limit).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("License created", license)))
}

pub async fn delete_license_handler(
    admin_service: web::Data<Arc<AdminService>>,
    license_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    admin_service.delete_license(&license_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("License deleted", ())))
}
