use actix_web::web;
use std::sync::Arc;

use crate::{
    handlers::admin_handler::{
        change_role_handler, create_license_handler, delete_license_handler, delete_user_handler,
        list_licenses_handler, list_users_handler, reset_password_handler,
    },
    services::admin_service::AdminService,
};

pub fn configure_admin_routes(
    cfg: &mut web::ServiceConfig,
    admin_service_data: web::Data<Arc<AdminService>>,
) {
    cfg.app_data(admin_service_data)
        .route("/admin/users", web::get().to(list_users_handler))
        .route("/admin/users/{id}", web::delete().to(delete_user_handler))
        .route("/admin/change-role", web::put().to(change_role_handler))
        .route(
            "/admin/reset-password",
            web::put().to(reset_password_handler),
        )
        .route("/admin/licenses", web::get().to(list_licenses_handler))
        .route("/admin/licenses", web::post().to(create_license_handler))
        .route(
            "/admin/licenses/{id}",
            web::delete().to(delete_license_handler),
        );
}
