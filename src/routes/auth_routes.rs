use actix_web::web;
use std::sync::Arc;

use crate::{
    handlers::auth_handler::{login_handler, register_user_handler},
    services::user_service::UserService,
};

pub fn configure_auth_routes(
    cfg: &mut web::ServiceConfig,
    user_service_data: web::Data<Arc<UserService>>,
) {
    cfg.app_data(user_service_data)
        .route("/register", web::post().to(register_user_handler))
        .route("/login", web::post().to(login_handler));
}
