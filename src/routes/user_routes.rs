use actix_web::web;
use std::sync::Arc;

use crate::{
    handlers::user_handler::{public_profiles_handler, update_profile_handler},
    services::user_service::UserService,
};

pub fn configure_user_routes(
    cfg: &mut web::ServiceConfig,
    user_service_data: web::Data<Arc<UserService>>,
) {
    cfg.app_data(user_service_data)
        .route("/users/update", web::put().to(update_profile_handler))
        .route(
            "/users/by-accounts",
            web::get().to(public_profiles_handler),
        );
}
