use actix_web::web;
use std::sync::Arc;

use crate::{
    handlers::setting_handler::{get_marquee_handler, update_marquee_handler},
    services::setting_service::SettingService,
};

pub fn configure_setting_routes(
    cfg: &mut web::ServiceConfig,
    setting_service_data: web::Data<Arc<SettingService>>,
) {
    cfg.app_data(setting_service_data)
        .route("/settings/marquee", web::get().to(get_marquee_handler))
        .route("/settings/marquee", web::put().to(update_marquee_handler));
}
