use actix_web::web;
use std::sync::Arc;

use crate::{
    handlers::photo_handler::{list_photos_handler, reorder_photos_handler, upload_photo_handler},
    services::photo_service::PhotoService,
};

pub fn configure_photo_routes(
    cfg: &mut web::ServiceConfig,
    photo_service_data: web::Data<Arc<PhotoService>>,
) {
    cfg.app_data(photo_service_data)
        .route("/trips/{id}/photos", web::get().to(list_photos_handler))
        .route("/trips/{id}/photos", web::post().to(upload_photo_handler))
        .route("/photos/reorder", web::put().to(reorder_photos_handler));
}
