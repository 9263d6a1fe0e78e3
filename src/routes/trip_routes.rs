use actix_web::web;
use std::sync::Arc;

use crate::{
    handlers::{
        chat_handler::{get_chat_handler, post_chat_handler},
        trip_handler::{
            add_location_handler, confirm_proposal_handler, delete_trip_handler, get_trip_handler,
            my_trips_handler, remove_location_handler, update_dates_handler,
        },
    },
    services::trip_service::TripService,
};

pub fn configure_trip_routes(
    cfg: &mut web::ServiceConfig,
    trip_service_data: web::Data<Arc<TripService>>,
) {
    cfg.app_data(trip_service_data)
        .route("/trips/confirm", web::post().to(confirm_proposal_handler))
        .route("/my-trips/{account}", web::get().to(my_trips_handler))
        .route("/trips/{id}", web::get().to(get_trip_handler))
        .route("/trips/{id}", web::delete().to(delete_trip_handler))
        .route("/trips/{id}/location", web::post().to(add_location_handler))
        .route(
            "/trips/{id}/location/delete",
            web::post().to(remove_location_handler),
        )
        .route("/trips/{id}/dates", web::put().to(update_dates_handler))
        .route("/trips/{id}/chat", web::get().to(get_chat_handler))
        .route("/trips/{id}/chat", web::post().to(post_chat_handler));
}
