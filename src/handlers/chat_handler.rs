use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::trip_service::TripService,
    types::{requests::trip::NewChatMessage, responses::api_response::ApiResponse},
};

/// Chat is poll-based: the client refetches this list every few seconds.
pub async fn get_chat_handler(
    trip_service: web::Data<Arc<TripService>>,
    trip_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let messages = trip_service.chat_messages(&trip_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Messages fetched", messages)))
}

pub async fn post_chat_handler(
    trip_service: web::Data<Arc<TripService>>,
    trip_id: web::Path<String>,
    payload: web::Json<NewChatMessage>,
) -> Result<HttpResponse, ApiError> {
    let message = trip_service
        .post_chat_message(&trip_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Message sent", message)))
}
