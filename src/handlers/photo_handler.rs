use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::photo_service::PhotoService,
    types::{
        requests::photo::{ReorderPhotosRequest, UploadPhotoRequest},
        responses::api_response::ApiResponse,
    },
};

pub async fn list_photos_handler(
    photo_service: web::Data<Arc<PhotoService>>,
    trip_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let photos = photo_service.list_photos(&trip_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Photos fetched", photos)))
}

pub async fn upload_photo_handler(
    photo_service: web::Data<Arc<PhotoService>>,
    trip_id: web::Path<String>,
    payload: web::Json<UploadPhotoRequest>,
) -> Result<HttpResponse, ApiError> {
    let photo = photo_service
        .upload_photo(&trip_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Photo saved", photo)))
}

pub async fn reorder_photos_handler(
    photo_service: web::Data<Arc<PhotoService>>,
    payload: web::Json<ReorderPhotosRequest>,
) -> Result<HttpResponse, ApiError> {
    photo_service.reorder_photos(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Order and day buckets updated", ())))
}
