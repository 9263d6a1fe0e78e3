use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::trip_service::TripService,
    types::{
        requests::trip::{
            AddLocationRequest, ConfirmTripRequest, RemoveLocationRequest, UpdateDatesRequest,
        },
        responses::api_response::ApiResponse,
    },
};

pub async fn confirm_proposal_handler(
    trip_service: web::Data<Arc<TripService>>,
    payload: web::Json<ConfirmTripRequest>,
) -> Result<HttpResponse, ApiError> {
    trip_service.confirm_proposal(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Proposal resolved", ())))
}

pub async fn my_trips_handler(
    trip_service: web::Data<Arc<TripService>>,
    account: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let trips = trip_service.trips_for(&account).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Trips fetched", trips)))
}

pub async fn get_trip_handler(
    trip_service: web::Data<Arc<TripService>>,
    trip_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let trip = trip_service.get_trip(&trip_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Trip fetched", trip)))
}

pub async fn add_location_handler(
    trip_service: web::Data<Arc<TripService>>,
    trip_id: web::Path<String>,
    payload: web::Json<AddLocationRequest>,
) -> Result<HttpResponse, ApiError> {
    let trip = trip_service
        .add_location(&trip_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Location added", trip)))
}

pub async fn remove_location_handler(
    trip_service: web::Data<Arc<TripService>>,
    trip_id: web::Path<String>,
    payload: web::Json<RemoveLocationRequest>,
) -> Result<HttpResponse, ApiError> {
    let trip = trip_service
        .remove_location(&trip_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Location removed", trip)))
}

pub async fn update_dates_handler(
    trip_service: web::Data<Arc<TripService>>,
    trip_id: web::Path<String>,
    payload: web::Json<UpdateDatesRequest>,
) -> Result<HttpResponse, ApiError> {
    let trip = trip_service
        .update_dates(&trip_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Dates updated", trip)))
}

pub async fn delete_trip_handler(
    trip_service: web::Data<Arc<TripService>>,
    trip_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    trip_service.delete_trip(&trip_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Trip deleted", ())))
}
