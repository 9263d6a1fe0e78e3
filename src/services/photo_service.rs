use chrono::Utc;
use std::sync::Arc;

use crate::{
    errors::ApiError,
    models::photo_model::Photo,
    repositories::{photo_repository::PhotoRepository, trip_repository::TripRepository},
    types::requests::photo::{ReorderPhotosRequest, UploadPhotoRequest},
    utils::{date_utils::is_expired, parse_object_id},
};

pub struct PhotoService {
    photo_repository: Arc<PhotoRepository>,
    trip_repository: Arc<TripRepository>,
}

impl PhotoService {
    pub fn new(photo_repository: Arc<PhotoRepository>, trip_repository: Arc<TripRepository>) -> Self {
        Self {
            photo_repository,
            trip_repository,
        }
    }

    pub async fn list_photos(&self, trip_id: &str) -> Result<Vec<Photo>, ApiError> {
        Ok(self.photo_repository.find_by_trip(trip_id).await?)
    }

    pub async fn upload_photo(
        &self,
        trip_id: &str,
        data: UploadPhotoRequest,
    ) -> Result<Photo, ApiError> {
        self.ensure_trip_is_mutable(trip_id).await?;

        let photo = Photo {
            _id: None,
            trip_id: trip_id.to_string(),
            uploader: data.uploader,
            image_data: data.image_data,
            day_index: data.day_index,
            order: data.order,
            created_at: Utc::now(),
        };
        Ok(self.photo_repository.create_photo(&photo).await?)
    }

    /// Persists a drag-and-drop reshuffle: every photo gets its new sort
    /// position and day bucket. The parent trip is resolved through the
    /// first photo in the batch.
    pub async fn reorder_photos(&self, data: ReorderPhotosRequest) -> Result<(), ApiError> {
        let Some(first) = data.photo_orders.first() else {
            return Ok(());
        };

        let first_photo = self
            .photo_repository
            .find_by_id(parse_object_id(&first.id)?)
            .await?
            .ok_or_else(|| ApiError::not_found("Photo"))?;

        if let Ok(trip_id) = parse_object_id(&first_photo.trip_id) {
            if let Some(trip) = self.trip_repository.find_by_id(trip_id).await? {
                if is_expired(&trip.end_date) {
                    return Err(ApiError::Forbidden(
                        "This trip has ended and is view-only".to_string(),
                    ));
                }
            }
        }

        for item in &data.photo_orders {
            self.photo_repository
                .set_order(parse_object_id(&item.id)?, item.order, item.day_index)
                .await?;
        }
        Ok(())
    }

    async fn ensure_trip_is_mutable(&self, trip_id: &str) -> Result<(), ApiError> {
        let trip_id = parse_object_id(trip_id)?;
        let trip = self
            .trip_repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Trip"))?;

        if is_expired(&trip.end_date) {
            return Err(ApiError::Forbidden(
                "This trip has ended and is view-only".to_string(),
            ));
        }
        Ok(())
    }
}
