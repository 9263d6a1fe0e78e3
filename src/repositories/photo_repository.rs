use crate::constants::PHOTOS_COL_NAME;
use crate::{config::database::get_collection, models::photo_model::Photo};
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct PhotoRepository {
    pub collection: Collection<Photo>,
}

impl PhotoRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*PHOTOS_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create_photo(&self, photo: &Photo) -> Result<Photo> {
        let insert_result = self.collection.insert_one(photo).await?;
        Ok(Photo {
            _id: insert_result.inserted_id.as_object_id(),
            ..photo.clone()
        })
    }

    pub async fn find_by_id(&self, photo_id: ObjectId) -> Result<Option<Photo>> {
        self.collection.find_one(doc! { "_id": photo_id }).await
    }

    /// Album order: grouped by day, then by the manual sort position.
    pub async fn find_by_trip(&self, trip_id: &str) -> Result<Vec<Photo>> {
        let cursor = self
            .collection
            .find(doc! { "tripId": trip_id })
            .sort(doc! { "dayIndex": 1, "order": 1 })
            .await?;
        let photos: Vec<Photo> = cursor.try_collect().await?;
        Ok(photos)
    }

    pub async fn set_order(&self, photo_id: ObjectId, order: u32, day_index: u32) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": photo_id },
                doc! { "$set": { "order": order, "dayIndex": day_index } },
            )
            .await?;
        Ok(())
    }
}
