use crate::constants::TRIPS_COL_NAME;
use crate::{
    config::database::get_collection,
    models::trip_model::{ChatMessage, Trip},
};
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, to_bson, to_document};
use mongodb::{Client, Collection, error::Result};

pub struct TripRepository {
    pub collection: Collection<Trip>,
}

impl TripRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*TRIPS_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create_trip(&self, trip: &Trip) -> Result<Trip> {
        let insert_result = self.collection.insert_one(trip).await?;
        Ok(Trip {
            _id: insert_result.inserted_id.as_object_id(),
            ..trip.clone()
        })
    }

    pub async fn find_by_id(&self, trip_id: ObjectId) -> Result<Option<Trip>> {
        self.collection.find_one(doc! { "_id": trip_id }).await
    }

    pub async fn find_by_participant(&self, account: &str) -> Result<Vec<Trip>> {
        let cursor = self
            .collection
            .find(doc! { "participants": account })
            .await?;
        let trips: Vec<Trip> = cursor.try_collect().await?;
        Ok(trips)
    }

    /// Looks for a non-expired trip already using this title.
    pub async fn find_active_by_title(&self, title: &str, today: &str) -> Result<Option<Trip>> {
        self.collection
            .find_one(doc! { "title": title, "endDate": { "$gte": today } })
            .await
    }

    /// Writes back a trip after a read-modify-write cycle.
    pub async fn update_trip(&self, trip_id: ObjectId, trip: &Trip) -> Result<()> {
        let mut update_doc = to_document(trip)?;
        // `$set` on the immutable _id is rejected by the server.
        update_doc.remove("_id");

        self.collection
            .update_one(doc! { "_id": trip_id }, doc! { "$set": update_doc })
            .await?;
        Ok(())
    }

    pub async fn push_chat_message(
        &self,
        trip_id: ObjectId,
        message: &ChatMessage,
    ) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": trip_id },
                doc! { "$push": { "chatMessages": to_bson(message)? } },
            )
            .await?;
        Ok(())
    }

    pub async fn delete_by_id(&self, trip_id: ObjectId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": trip_id }).await?;
        Ok(())
    }
}
