use crate::constants::LICENSES_COL_NAME;
use crate::{config::database::get_collection, models::license_model::License};
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct LicenseRepository {
    pub collection: Collection<License>,
}

impl LicenseRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*LICENSES_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create_license(&self, license: &License) -> Result<License> {
        let insert_result = self.collection.insert_one(license).await?;
        Ok(License {
            _id: insert_result.inserted_id.as_object_id(),
            ..license.clone()
        })
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<License>> {
        self.collection.find_one(doc! { "key": key }).await
    }

    pub async fn get_all_licenses(&self) -> Result<Vec<License>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?;
        let licenses: Vec<License> = cursor.try_collect().await?;
        Ok(licenses)
    }

    pub async fn increment_used(&self, license_id: ObjectId) -> Result<()> {
        self.collection
            .update_one(doc! { "_id": license_id }, doc! { "$inc": { "used": 1 } })
            .await?;
        Ok(())
    }

    /// Returns whether a license was actually removed.
    pub async fn delete_by_id(&self, license_id: ObjectId) -> Result<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": license_id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}
