use crate::constants::SETTINGS_COL_NAME;
use crate::{config::database::get_collection, models::setting_model::Setting};
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct SettingRepository {
    pub collection: Collection<Setting>,
}

impl SettingRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*SETTINGS_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<Setting>> {
        self.collection.find_one(doc! { "key": key }).await
    }

    pub async fn upsert(&self, key: &str, value: &str) -> Result<()> {
        self.collection
            .update_one(doc! { "key": key }, doc! { "$set": { "value": value } })
            .upsert(true)
            .await?;
        Ok(())
    }
}
