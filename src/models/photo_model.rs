use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An album photo, stored inline as a base64 data URL and ordered within
/// the day it is filed under.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    pub trip_id: String,

    pub uploader: String,

    pub image_data: String,

    #[serde(default)]
    pub day_index: u32,

    #[serde(default)]
    pub order: u32,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
