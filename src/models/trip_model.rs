use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Location {
    pub name: String,

    #[serde(default)]
    pub addr: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    #[serde(default)]
    pub note: String,

    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TripDay {
    pub day_number: u32,

    #[serde(default)]
    pub locations: Vec<Location>,
}

impl TripDay {
    pub fn empty(day_number: u32) -> Self {
        Self {
            day_number,
            locations: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub sender: String,

    pub text: String,

    #[serde(default)]
    pub avatar: String,

    #[serde(default = "Utc::now")]
    pub time: DateTime<Utc>,
}

/// A confirmed, scheduled group trip. `days` always has one entry per day of
/// the inclusive date range; chat lives embedded in the document and is read
/// by client polling.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    pub title: String,

    pub start_date: String,

    pub end_date: String,

    #[serde(default)]
    pub participants: Vec<String>,

    pub creator: String,

    #[serde(default)]
    pub days: Vec<TripDay>,

    #[serde(default)]
    pub chat_messages: Vec<ChatMessage>,
}
