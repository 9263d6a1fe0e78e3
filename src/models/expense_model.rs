use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One shared expense on a trip. Amounts are kept in the currency they were
/// entered in; settlement sums them without conversion.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    pub trip_id: String,

    /// Account of the person who paid.
    pub payer: String,

    #[serde(default)]
    pub payer_name: String,

    pub amount: f64,

    #[serde(default)]
    pub currency: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub note: String,

    /// Accounts the amount is split across, payer included or not.
    #[serde(default)]
    pub split_with: Vec<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
