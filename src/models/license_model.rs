use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registration key with a bounded number of uses.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct License {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    pub key: String,

    pub limit: u32,

    #[serde(default)]
    pub used: u32,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl License {
    pub fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn license(used: u32, limit: u32) -> License {
        License {
            _id: None,
            key: "TRIP-ABCD1234".to_string(),
            limit,
            used,
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn exhausts_exactly_at_the_limit() {
        assert!(!license(4, 5).is_exhausted());
        assert!(license(5, 5).is_exhausted());
        assert!(license(6, 5).is_exhausted());
    }
}
