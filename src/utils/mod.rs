pub mod date_utils;

use bson::oid::ObjectId;

use crate::errors::ApiError;

pub fn parse_object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::InvalidId(id.to_string()))
}
