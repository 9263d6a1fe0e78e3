use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPhotoRequest {
    pub uploader: String,

    pub image_data: String,

    #[serde(default)]
    pub day_index: u32,

    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoOrder {
    pub id: String,

    pub order: u32,

    pub day_index: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderPhotosRequest {
    #[serde(default)]
    pub photo_orders: Vec<PhotoOrder>,
}
