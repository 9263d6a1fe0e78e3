use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
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

    pub split_with: Vec<String>,
}
