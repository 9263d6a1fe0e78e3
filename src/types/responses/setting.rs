use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MarqueeResponse {
    pub text: String,
}
