use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateMarqueeRequest {
    pub text: String,
}
