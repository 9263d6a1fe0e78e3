pub mod api_response;
pub mod setting;
pub mod settlement;
pub mod user;
