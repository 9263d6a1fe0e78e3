pub mod admin_handler;
pub mod auth_handler;
pub mod chat_handler;
pub mod expense_handler;
pub mod photo_handler;
pub mod proposal_handler;
pub mod setting_handler;
pub mod trip_handler;
pub mod user_handler;
