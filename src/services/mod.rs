pub mod admin_service;
pub mod expense_service;
pub mod photo_service;
pub mod proposal_service;
pub mod setting_service;
pub mod trip_service;
pub mod user_service;
