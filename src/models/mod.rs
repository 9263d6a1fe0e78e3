pub mod expense_model;
pub mod license_model;
pub mod photo_model;
pub mod proposal_model;
pub mod setting_model;
pub mod trip_model;
pub mod user_model;
