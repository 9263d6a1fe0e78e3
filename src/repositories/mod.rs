pub mod expense_repository;
pub mod license_repository;
pub mod photo_repository;
pub mod proposal_repository;
pub mod setting_repository;
pub mod trip_repository;
pub mod user_repository;
