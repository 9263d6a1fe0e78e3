pub mod admin;
pub mod auth;
pub mod expense;
pub mod photo;
pub mod proposal;
pub mod setting;
pub mod trip;
pub mod user;
