use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod repositories;
mod routes;
mod services;
mod types;
mod utils;
mod validations;

use crate::{
    config::{
        cors::configure_cors,
        database::{connect_to_database, create_unique_indexes},
    },
    repositories::{
        expense_repository::ExpenseRepository, license_repository::LicenseRepository,
        photo_repository::PhotoRepository, proposal_repository::ProposalRepository,
        setting_repository::SettingRepository, trip_repository::TripRepository,
        user_repository::UserRepository,
    },
    services::{
        admin_service::AdminService, expense_service::ExpenseService,
        photo_service::PhotoService, proposal_service::ProposalService,
        setting_service::SettingService, trip_service::TripService, user_service::UserService,
    },
};

// Avatars and album photos arrive as base64 data URLs, so the JSON limit
// has to be far above the actix default.
const JSON_PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let client = connect_to_database()
        .await
        .context("Failed to connect to MongoDB")?;
    create_unique_indexes(&client)
        .await
        .context("Failed to create unique indexes")?;

    let user_repository = Arc::new(UserRepository::new(&client).await?);
    let license_repository = Arc::new(LicenseRepository::new(&client).await?);
    let proposal_repository = Arc::new(ProposalRepository::new(&client).await?);
    let trip_repository = Arc::new(TripRepository::new(&client).await?);
    let expense_repository = Arc::new(ExpenseRepository::new(&client).await?);
    let photo_repository = Arc::new(PhotoRepository::new(&client).await?);
    let setting_repository = Arc::new(SettingRepository::new(&client).await?);

    let user_service = web::Data::new(Arc::new(UserService::new(
        user_repository.clone(),
        license_repository.clone(),
    )));
    let admin_service = web::Data::new(Arc::new(AdminService::new(
        user_repository,
        license_repository,
    )));
    let proposal_service = web::Data::new(Arc::new(ProposalService::new(
        proposal_repository.clone(),
    )));
    let trip_service = web::Data::new(Arc::new(TripService::new(
        trip_repository.clone(),
        proposal_repository,
    )));
    let expense_service = web::Data::new(Arc::new(ExpenseService::new(
        expense_repository,
        trip_repository.clone(),
    )));
    let photo_service = web::Data::new(Arc::new(PhotoService::new(
        photo_repository,
        trip_repository,
    )));
    let setting_service = web::Data::new(Arc::new(SettingService::new(setting_repository)));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000);

    info!("Tripmate server listening on port {}", port);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .app_data(web::JsonConfig::default().limit(JSON_PAYLOAD_LIMIT))
            .configure(|cfg| {
                routes::configure_routes(
                    cfg,
                    user_service.clone(),
                    admin_service.clone(),
                    proposal_service.clone(),
                    trip_service.clone(),
                    expense_service.clone(),
                    photo_service.clone(),
                    setting_service.clone(),
                )
            })
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
    .context("Server terminated unexpectedly")
}
