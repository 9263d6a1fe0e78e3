pub mod admin_routes;
pub mod auth_routes;
pub mod expense_routes;
pub mod photo_routes;
pub mod proposal_routes;
pub mod setting_routes;
pub mod trip_routes;
pub mod user_routes;

use actix_web::web;
use std::sync::Arc;

use crate::services::{
    admin_service::AdminService, expense_service::ExpenseService, photo_service::PhotoService,
    proposal_service::ProposalService, setting_service::SettingService, trip_service::TripService,
    user_service::UserService,
};

#[allow(clippy::too_many_arguments)]
pub fn configure_routes(
    cfg: &mut web::ServiceConfig,
    user_service_data: web::Data<Arc<UserService>>,
    admin_service_data: web::Data<Arc<AdminService>>,
    proposal_service_data: web::Data<Arc<ProposalService>>,
    trip_service_data: web::Data<Arc<TripService>>,
    expense_service_data: web::Data<Arc<ExpenseService>>,
    photo_service_data: web::Data<Arc<PhotoService>>,
    setting_service_data: web::Data<Arc<SettingService>>,
) {
    cfg.service(
        web::scope("/api")
            .configure(|api| auth_routes::configure_auth_routes(api, user_service_data.clone()))
            .configure(|api| user_routes::configure_user_routes(api, user_service_data))
            .configure(|api| admin_routes::configure_admin_routes(api, admin_service_data))
            .configure(|api| {
                proposal_routes::configure_proposal_routes(api, proposal_service_data)
            })
            .configure(|api| trip_routes::configure_trip_routes(api, trip_service_data))
            .configure(|api| expense_routes::configure_expense_routes(api, expense_service_data))
            .configure(|api| photo_routes::configure_photo_routes(api, photo_service_data))
            .configure(|api| setting_routes::configure_setting_routes(api, setting_service_data)),
    );
}
