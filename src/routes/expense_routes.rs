use actix_web::web;
use std::sync::Arc;

use crate::{
    handlers::expense_handler::{
        create_expense_handler, delete_expense_handler, list_expenses_handler, settlement_handler,
    },
    services::expense_service::ExpenseService,
};

pub fn configure_expense_routes(
    cfg: &mut web::ServiceConfig,
    expense_service_data: web::Data<Arc<ExpenseService>>,
) {
    cfg.app_data(expense_service_data)
        .route(
            "/trips/{id}/expenses",
            web::get().to(list_expenses_handler),
        )
        .route(
            "/trips/{id}/expenses",
            web::post().to(create_expense_handler),
        )
        .route(
            "/trips/{id}/expenses/settlement",
            web::get().to(settlement_handler),
        )
        .route("/expenses/{id}", web::delete().to(delete_expense_handler));
}
