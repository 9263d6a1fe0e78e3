use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::expense_service::ExpenseService,
    types::{requests::expense::CreateExpenseRequest, responses::api_response::ApiResponse},
};

pub async fn list_expenses_handler(
    expense_service: web::Data<Arc<ExpenseService>>,
    trip_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let expenses = expense_service.list_expenses(&trip_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Expenses fetched", expenses)))
}

pub async fn create_expense_handler(
    expense_service: web::Data<Arc<ExpenseService>>,
    trip_id: web::Path<String>,
    payload: web::Json<CreateExpenseRequest>,
) -> Result<HttpResponse, ApiError> {
    let expense = expense_service
        .create_expense(&trip_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Expense saved", expense)))
}

pub async fn delete_expense_handler(
    expense_service: web::Data<Arc<ExpenseService>>,
    expense_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    expense_service.delete_expense(&expense_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Expense deleted", ())))
}

pub async fn settlement_handler(
    expense_service: web::Data<Arc<ExpenseService>>,
    trip_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let settlement = expense_service.settlement(&trip_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Settlement computed", settlement)))
}
