use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::{
    errors::ApiError,
    services::setting_service::SettingService,
    types::{
        requests::setting::UpdateMarqueeRequest,
        responses::{api_response::ApiResponse, setting::MarqueeResponse},
    },
};

pub async fn get_marquee_handler(
    setting_service: web::Data<Arc<SettingService>>,
) -> Result<HttpResponse, ApiError> {
    let text = setting_service.marquee_text().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Marquee fetched",
        MarqueeResponse { text },
    )))
}

pub async fn update_marquee_handler(
    setting_service: web::Data<Arc<SettingService>>,
    payload: web::Json<UpdateMarqueeRequest>,
) -> Result<HttpResponse, ApiError> {
    setting_service.set_marquee_text(&payload.text).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Marquee updated", ())))
}
