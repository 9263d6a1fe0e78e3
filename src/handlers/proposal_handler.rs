use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    errors::ApiError,
    models::proposal_model::ProposalStatus,
    services::proposal_service::ProposalService,
    types::{
        requests::proposal::{CreateProposalRequest, UpdateProposalRequest, VoteRequest},
        responses::api_response::ApiResponse,
    },
};

#[derive(Serialize)]
struct VoteOutcome {
    status: ProposalStatus,
}

pub async fn list_proposals_handler(
    proposal_service: web::Data<Arc<ProposalService>>,
) -> Result<HttpResponse, ApiError> {
    let proposals = proposal_service.list_proposals().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Proposals fetched", proposals)))
}

pub async fn create_proposal_handler(
    proposal_service: web::Data<Arc<ProposalService>>,
    payload: web::Json<CreateProposalRequest>,
) -> Result<HttpResponse, ApiError> {
    let proposal = proposal_service
        .create_proposal(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::success("Proposal created", proposal)))
}

pub async fn update_proposal_handler(
    proposal_service: web::Data<Arc<ProposalService>>,
    proposal_id: web::Path<String>,
    payload: web::Json<UpdateProposalRequest>,
) -> Result<HttpResponse, ApiError> {
    let proposal = proposal_service
        .update_proposal(&proposal_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Proposal updated", proposal)))
}

pub async fn delete_proposal_handler(
    proposal_service: web::Data<Arc<ProposalService>>,
    proposal_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    proposal_service.delete_proposal(&proposal_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Proposal deleted", ())))
}

pub async fn vote_handler(
    proposal_service: web::Data<Arc<ProposalService>>,
    payload: web::Json<VoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let data = payload.into_inner();
    let status = proposal_service
        .vote(&data.proposal_id, &data.account)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Vote recorded", VoteOutcome { status })))
}

pub async fn notifications_handler(
    proposal_service: web::Data<Arc<ProposalService>>,
    nickname: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let proposals = proposal_service.notifications(&nickname).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Notifications fetched", proposals)))
}
