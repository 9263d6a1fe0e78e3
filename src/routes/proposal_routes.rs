use actix_web::web;
use std::sync::Arc;

use crate::{
    handlers::proposal_handler::{
        create_proposal_handler, delete_proposal_handler, list_proposals_handler,
        notifications_handler, update_proposal_handler, vote_handler,
    },
    services::proposal_service::ProposalService,
};

pub fn configure_proposal_routes(
    cfg: &mut web::ServiceConfig,
    proposal_service_data: web::Data<Arc<ProposalService>>,
) {
    cfg.app_data(proposal_service_data)
        .route("/proposals", web::get().to(list_proposals_handler))
        .route("/proposals", web::post().to(create_proposal_handler))
        .route("/proposals/vote", web::post().to(vote_handler))
        .route("/proposals/{id}", web::put().to(update_proposal_handler))
        .route("/proposals/{id}", web::delete().to(delete_proposal_handler))
        .route(
            "/notifications/{nickname}",
            web::get().to(notifications_handler),
        );
}
