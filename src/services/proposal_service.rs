use std::sync::Arc;

use crate::{
    errors::ApiError,
    models::proposal_model::{Proposal, ProposalStatus},
    repositories::proposal_repository::ProposalRepository,
    types::requests::proposal::{CreateProposalRequest, UpdateProposalRequest},
    utils::parse_object_id,
};

pub struct ProposalService {
    proposal_repository: Arc<ProposalRepository>,
}

impl ProposalService {
    pub fn new(proposal_repository: Arc<ProposalRepository>) -> Self {
        Self {
            proposal_repository,
        }
    }

    pub async fn list_proposals(&self) -> Result<Vec<Proposal>, ApiError> {
        Ok(self.proposal_repository.get_all_proposals().await?)
    }

    pub async fn create_proposal(
        &self,
        data: CreateProposalRequest,
    ) -> Result<Proposal, ApiError> {
        if data.start.is_empty() || data.end.is_empty() {
            return Err(ApiError::BadRequest(
                "Start and end dates are required".to_string(),
            ));
        }

        let proposal = Proposal {
            _id: None,
            creator: data.creator,
            start: data.start,
            end: data.end,
            min: data.min,
            votes: Vec::new(),
            status: ProposalStatus::Voting,
        };
        Ok(self.proposal_repository.create_proposal(&proposal).await?)
    }

    /// Patches the date range or quorum. The status is recomputed afterwards,
    /// so raising `min` above the current vote count demotes a pending
    /// proposal back to voting.
    pub async fn update_proposal(
        &self,
        proposal_id: &str,
        patch: UpdateProposalRequest,
    ) -> Result<Proposal, ApiError> {
        let proposal_id = parse_object_id(proposal_id)?;
        let mut proposal = self
            .proposal_repository
            .find_by_id(proposal_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Proposal"))?;

        if let Some(start) = patch.start {
            proposal.start = start;
        }
        if let Some(end) = patch.end {
            proposal.end = end;
        }
        if let Some(min) = patch.min {
            proposal.min = min;
        }
        proposal.status = quorum_status(proposal.votes.len(), proposal.min);

        self.proposal_repository
            .update_proposal(proposal_id, &proposal)
            .await?;
        Ok(proposal)
    }

    pub async fn delete_proposal(&self, proposal_id: &str) -> Result<(), ApiError> {
        let proposal_id = parse_object_id(proposal_id)?;
        self.proposal_repository.delete_by_id(proposal_id).await?;
        Ok(())
    }

    /// Records one vote per account; crossing the quorum promotes the
    /// proposal to pending.
    pub async fn vote(&self, proposal_id: &str, account: &str) -> Result<ProposalStatus, ApiError> {
        let proposal_id = parse_object_id(proposal_id)?;
        let mut proposal = self
            .proposal_repository
            .find_by_id(proposal_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Proposal"))?;

        let status = apply_vote(&mut proposal, account)?;

        self.proposal_repository
            .update_proposal(proposal_id, &proposal)
            .await?;
        Ok(status)
    }

    /// Quorum-met proposals the given nickname created, surfaced as the
    /// creator's "ready to confirm" notifications.
    pub async fn notifications(&self, nickname: &str) -> Result<Vec<Proposal>, ApiError> {
        Ok(self
            .proposal_repository
            .find_pending_by_creator(nickname)
            .await?)
    }
}

/// Adds one vote, rejecting accounts that already voted, and recomputes
/// the status against the quorum.
fn apply_vote(proposal: &mut Proposal, account: &str) -> Result<ProposalStatus, ApiError> {
    if proposal.votes.iter().any(|voter| voter == account) {
        return Err(ApiError::BadRequest("Already voted".to_string()));
    }

    proposal.votes.push(account.to_string());
    proposal.status = quorum_status(proposal.votes.len(), proposal.min);
    Ok(proposal.status)
}

fn quorum_status(vote_count: usize, min: u32) -> ProposalStatus {
    if vote_count >= min as usize {
        ProposalStatus::Pending
    } else {
        ProposalStatus::Voting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quorum_promotes_at_the_threshold() {
        assert_eq!(quorum_status(2, 3), ProposalStatus::Voting);
        assert_eq!(quorum_status(3, 3), ProposalStatus::Pending);
        assert_eq!(quorum_status(4, 3), ProposalStatus::Pending);
    }

    #[test]
    fn raising_the_quorum_demotes() {
        // A pending proposal whose min is edited from 3 up to 5.
        assert_eq!(quorum_status(3, 5), ProposalStatus::Voting);
    }

    #[test]
    fn zero_quorum_is_immediately_pending() {
        assert_eq!(quorum_status(0, 0), ProposalStatus::Pending);
    }

    fn proposal(votes: &[&str], min: u32) -> Proposal {
        Proposal {
            _id: None,
            creator: "alice".to_string(),
            start: "2026-09-01".to_string(),
            end: "2026-09-03".to_string(),
            min,
            votes: votes.iter().map(|v| v.to_string()).collect(),
            status: ProposalStatus::Voting,
        }
    }

    #[test]
    fn voting_twice_is_rejected() {
        let mut proposal = proposal(&["bob"], 3);

        assert!(apply_vote(&mut proposal, "bob").is_err());
        assert_eq!(proposal.votes, vec!["bob".to_string()]);
    }

    #[test]
    fn the_quorum_crossing_vote_promotes() {
        let mut proposal = proposal(&["bob"], 2);

        let status = apply_vote(&mut proposal, "carol").unwrap();
        assert_eq!(status, ProposalStatus::Pending);
        assert_eq!(proposal.votes.len(), 2);
    }
}
