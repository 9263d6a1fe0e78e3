use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    /// Still collecting votes.
    #[default]
    Voting,
    /// Quorum reached, waiting for the creator to confirm or cancel.
    Pending,
}

/// A trip pitch awaiting enough votes. Deleted once confirmed or cancelled.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Proposal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Nickname of the proposer; notifications are looked up by it.
    pub creator: String,

    pub start: String,

    pub end: String,

    /// Minimum vote count to promote the proposal.
    pub min: u32,

    #[serde(default)]
    pub votes: Vec<String>,

    #[serde(default)]
    pub status: ProposalStatus,
}
