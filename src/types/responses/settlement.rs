use serde::Serialize;

/// Net position of one participant: positive means the group owes them,
/// negative means they owe the group.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ParticipantBalance {
    pub account: String,
    pub net: f64,
}

/// A suggested repayment between two participants.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct SettlementResponse {
    pub balances: Vec<ParticipantBalance>,
    pub transfers: Vec<Transfer>,
}
