use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProposalRequest {
    pub creator: String,

    #[serde(default)]
    pub start: String,

    #[serde(default)]
    pub end: String,

    pub min: u32,
}

/// Partial edit; absent fields keep their current value. The status is
/// recomputed against the quorum after the patch is applied.
#[derive(Debug, Deserialize)]
pub struct UpdateProposalRequest {
    pub start: Option<String>,

    pub end: Option<String>,

    pub min: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub proposal_id: String,

    pub account: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_request_reads_camel_case_keys() {
        let body = r#"{"proposalId": "abc123", "account": "alice"}"#;
        let request: VoteRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.proposal_id, "abc123");
        assert_eq!(request.account, "alice");
    }

    #[test]
    fn update_request_tolerates_a_partial_body() {
        let body = r#"{"min": 4}"#;
        let patch: UpdateProposalRequest = serde_json::from_str(body).unwrap();

        assert_eq!(patch.min, Some(4));
        assert!(patch.start.is_none());
        assert!(patch.end.is_none());
    }
}
