use serde::Deserialize;

use crate::models::trip_model::Location;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmAction {
    Confirm,
    Cancel,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmTripRequest {
    pub proposal_id: String,

    pub action: ConfirmAction,

    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLocationRequest {
    pub day_index: usize,

    pub location: Location,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveLocationRequest {
    pub day_index: usize,

    pub location_index: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDatesRequest {
    #[serde(default)]
    pub start_date: String,

    #[serde(default)]
    pub end_date: String,
}

#[derive(Debug, Deserialize)]
pub struct NewChatMessage {
    pub sender: String,

    pub text: String,

    #[serde(default)]
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_request_reads_camel_case_keys() {
        let body = r#"{"proposalId": "abc123", "action": "confirm", "title": "Kyoto"}"#;
        let request: ConfirmTripRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.proposal_id, "abc123");
        assert_eq!(request.action, ConfirmAction::Confirm);
        assert_eq!(request.title, "Kyoto");
    }

    #[test]
    fn cancel_needs_no_title() {
        let body = r#"{"proposalId": "abc123", "action": "cancel"}"#;
        let request: ConfirmTripRequest = serde_json::from_str(body).unwrap();

        assert_eq!(request.action, ConfirmAction::Cancel);
        assert_eq!(request.title, "");
    }
}
