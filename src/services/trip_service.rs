use bson::oid::ObjectId;
use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::{
    errors::ApiError,
    models::trip_model::{ChatMessage, Trip, TripDay},
    repositories::{proposal_repository::ProposalRepository, trip_repository::TripRepository},
    types::requests::trip::{
        AddLocationRequest, ConfirmAction, ConfirmTripRequest, NewChatMessage,
        RemoveLocationRequest, UpdateDatesRequest,
    },
    utils::{
        date_utils::{inclusive_day_count, is_expired, today_string},
        parse_object_id,
    },
};

pub struct TripService {
    trip_repository: Arc<TripRepository>,
    proposal_repository: Arc<ProposalRepository>,
}

impl TripService {
    pub fn new(
        trip_repository: Arc<TripRepository>,
        proposal_repository: Arc<ProposalRepository>,
    ) -> Self {
        Self {
            trip_repository,
            proposal_repository,
        }
    }

    /// Resolves a quorum-met proposal: on confirm it becomes a trip whose
    /// participants are the voters and whose itinerary has one empty day per
    /// date in the range. The proposal is deleted either way.
    pub async fn confirm_proposal(&self, data: ConfirmTripRequest) -> Result<(), ApiError> {
        let proposal_id = parse_object_id(&data.proposal_id)?;
        let proposal = self
            .proposal_repository
            .find_by_id(proposal_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Proposal"))?;

        if data.action == ConfirmAction::Confirm {
            let today = today_string();
            if self
                .trip_repository
                .find_active_by_title(&data.title, &today)
                .await?
                .is_some()
            {
                return Err(ApiError::BadRequest(format!(
                    "The title '{}' is already in use, please pick another one",
                    data.title
                )));
            }

            let day_count = inclusive_day_count(&proposal.start, &proposal.end)
                .ok_or_else(|| ApiError::BadRequest("Proposal has invalid dates".to_string()))?;

            let trip = Trip {
                _id: None,
                title: data.title,
                start_date: proposal.start.clone(),
                end_date: proposal.end.clone(),
                participants: proposal.votes.clone(),
                creator: proposal.creator.clone(),
                days: build_days(day_count),
                chat_messages: Vec::new(),
            };
            let trip = self.trip_repository.create_trip(&trip).await?;
            info!(
                "Promoted proposal by '{}' into trip '{}' ({} days)",
                trip.creator,
                trip.title,
                trip.days.len()
            );
        }

        self.proposal_repository.delete_by_id(proposal_id).await?;
        Ok(())
    }

    pub async fn trips_for(&self, account: &str) -> Result<Vec<Trip>, ApiError> {
        Ok(self.trip_repository.find_by_participant(account).await?)
    }

    pub async fn get_trip(&self, trip_id: &str) -> Result<Trip, ApiError> {
        let trip_id = parse_object_id(trip_id)?;
        self.trip_repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Trip"))
    }

    pub async fn add_location(
        &self,
        trip_id: &str,
        data: AddLocationRequest,
    ) -> Result<Trip, ApiError> {
        let (trip_id, mut trip) = self.load_mutable_trip(trip_id).await?;

        let day = trip
            .days
            .get_mut(data.day_index)
            .ok_or_else(|| ApiError::BadRequest("Day index out of range".to_string()))?;
        day.locations.push(data.location);

        self.trip_repository.update_trip(trip_id, &trip).await?;
        Ok(trip)
    }

    pub async fn remove_location(
        &self,
        trip_id: &str,
        data: RemoveLocationRequest,
    ) -> Result<Trip, ApiError> {
        let (trip_id, mut trip) = self.load_mutable_trip(trip_id).await?;

        let day = trip
            .days
            .get_mut(data.day_index)
            .ok_or_else(|| ApiError::BadRequest("Day index out of range".to_string()))?;
        if data.location_index >= day.locations.len() {
            return Err(ApiError::BadRequest(
                "Location index out of range".to_string(),
            ));
        }
        day.locations.remove(data.location_index);

        self.trip_repository.update_trip(trip_id, &trip).await?;
        Ok(trip)
    }

    /// Moves the trip to a new date range and resizes the itinerary to match:
    /// new days are appended empty, surplus days are truncated and their
    /// locations are lost.
    pub async fn update_dates(
        &self,
        trip_id: &str,
        data: UpdateDatesRequest,
    ) -> Result<Trip, ApiError> {
        if data.start_date.is_empty() || data.end_date.is_empty() {
            return Err(ApiError::BadRequest(
                "Both start and end dates are required".to_string(),
            ));
        }

        let (trip_id, mut trip) = self.load_mutable_trip(trip_id).await?;

        let new_day_count = inclusive_day_count(&data.start_date, &data.end_date)
            .ok_or_else(|| ApiError::BadRequest("Invalid date format".to_string()))?;

        trip.start_date = data.start_date;
        trip.end_date = data.end_date;
        resize_days(&mut trip.days, new_day_count);

        self.trip_repository.update_trip(trip_id, &trip).await?;
        info!("Trip '{}' resized to {} days", trip.title, trip.days.len());
        Ok(trip)
    }

    pub async fn delete_trip(&self, trip_id: &str) -> Result<(), ApiError> {
        let (trip_id, _trip) = self.load_mutable_trip(trip_id).await?;
        self.trip_repository.delete_by_id(trip_id).await?;
        Ok(())
    }

    pub async fn chat_messages(&self, trip_id: &str) -> Result<Vec<ChatMessage>, ApiError> {
        let trip = self.get_trip(trip_id).await?;
        Ok(trip.chat_messages)
    }

    pub async fn post_chat_message(
        &self,
        trip_id: &str,
        data: NewChatMessage,
    ) -> Result<ChatMessage, ApiError> {
        let (trip_id, _trip) = self.load_mutable_trip(trip_id).await?;

        let message = ChatMessage {
            sender: data.sender,
            text: data.text,
            avatar: data.avatar,
            time: Utc::now(),
        };
        self.trip_repository
            .push_chat_message(trip_id, &message)
            .await?;
        Ok(message)
    }

    /// Loads a trip and refuses the call once the trip has ended; ended
    /// trips stay readable but are frozen against edits.
    async fn load_mutable_trip(&self, trip_id: &str) -> Result<(ObjectId, Trip), ApiError> {
        let trip_id = parse_object_id(trip_id)?;
        let trip = self
            .trip_repository
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Trip"))?;

        if is_expired(&trip.end_date) {
            return Err(ApiError::Forbidden(
                "This trip has ended and is view-only".to_string(),
            ));
        }
        Ok((trip_id, trip))
    }
}

fn build_days(count: usize) -> Vec<TripDay> {
    (1..=count as u32).map(TripDay::empty).collect()
}

/// Grows with empty numbered days or truncates, keeping the first N days.
fn resize_days(days: &mut Vec<TripDay>, new_count: usize) {
    if new_count > days.len() {
        for day_number in days.len() as u32 + 1..=new_count as u32 {
            days.push(TripDay::empty(day_number));
        }
    } else {
        days.truncate(new_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip_model::Location;

    fn day_with_location(day_number: u32, name: &str) -> TripDay {
        TripDay {
            day_number,
            locations: vec![Location {
                name: name.to_string(),
                ..Default::default()
            }],
        }
    }

    #[test]
    fn built_days_are_numbered_from_one() {
        let days = build_days(3);
        let numbers: Vec<u32> = days.iter().map(|d| d.day_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(days.iter().all(|d| d.locations.is_empty()));
    }

    #[test]
    fn growing_appends_empty_days_and_keeps_existing_ones() {
        let mut days = vec![day_with_location(1, "harbor")];
        resize_days(&mut days, 3);

        assert_eq!(days.len(), 3);
        assert_eq!(days[0].locations[0].name, "harbor");
        assert_eq!(days[2].day_number, 3);
        assert!(days[2].locations.is_empty());
    }

    #[test]
    fn shrinking_keeps_the_leading_days() {
        let mut days = vec![
            day_with_location(1, "harbor"),
            day_with_location(2, "market"),
            day_with_location(3, "museum"),
        ];
        resize_days(&mut days, 1);

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].locations[0].name, "harbor");
    }

    #[test]
    fn same_size_is_a_no_op() {
        let mut days = vec![day_with_location(1, "harbor"), day_with_location(2, "market")];
        resize_days(&mut days, 2);

        assert_eq!(days.len(), 2);
        assert_eq!(days[1].locations[0].name, "market");
    }
}
