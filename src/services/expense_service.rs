use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    errors::ApiError,
    models::expense_model::Expense,
    repositories::{expense_repository::ExpenseRepository, trip_repository::TripRepository},
    types::{
        requests::expense::CreateExpenseRequest,
        responses::settlement::{ParticipantBalance, SettlementResponse, Transfer},
    },
    utils::{date_utils::is_expired, parse_object_id},
};

/// Net amounts below this are treated as settled; it also swallows the
/// cent-level residue of repeated f64 division.
const SETTLED_EPSILON: f64 = 0.01;

pub struct ExpenseService {
    expense_repository: Arc<ExpenseRepository>,
    trip_repository: Arc<TripRepository>,
}

impl ExpenseService {
    pub fn new(
        expense_repository: Arc<ExpenseRepository>,
        trip_repository: Arc<TripRepository>,
    ) -> Self {
        Self {
            expense_repository,
            trip_repository,
        }
    }

    pub async fn list_expenses(&self, trip_id: &str) -> Result<Vec<Expense>, ApiError> {
        Ok(self.expense_repository.find_by_trip(trip_id).await?)
    }

    pub async fn create_expense(
        &self,
        trip_id: &str,
        data: CreateExpenseRequest,
    ) -> Result<Expense, ApiError> {
        self.ensure_trip_is_mutable(trip_id).await?;

        let expense = Expense {
            _id: None,
            trip_id: trip_id.to_string(),
            payer: data.payer,
            payer_name: data.payer_name,
            amount: data.amount,
            currency: data.currency,
            category: data.category,
            note: data.note,
            split_with: data.split_with,
            created_at: Utc::now(),
        };
        Ok(self.expense_repository.create_expense(&expense).await?)
    }

    pub async fn delete_expense(&self, expense_id: &str) -> Result<(), ApiError> {
        let expense_id = parse_object_id(expense_id)?;
        let expense = self
            .expense_repository
            .find_by_id(expense_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Expense"))?;

        // A stranded expense whose trip is gone can still be cleaned up.
        if let Ok(trip_id) = parse_object_id(&expense.trip_id) {
            if let Some(trip) = self.trip_repository.find_by_id(trip_id).await? {
                if is_expired(&trip.end_date) {
                    return Err(ApiError::Forbidden(
                        "This trip has ended and is view-only".to_string(),
                    ));
                }
            }
        }

        self.expense_repository.delete_by_id(expense_id).await?;
        Ok(())
    }

    /// Net position per participant plus a suggested set of repayments.
    /// Amounts are summed across currencies without conversion.
    pub async fn settlement(&self, trip_id: &str) -> Result<SettlementResponse, ApiError> {
        let trip_oid = parse_object_id(trip_id)?;
        let trip = self
            .trip_repository
            .find_by_id(trip_oid)
            .await?
            .ok_or_else(|| ApiError::not_found("Trip"))?;

        let expenses = self.expense_repository.find_by_trip(trip_id).await?;
        let balances = compute_balances(&trip.participants, &expenses);
        let transfers = suggest_transfers(&balances);

        Ok(SettlementResponse {
            balances,
            transfers,
        })
    }

    async fn ensure_trip_is_mutable(&self, trip_id: &str) -> Result<(), ApiError> {
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
        Ok(())
    }
}

/// The payer is credited the full amount, every split member is debited an
/// equal share. Positive net means the group owes that person.
fn compute_balances(participants: &[String], expenses: &[Expense]) -> Vec<ParticipantBalance> {
    let mut balance: HashMap<String, f64> = HashMap::new();
    for account in participants {
        balance.insert(account.clone(), 0.0);
    }

    for expense in expenses {
        if expense.split_with.is_empty() {
            continue;
        }
        *balance.entry(expense.payer.clone()).or_insert(0.0) += expense.amount;

        let share = expense.amount / expense.split_with.len() as f64;
        for account in &expense.split_with {
            *balance.entry(account.clone()).or_insert(0.0) -= share;
        }
    }

    let mut balances: Vec<ParticipantBalance> = balance
        .into_iter()
        .map(|(account, net)| ParticipantBalance {
            account,
            net: round_to_2_decimals(net),
        })
        .collect();
    balances.sort_by(|a, b| a.account.cmp(&b.account));
    balances
}

/// Greedy pairing of the largest debtor with the largest creditor until
/// everyone is within the epsilon of even.
fn suggest_transfers(balances: &[ParticipantBalance]) -> Vec<Transfer> {
    let mut creditors: Vec<(String, f64)> = balances
        .iter()
        .filter(|b| b.net > SETTLED_EPSILON)
        .map(|b| (b.account.clone(), b.net))
        .collect();
    let mut debtors: Vec<(String, f64)> = balances
        .iter()
        .filter(|b| b.net < -SETTLED_EPSILON)
        .map(|b| (b.account.clone(), -b.net))
        .collect();

    creditors.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    debtors.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut transfers = Vec::new();
    while let (Some(creditor), Some(debtor)) = (creditors.last_mut(), debtors.last_mut()) {
        let amount = round_to_2_decimals(creditor.1.min(debtor.1));
        transfers.push(Transfer {
            from: debtor.0.clone(),
            to: creditor.0.clone(),
            amount,
        });

        creditor.1 = round_to_2_decimals(creditor.1 - amount);
        debtor.1 = round_to_2_decimals(debtor.1 - amount);
        if creditor.1 <= SETTLED_EPSILON {
            creditors.pop();
        }
        if debtor.1 <= SETTLED_EPSILON {
            debtors.pop();
        }
    }
    transfers
}

fn round_to_2_decimals(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(payer: &str, amount: f64, split_with: &[&str]) -> Expense {
        Expense {
            _id: None,
            trip_id: "trip".to_string(),
            payer: payer.to_string(),
            payer_name: payer.to_string(),
            amount,
            currency: "TWD".to_string(),
            category: String::new(),
            note: String::new(),
            split_with: split_with.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    fn accounts(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn net_of(balances: &[ParticipantBalance], account: &str) -> f64 {
        balances
            .iter()
            .find(|b| b.account == account)
            .map(|b| b.net)
            .unwrap()
    }

    #[test]
    fn payer_is_credited_and_splitters_debited() {
        let participants = accounts(&["alice", "bob", "carol"]);
        let expenses = vec![expense("alice", 300.0, &["alice", "bob", "carol"])];

        let balances = compute_balances(&participants, &expenses);
        assert_eq!(net_of(&balances, "alice"), 200.0);
        assert_eq!(net_of(&balances, "bob"), -100.0);
        assert_eq!(net_of(&balances, "carol"), -100.0);
    }

    #[test]
    fn nets_sum_to_roughly_zero() {
        let participants = accounts(&["alice", "bob", "carol"]);
        let expenses = vec![
            expense("alice", 100.0, &["bob", "carol"]),
            expense("bob", 90.0, &["alice", "bob", "carol"]),
        ];

        let balances = compute_balances(&participants, &expenses);
        let total: f64 = balances.iter().map(|b| b.net).sum();
        assert!(total.abs() < 0.05);
    }

    #[test]
    fn participants_without_expenses_stay_at_zero() {
        let participants = accounts(&["alice", "bob"]);
        let balances = compute_balances(&participants, &[]);
        assert_eq!(net_of(&balances, "alice"), 0.0);
        assert_eq!(net_of(&balances, "bob"), 0.0);
    }

    #[test]
    fn expense_with_empty_split_is_ignored() {
        let participants = accounts(&["alice"]);
        let expenses = vec![expense("alice", 100.0, &[])];
        let balances = compute_balances(&participants, &expenses);
        assert_eq!(net_of(&balances, "alice"), 0.0);
    }

    #[test]
    fn transfers_settle_every_debt() {
        let participants = accounts(&["alice", "bob", "carol"]);
        let expenses = vec![expense("alice", 300.0, &["alice", "bob", "carol"])];

        let balances = compute_balances(&participants, &expenses);
        let transfers = suggest_transfers(&balances);

        assert_eq!(transfers.len(), 2);
        assert!(transfers.iter().all(|t| t.to == "alice"));
        let repaid: f64 = transfers.iter().map(|t| t.amount).sum();
        assert!((repaid - 200.0).abs() < 0.05);
    }

    #[test]
    fn balanced_group_needs_no_transfers() {
        let participants = accounts(&["alice", "bob"]);
        let expenses = vec![
            expense("alice", 50.0, &["bob"]),
            expense("bob", 50.0, &["alice"]),
        ];

        let balances = compute_balances(&participants, &expenses);
        assert!(suggest_transfers(&balances).is_empty());
    }
}
