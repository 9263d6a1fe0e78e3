use crate::constants::EXPENSES_COL_NAME;
use crate::{config::database::get_collection, models::expense_model::Expense};
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct ExpenseRepository {
    pub collection: Collection<Expense>,
}

impl ExpenseRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*EXPENSES_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create_expense(&self, expense: &Expense) -> Result<Expense> {
        let insert_result = self.collection.insert_one(expense).await?;
        Ok(Expense {
            _id: insert_result.inserted_id.as_object_id(),
            ..expense.clone()
        })
    }

    pub async fn find_by_id(&self, expense_id: ObjectId) -> Result<Option<Expense>> {
        self.collection.find_one(doc! { "_id": expense_id }).await
    }

    pub async fn find_by_trip(&self, trip_id: &str) -> Result<Vec<Expense>> {
        let cursor = self
            .collection
            .find(doc! { "tripId": trip_id })
            .sort(doc! { "createdAt": -1 })
            .await?;
        let expenses: Vec<Expense> = cursor.try_collect().await?;
        Ok(expenses)
    }

    pub async fn delete_by_id(&self, expense_id: ObjectId) -> Result<()> {
        self.collection
            .delete_one(doc! { "_id": expense_id })
            .await?;
        Ok(())
    }
}
