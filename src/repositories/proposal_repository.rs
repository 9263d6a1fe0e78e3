use crate::constants::PROPOSALS_COL_NAME;
use crate::{config::database::get_collection, models::proposal_model::Proposal};
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::bson::{doc, to_document};
use mongodb::{Client, Collection, error::Result};

pub struct ProposalRepository {
    pub collection: Collection<Proposal>,
}

impl ProposalRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*PROPOSALS_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create_proposal(&self, proposal: &Proposal) -> Result<Proposal> {
        let insert_result = self.collection.insert_one(proposal).await?;
        Ok(Proposal {
            _id: insert_result.inserted_id.as_object_id(),
            ..proposal.clone()
        })
    }

    pub async fn find_by_id(&self, proposal_id: ObjectId) -> Result<Option<Proposal>> {
        self.collection.find_one(doc! { "_id": proposal_id }).await
    }

    pub async fn get_all_proposals(&self) -> Result<Vec<Proposal>> {
        let cursor = self.collection.find(doc! {}).await?;
        let proposals: Vec<Proposal> = cursor.try_collect().await?;
        Ok(proposals)
    }

    /// Writes back a proposal after a read-modify-write cycle.
    pub async fn update_proposal(&self, proposal_id: ObjectId, proposal: &Proposal) -> Result<()> {
        let mut update_doc = to_document(proposal)?;
        // `$set` on the immutable _id is rejected by the server.
        update_doc.remove("_id");

        self.collection
            .update_one(doc! { "_id": proposal_id }, doc! { "$set": update_doc })
            .await?;
        Ok(())
    }

    pub async fn find_pending_by_creator(&self, creator: &str) -> Result<Vec<Proposal>> {
        let cursor = self
            .collection
            .find(doc! { "creator": creator, "status": "pending" })
            .await?;
        let proposals: Vec<Proposal> = cursor.try_collect().await?;
        Ok(proposals)
    }

    pub async fn delete_by_id(&self, proposal_id: ObjectId) -> Result<()> {
        self.collection
            .delete_one(doc! { "_id": proposal_id })
            .await?;
        Ok(())
    }
}
