use crate::constants::USERS_COL_NAME;
use crate::{config::database::get_collection, models::user_model::User};
use bson::oid::ObjectId;
use futures_util::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection, error::Result};

pub struct UserRepository {
    pub collection: Collection<User>,
}

impl UserRepository {
    pub async fn new(client: &Client) -> Result<Self> {
        let collection = get_collection(client, (*USERS_COL_NAME).as_str()).await?;
        Ok(Self { collection })
    }

    pub async fn create_user(&self, user: &User) -> Result<User> {
        let insert_result = self.collection.insert_one(user).await?;
        Ok(User {
            _id: insert_result.inserted_id.as_object_id(),
            ..user.clone()
        })
    }

    pub async fn find_by_account(&self, account: &str) -> Result<Option<User>> {
        self.collection.find_one(doc! { "account": account }).await
    }

    pub async fn find_by_credentials(
        &self,
        account: &str,
        password: &str,
    ) -> Result<Option<User>> {
        self.collection
            .find_one(doc! { "account": account, "password": password })
            .await
    }

    pub async fn find_by_id(&self, user_id: ObjectId) -> Result<Option<User>> {
        self.collection.find_one(doc! { "_id": user_id }).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    pub async fn find_by_accounts(&self, accounts: &[String]) -> Result<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! { "account": { "$in": accounts } })
            .await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    pub async fn update_profile(
        &self,
        user_id: ObjectId,
        nickname: &str,
        gender: &str,
        avatar: &str,
        password: Option<&str>,
    ) -> Result<Option<User>> {
        let mut update = doc! { "nickname": nickname, "gender": gender, "avatar": avatar };
        if let Some(password) = password {
            update.insert("password", password);
        }

        self.collection
            .find_one_and_update(doc! { "_id": user_id }, doc! { "$set": update })
            .return_document(mongodb::options::ReturnDocument::After)
            .await
    }

    pub async fn set_role(&self, user_id: ObjectId, role: &str) -> Result<Option<User>> {
        self.collection
            .find_one_and_update(doc! { "_id": user_id }, doc! { "$set": { "role": role } })
            .return_document(mongodb::options::ReturnDocument::After)
            .await
    }

    pub async fn set_password(&self, user_id: ObjectId, password: &str) -> Result<()> {
        self.collection
            .update_one(
                doc! { "_id": user_id },
                doc! { "$set": { "password": password } },
            )
            .await?;
        Ok(())
    }

    pub async fn delete_by_id(&self, user_id: ObjectId) -> Result<()> {
        self.collection.delete_one(doc! { "_id": user_id }).await?;
        Ok(())
    }
}
