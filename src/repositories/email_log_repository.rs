use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::EmailLog};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailLogRepository: Send + Sync {
    async fn create(&self, log: EmailLog) -> AppResult<EmailLog>;
    /// Newest first.
    async fn list_for_recipient(&self, to: &str) -> AppResult<Vec<EmailLog>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoEmailLogRepository {
    collection: Collection<EmailLog>,
}

impl MongoEmailLogRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("emails");
        Self { collection }
    }
}

#[async_trait]
impl EmailLogRepository for MongoEmailLogRepository {
    async fn create(&self, log: EmailLog) -> AppResult<EmailLog> {
        self.collection.insert_one(&log).await?;
        Ok(log)
    }

    async fn list_for_recipient(&self, to: &str) -> AppResult<Vec<EmailLog>> {
        let logs = self
            .collection
            .find(doc! { "to": to })
            .sort(doc! { "sent_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(logs)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let recipient_index = IndexModel::builder()
            .keys(doc! { "to": 1, "sent_at": -1 })
            .options(IndexOptions::builder().name("recipient_sent".to_string()).build())
            .build();

        let type_index = IndexModel::builder()
            .keys(doc! { "email_type": 1 })
            .options(IndexOptions::builder().name("email_type".to_string()).build())
            .build();

        self.collection
            .create_indexes(vec![recipient_index, type_index])
            .await?;
        log::info!("Ensured indexes for emails collection");

        Ok(())
    }
}
