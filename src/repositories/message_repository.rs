use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Message};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: Message) -> AppResult<Message>;
    /// Up to `limit` messages, newest first.
    async fn latest(&self, limit: i64) -> AppResult<Vec<Message>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoMessageRepository {
    collection: Collection<Message>,
}

impl MongoMessageRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_collection("messages"),
        }
    }
}

#[async_trait]
impl MessageRepository for MongoMessageRepository {
    async fn create(&self, message: Message) -> AppResult<Message> {
        self.collection.insert_one(&message).await?;
        Ok(message)
    }

    async fn latest(&self, limit: i64) -> AppResult<Vec<Message>> {
        let messages = self
            .collection
            .find(doc! {})
            .sort(doc! { "timestamp": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(messages)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let timestamp_index = IndexModel::builder()
            .keys(doc! { "timestamp": -1 })
            .options(IndexOptions::builder().name("timestamp".to_string()).build())
            .build();

        self.collection
            .create_indexes(vec![id_index, timestamp_index])
            .await?;
        log::info!("Ensured indexes for messages collection");

        Ok(())
    }
}
