use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::AnalyticsEvent};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn create(&self, event: AnalyticsEvent) -> AppResult<AnalyticsEvent>;
    /// Up to `limit` events, newest first.
    async fn recent(&self, limit: i64) -> AppResult<Vec<AnalyticsEvent>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoAnalyticsRepository {
    collection: Collection<AnalyticsEvent>,
}

impl MongoAnalyticsRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("analytics_events");
        Self { collection }
    }
}

#[async_trait]
impl AnalyticsRepository for MongoAnalyticsRepository {
    async fn create(&self, event: AnalyticsEvent) -> AppResult<AnalyticsEvent> {
        self.collection.insert_one(&event).await?;
        Ok(event)
    }

    async fn recent(&self, limit: i64) -> AppResult<Vec<AnalyticsEvent>> {
        let events = self
            .collection
            .find(doc! {})
            .sort(doc! { "timestamp": -1 })
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(events)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let timestamp_index = IndexModel::builder()
            .keys(doc! { "timestamp": -1 })
            .options(IndexOptions::builder().name("timestamp".to_string()).build())
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection
            .create_indexes(vec![timestamp_index, user_index])
            .await?;
        log::info!("Ensured indexes for analytics_events collection");

        Ok(())
    }
}
