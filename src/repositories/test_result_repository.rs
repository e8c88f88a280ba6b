use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::TestResult};

/// Results are append-only: there is no update or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestResultRepository: Send + Sync {
    async fn create(&self, result: TestResult) -> AppResult<TestResult>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<TestResult>>;
    /// Newest first.
    async fn list_for_student(&self, student_id: &str) -> AppResult<Vec<TestResult>>;
    /// Newest first.
    async fn list_for_test(&self, test_id: &str) -> AppResult<Vec<TestResult>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoTestResultRepository {
    collection: Collection<TestResult>,
}

impl MongoTestResultRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("test_results");
        Self { collection }
    }
}

#[async_trait]
impl TestResultRepository for MongoTestResultRepository {
    async fn create(&self, result: TestResult) -> AppResult<TestResult> {
        self.collection.insert_one(&result).await?;
        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<TestResult>> {
        let result = self.collection.find_one(doc! { "id": id }).await?;
        Ok(result)
    }

    async fn list_for_student(&self, student_id: &str) -> AppResult<Vec<TestResult>> {
        let results = self
            .collection
            .find(doc! { "student_id": student_id })
            .sort(doc! { "completed_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }

    async fn list_for_test(&self, test_id: &str) -> AppResult<Vec<TestResult>> {
        let results = self
            .collection
            .find(doc! { "test_id": test_id })
            .sort(doc! { "completed_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for test_results collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).name("id_unique".to_string()).build())
            .build();

        let student_index = IndexModel::builder()
            .keys(doc! { "student_id": 1, "completed_at": -1 })
            .options(IndexOptions::builder().name("student_completed".to_string()).build())
            .build();

        let test_index = IndexModel::builder()
            .keys(doc! { "test_id": 1, "completed_at": -1 })
            .options(IndexOptions::builder().name("test_completed".to_string()).build())
            .build();

        self.collection
            .create_indexes(vec![id_index, student_index, test_index])
            .await?;

        log::info!("Successfully created indexes for test_results collection");
        Ok(())
    }
}
