use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Question, Test, TestType},
};

/// How to narrow a test listing. A company filter wins over a type filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TestFilter {
    #[default]
    All,
    Company(String),
    Type(TestType),
}

impl TestFilter {
    pub fn new(company_id: Option<String>, test_type: Option<TestType>) -> Self {
        match (company_id, test_type) {
            (Some(company_id), _) => TestFilter::Company(company_id),
            (None, Some(test_type)) => TestFilter::Type(test_type),
            (None, None) => TestFilter::All,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TestRepository: Send + Sync {
    async fn create(&self, test: Test) -> AppResult<Test>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Test>>;
    async fn list(&self, filter: TestFilter) -> AppResult<Vec<Test>>;
    async fn add_question(&self, question: Question) -> AppResult<Question>;
    async fn find_question(&self, id: &str) -> AppResult<Option<Question>>;
    /// Questions of a test in ascending `order`.
    async fn questions_for_test(&self, test_id: &str) -> AppResult<Vec<Question>>;
    async fn set_question_audio(&self, question_id: &str, audio_url: &str) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoTestRepository {
    tests: Collection<Test>,
    questions: Collection<Question>,
}

impl MongoTestRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            tests: db.get_collection("tests"),
            questions: db.get_collection("questions"),
        }
    }
}

#[async_trait]
impl TestRepository for MongoTestRepository {
    async fn create(&self, test: Test) -> AppResult<Test> {
        self.tests.insert_one(&test).await?;
        Ok(test)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Test>> {
        let test = self.tests.find_one(doc! { "id": id }).await?;
        Ok(test)
    }

    async fn list(&self, filter: TestFilter) -> AppResult<Vec<Test>> {
        let filter = match filter {
            TestFilter::All => doc! {},
            TestFilter::Company(company_id) => doc! { "company_id": company_id },
            TestFilter::Type(test_type) => doc! { "test_type": test_type.as_str() },
        };

        let tests = self
            .tests
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(tests)
    }

    async fn add_question(&self, question: Question) -> AppResult<Question> {
        self.questions.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_question(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.questions.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn questions_for_test(&self, test_id: &str) -> AppResult<Vec<Question>> {
        let questions = self
            .questions
            .find(doc! { "test_id": test_id })
            .sort(doc! { "order": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn set_question_audio(&self, question_id: &str, audio_url: &str) -> AppResult<()> {
        let result = self
            .questions
            .update_one(
                doc! { "id": question_id },
                doc! { "$set": { "audio_url": audio_url } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("Question '{}' not found", question_id)));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).name("id_unique".to_string()).build())
            .build();

        let company_index = IndexModel::builder()
            .keys(doc! { "company_id": 1 })
            .options(IndexOptions::builder().name("company_id".to_string()).build())
            .build();

        let type_index = IndexModel::builder()
            .keys(doc! { "test_type": 1 })
            .options(IndexOptions::builder().name("test_type".to_string()).build())
            .build();

        let author_index = IndexModel::builder()
            .keys(doc! { "created_by": 1 })
            .options(IndexOptions::builder().name("created_by".to_string()).build())
            .build();

        self.tests
            .create_indexes(vec![id_index, company_index, type_index, author_index])
            .await?;

        let question_id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).name("id_unique".to_string()).build())
            .build();

        let test_order_index = IndexModel::builder()
            .keys(doc! { "test_id": 1, "order": 1 })
            .options(IndexOptions::builder().name("test_order".to_string()).build())
            .build();

        self.questions
            .create_indexes(vec![question_id_index, test_order_index])
            .await?;

        log::info!("Ensured indexes for tests and questions collections");
        Ok(())
    }
}
