use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Submission, Test, TestResult, TestWithQuestions},
        dto::{
            request::{AddQuestionRequest, CreateTestRequest, SubmitTestRequest, TestListParams},
            response::SubmissionReceipt,
        },
    },
    repositories::{TestFilter, TestRepository, TestResultRepository},
    services::GradingService,
};

/// Test authoring, test taking and result history.
pub struct TestService {
    tests: Arc<dyn TestRepository>,
    results: Arc<dyn TestResultRepository>,
    passing_score_default: f64,
}

impl TestService {
    pub fn new(
        tests: Arc<dyn TestRepository>,
        results: Arc<dyn TestResultRepository>,
        passing_score_default: f64,
    ) -> Self {
        Self {
            tests,
            results,
            passing_score_default,
        }
    }

    async fn find_test(&self, id: &str) -> AppResult<Test> {
        self.tests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Test with id '{}' not found", id)))
    }

    pub async fn get_test(&self, id: &str) -> AppResult<TestWithQuestions> {
        let test = self.find_test(id).await?;
        let questions = self.tests.questions_for_test(id).await?;
        Ok(TestWithQuestions::new(test, questions))
    }

    pub async fn list_tests(&self, params: TestListParams) -> AppResult<Vec<Test>> {
        self.tests
            .list(TestFilter::new(params.company_id, params.test_type))
            .await
    }

    pub async fn create_test(&self, request: CreateTestRequest) -> AppResult<Test> {
        request.validate()?;

        let test = self.tests.create(Test::from_request(request)).await?;
        log::info!("Created {} test '{}'", test.test_type.as_str(), test.id);
        Ok(test)
    }

    pub async fn add_question(&self, test_id: &str, request: AddQuestionRequest) -> AppResult<Question> {
        request.validate()?;

        self.find_test(test_id).await?;
        self.tests
            .add_question(Question::from_request(test_id, request))
            .await
    }

    /// Grades a submission against the test's current questions and persists
    /// the result.
    pub async fn submit_test(
        &self,
        test_id: &str,
        request: SubmitTestRequest,
    ) -> AppResult<SubmissionReceipt> {
        request.validate()?;

        let test = self.find_test(test_id).await?;
        let questions = self.tests.questions_for_test(test_id).await?;

        let student_id = request.student_id.clone();
        let submission = Submission::from(request);
        let threshold = test.passing_threshold(self.passing_score_default);

        let attempt =
            GradingService::grade_submission(&questions, &submission, threshold, Utc::now());
        let result = self
            .results
            .create(TestResult::from_attempt(test_id, &student_id, attempt))
            .await?;

        log::info!(
            "Student '{}' scored {}/{} on test '{}' (passed: {})",
            student_id,
            result.score,
            result.total_points,
            test_id,
            result.passed
        );

        Ok(SubmissionReceipt::from(&result))
    }

    pub async fn student_results(&self, student_id: &str) -> AppResult<Vec<TestResult>> {
        self.results.list_for_student(student_id).await
    }

    pub async fn test_results(&self, test_id: &str) -> AppResult<Vec<TestResult>> {
        self.results.list_for_test(test_id).await
    }

    pub async fn get_result(&self, id: &str) -> AppResult<TestResult> {
        self.results
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Test result with id '{}' not found", id)))
    }
}
