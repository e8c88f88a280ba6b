use std::sync::Arc;

use crate::{
    app_state::{AppState, Providers, Repositories},
    clients::{MockEmailSender, MockQuestionGenerator, MockSpeechSynthesizer},
    config::Config,
    db::Database,
    repositories::{
        analytics_repository::MockAnalyticsRepository, company_repository::MockCompanyRepository,
        email_log_repository::MockEmailLogRepository, group_repository::MockGroupRepository,
        message_repository::MockMessageRepository,
        test_repository::MockTestRepository, test_result_repository::MockTestResultRepository,
        user_repository::MockUserRepository,
    },
};

pub mod fixtures {
    use chrono::{Duration, Utc};

    use crate::models::domain::{
        GradedAnswer, Question, QuestionKind, Test, TestResult, TestType, User, UserRole,
    };

    pub fn student(id: &str) -> User {
        let mut user = User::new(&format!("{}@example.com", id), "Test Student", UserRole::Student);
        user.id = id.to_string();
        user
    }

    pub fn placement_test(id: &str) -> Test {
        Test {
            id: id.to_string(),
            title: "Placement Test".to_string(),
            description: Some("Initial level check".to_string()),
            test_type: TestType::Placement,
            level: None,
            duration_minutes: 30,
            passing_score: None,
            created_by: "admin-1".to_string(),
            company_id: Some("company-1".to_string()),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn question(test_id: &str, id: &str, correct_answer: &str, points: u32, order: i32) -> Question {
        let mut question = Question::new(test_id, QuestionKind::FillBlank, "Fill the gap", correct_answer, points);
        question.id = id.to_string();
        question.order = order;
        question
    }

    pub fn result(id: &str, test_id: &str, student_id: &str) -> TestResult {
        let completed_at = Utc::now();
        TestResult {
            id: id.to_string(),
            test_id: test_id.to_string(),
            student_id: student_id.to_string(),
            score: 5,
            total_points: 10,
            percentage_score: 50.0,
            passed: false,
            answers: vec![GradedAnswer {
                question_id: "q-1".to_string(),
                answer: "went".to_string(),
                is_correct: true,
                points: 5,
            }],
            started_at: completed_at - Duration::minutes(10),
            completed_at,
            duration_seconds: 600,
        }
    }
}

/// Repositories with no expectations set; tests replace the ones they use.
pub fn repositories() -> Repositories {
    Repositories {
        users: Arc::new(MockUserRepository::new()),
        companies: Arc::new(MockCompanyRepository::new()),
        groups: Arc::new(MockGroupRepository::new()),
        tests: Arc::new(MockTestRepository::new()),
        results: Arc::new(MockTestResultRepository::new()),
        emails: Arc::new(MockEmailLogRepository::new()),
        analytics: Arc::new(MockAnalyticsRepository::new()),
        messages: Arc::new(MockMessageRepository::new()),
    }
}

pub fn providers() -> Providers {
    Providers {
        generator: Arc::new(MockQuestionGenerator::new()),
        synthesizer: Arc::new(MockSpeechSynthesizer::new()),
        email_sender: Arc::new(MockEmailSender::new()),
    }
}

pub async fn app_state(repositories: Repositories, providers: Providers) -> AppState {
    let config = Config::test_config();
    let db = Database::lazy(&config)
        .await
        .expect("lazy database handle should build");
    AppState::from_parts(config, db, repositories, providers)
}

pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}
