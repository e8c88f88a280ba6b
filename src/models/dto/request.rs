use async_graphql::InputObject;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{
    CompanySettings, ProficiencyLevel, QuestionKind, TestType, UserRole,
};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub role: UserRole,

    pub company_id: Option<String>,

    #[validate(url)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(url)]
    pub avatar_url: Option<String>,

    pub company_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListParams {
    pub company_id: Option<String>,
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailLookupParams {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub admin_id: String,

    #[validate(length(min = 1, max = 253))]
    pub domain: Option<String>,

    #[validate(url)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 253))]
    pub domain: Option<String>,

    #[validate(url)]
    pub logo: Option<String>,

    pub settings: Option<CompanySettings>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyListParams {
    pub admin_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGroupRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub level: ProficiencyLevel,

    pub company_id: String,

    pub teacher_id: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateGroupRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub level: Option<ProficiencyLevel>,

    pub teacher_id: Option<String>,

    #[validate(length(max = 2000))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupListParams {
    pub company_id: Option<String>,
    pub teacher_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddStudentRequest {
    pub student_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct CreateTestRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 2000))]
    pub description: Option<String>,

    pub test_type: TestType,

    pub level: Option<ProficiencyLevel>,

    #[validate(range(min = 1, max = 600))]
    pub duration_minutes: u32,

    #[validate(range(min = 0.0, max = 100.0))]
    pub passing_score: Option<f64>,

    pub created_by: String,

    pub company_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestListParams {
    pub company_id: Option<String>,
    #[serde(rename = "type")]
    pub test_type: Option<TestType>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct AddQuestionRequest {
    pub kind: QuestionKind,

    #[validate(length(min = 1, max = 2000))]
    pub prompt: String,

    pub options: Option<Vec<String>>,

    #[validate(length(max = 500))]
    pub correct_answer: String,

    #[validate(range(max = 1000))]
    pub points: u32,

    #[validate(length(max = 2000))]
    pub explanation: Option<String>,

    pub audio_url: Option<String>,

    pub order: i32,

    pub generated_by_ai: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct AnswerInput {
    pub question_id: String,
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, Validate, InputObject)]
pub struct SubmitTestRequest {
    #[validate(length(min = 1))]
    pub student_id: String,

    #[validate(nested)]
    pub answers: Vec<AnswerInput>,

    pub started_at: DateTime<Utc>,
}

fn validate_generatable_kind(kind: &QuestionKind) -> Result<(), ValidationError> {
    if *kind == QuestionKind::Essay {
        return Err(ValidationError::new("essay_questions_cannot_be_generated"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuestionsRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    pub level: ProficiencyLevel,

    #[validate(range(min = 1, max = 50))]
    pub question_count: u32,

    #[validate(custom(function = validate_generatable_kind))]
    pub question_type: QuestionKind,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub topic: String,

    pub level: ProficiencyLevel,

    #[validate(range(min = 1, max = 240))]
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateAudioRequest {
    #[validate(length(min = 1, max = 5000))]
    pub text: String,

    pub voice_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestionAudioRequest {
    #[validate(length(min = 1, max = 5000))]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TestInvitationEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub to: String,

    #[validate(length(min = 1, max = 100))]
    pub student_name: String,

    #[validate(length(min = 1, max = 200))]
    pub test_title: String,

    #[validate(url)]
    pub test_url: String,

    #[validate(length(min = 1, max = 200))]
    pub company_name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TestResultsEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub to: String,

    #[validate(length(min = 1, max = 100))]
    pub student_name: String,

    #[validate(length(min = 1, max = 200))]
    pub test_title: String,

    #[validate(range(min = 0.0, max = 100.0))]
    pub score: f64,

    pub passed: bool,

    #[validate(length(max = 2000))]
    pub encouraging_message: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WelcomeEmailRequest {
    #[validate(email(message = "Invalid email format"))]
    pub to: String,

    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub role: UserRole,

    #[validate(length(min = 1, max = 200))]
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailHistoryParams {
    pub to: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TrackEventRequest {
    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "type")]
    pub event_type: String,

    pub user_id: String,

    #[validate(length(min = 1, max = 500))]
    pub page: String,

    #[validate(range(min = 0.0))]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 2000))]
    pub body: String,

    #[validate(length(min = 1, max = 100))]
    pub author: String,
}
