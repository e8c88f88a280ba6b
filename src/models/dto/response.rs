use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{AnalyticsEvent, TestResult, User};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LastActiveResponse {
    pub user_id: String,
    pub last_active: Option<DateTime<Utc>>,
}

/// A group member as listed to teachers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStudent {
    #[serde(flatten)]
    pub user: User,
    pub joined_at: DateTime<Utc>,
}

/// What a student sees immediately after submitting a test.
#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
pub struct SubmissionReceipt {
    pub result_id: String,
    pub score: u64,
    pub total_points: u64,
    pub percentage_score: f64,
    pub passed: bool,
}

impl From<&TestResult> for SubmissionReceipt {
    fn from(result: &TestResult) -> Self {
        SubmissionReceipt {
            result_id: result.id.clone(),
            score: result.score,
            total_points: result.total_points,
            percentage_score: result.percentage_score,
            passed: result.passed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioResponse {
    /// `data:audio/mpeg;base64,...`
    pub audio_data: String,
    pub voice_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionAudioResponse {
    pub question_id: String,
    pub audio_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailDispatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl EmailDispatch {
    pub fn sent(id: String) -> Self {
        Self {
            id: Some(id),
            skipped: false,
            reason: None,
        }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            id: None,
            skipped: true,
            reason: Some(reason.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsMetrics {
    pub total_views: usize,
    pub unique_visitors: usize,
    /// Mean of the recorded durations, rounded to whole seconds.
    pub avg_session_duration: i64,
    pub recent_events: Vec<AnalyticsEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub missing_integrations: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{GradedAttempt, TestResult};

    #[test]
    fn receipt_mirrors_result() {
        let now = Utc::now();
        let result = TestResult::from_attempt(
            "test-1",
            "student-1",
            GradedAttempt {
                score: 7,
                total_points: 10,
                percentage_score: 70.0,
                passed: true,
                answers: vec![],
                started_at: now,
                completed_at: now,
                duration_seconds: 0,
            },
        );

        let receipt = SubmissionReceipt::from(&result);
        assert_eq!(receipt.result_id, result.id);
        assert_eq!(receipt.score, 7);
        assert!(receipt.passed);
    }

    #[test]
    fn skipped_dispatch_omits_id() {
        let json = serde_json::to_value(EmailDispatch::skipped("Student did not pass")).unwrap();

        assert_eq!(json["skipped"], true);
        assert_eq!(json["reason"], "Student did not pass");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn sent_dispatch_omits_skip_fields() {
        let json = serde_json::to_value(EmailDispatch::sent("email-1".to_string())).unwrap();

        assert_eq!(json["id"], "email-1");
        assert!(json.get("skipped").is_none());
        assert!(json.get("reason").is_none());
    }
}
