use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::SubmitTestRequest;

/// A learner's raw answer to one question.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmittedAnswer {
    pub question_id: String,
    pub answer: String,
}

/// Everything a learner hands in for one attempt, in the order given.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Submission {
    pub answers: Vec<SubmittedAnswer>,
    pub started_at: DateTime<Utc>,
}

impl From<SubmitTestRequest> for Submission {
    fn from(request: SubmitTestRequest) -> Self {
        Submission {
            answers: request
                .answers
                .into_iter()
                .map(|a| SubmittedAnswer {
                    question_id: a.question_id,
                    answer: a.answer,
                })
                .collect(),
            started_at: request.started_at,
        }
    }
}

/// One submitted answer paired with its grading outcome.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct GradedAnswer {
    pub question_id: String,
    pub answer: String,
    pub is_correct: bool,
    pub points: u32,
}

/// Grading output before it is attached to a test and a student.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradedAttempt {
    pub score: u64,
    pub total_points: u64,
    pub percentage_score: f64,
    pub passed: bool,
    pub answers: Vec<GradedAnswer>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_seconds: i64,
}

/// Persisted record of one graded attempt. Never updated after insert.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, SimpleObject)]
pub struct TestResult {
    pub id: String,
    pub test_id: String,
    pub student_id: String,
    pub score: u64,
    pub total_points: u64,
    pub percentage_score: f64,
    pub passed: bool,
    pub answers: Vec<GradedAnswer>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_seconds: i64,
}

impl TestResult {
    pub fn from_attempt(test_id: &str, student_id: &str, attempt: GradedAttempt) -> Self {
        TestResult {
            id: Uuid::new_v4().to_string(),
            test_id: test_id.to_string(),
            student_id: student_id.to_string(),
            score: attempt.score,
            total_points: attempt.total_points,
            percentage_score: attempt.percentage_score,
            passed: attempt.passed,
            answers: attempt.answers,
            started_at: attempt.started_at,
            completed_at: attempt.completed_at,
            duration_seconds: attempt.duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn result_copies_grading_fields() {
        let completed_at = Utc::now();
        let attempt = GradedAttempt {
            score: 5,
            total_points: 10,
            percentage_score: 50.0,
            passed: false,
            answers: vec![GradedAnswer {
                question_id: "q-1".to_string(),
                answer: "Sincerely,".to_string(),
                is_correct: true,
                points: 5,
            }],
            started_at: completed_at - Duration::seconds(90),
            completed_at,
            duration_seconds: 90,
        };

        let result = TestResult::from_attempt("test-1", "student-1", attempt);

        assert_eq!(result.test_id, "test-1");
        assert_eq!(result.student_id, "student-1");
        assert_eq!(result.score, 5);
        assert_eq!(result.total_points, 10);
        assert!(!result.passed);
        assert_eq!(result.duration_seconds, 90);
        assert_eq!(result.answers.len(), 1);
    }
}
