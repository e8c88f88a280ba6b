use async_graphql::{Enum, SimpleObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::AddQuestionRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    FillBlank,
    Essay,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "multiple_choice",
            QuestionKind::TrueFalse => "true_false",
            QuestionKind::FillBlank => "fill_blank",
            QuestionKind::Essay => "essay",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Question {
    pub id: String,
    pub test_id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    pub points: u32,
    pub explanation: Option<String>,
    pub audio_url: Option<String>,
    pub order: i32,
    #[serde(default)]
    pub generated_by_ai: bool,
}

impl Question {
    pub fn new(
        test_id: &str,
        kind: QuestionKind,
        prompt: &str,
        correct_answer: &str,
        points: u32,
    ) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            test_id: test_id.to_string(),
            kind,
            prompt: prompt.to_string(),
            options: None,
            correct_answer: correct_answer.to_string(),
            points,
            explanation: None,
            audio_url: None,
            order: 0,
            generated_by_ai: false,
        }
    }

    pub fn from_request(test_id: &str, request: AddQuestionRequest) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            test_id: test_id.to_string(),
            kind: request.kind,
            prompt: request.prompt,
            options: request.options,
            correct_answer: request.correct_answer,
            points: request.points,
            explanation: request.explanation,
            audio_url: request.audio_url,
            order: request.order,
            generated_by_ai: request.generated_by_ai.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_kind_round_trips_as_snake_case() {
        let json = serde_json::to_string(&QuestionKind::MultipleChoice).unwrap();
        assert_eq!(json, "\"multiple_choice\"");

        let parsed: QuestionKind = serde_json::from_str("\"fill_blank\"").unwrap();
        assert_eq!(parsed, QuestionKind::FillBlank);
    }

    #[test]
    fn question_kind_rejects_unknown_variant() {
        assert!(serde_json::from_str::<QuestionKind>("\"matching\"").is_err());
    }

    #[test]
    fn missing_generated_flag_defaults_to_false() {
        let json = serde_json::json!({
            "id": "q-1",
            "test_id": "t-1",
            "kind": "essay",
            "prompt": "Describe your job",
            "options": null,
            "correct_answer": "",
            "points": 10,
            "explanation": null,
            "audio_url": null,
            "order": 1
        });

        let question: Question = serde_json::from_value(json).unwrap();
        assert!(!question.generated_by_ai);
        assert_eq!(question.kind, QuestionKind::Essay);
    }
}
