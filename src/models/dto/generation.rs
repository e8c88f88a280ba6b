use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::QuestionKind;

fn default_points() -> u32 {
    10
}

/// A question drafted by the language model for a single question type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedQuestion {
    #[serde(alias = "question")]
    pub prompt: String,
    /// Present for multiple choice questions only.
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(alias = "correctAnswer")]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// A question inside a generated quiz, which may mix question types.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedQuizQuestion {
    #[serde(alias = "type")]
    pub kind: QuestionKind,
    #[serde(alias = "question")]
    pub prompt: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(alias = "correctAnswer")]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default = "default_points")]
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedQuiz {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<GeneratedQuizQuestion>,
}
