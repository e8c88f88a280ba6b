use std::sync::Arc;

use validator::Validate;

use crate::{
    clients::QuestionGenerator,
    errors::AppResult,
    models::dto::{
        generation::{GeneratedQuestion, GeneratedQuiz},
        request::{GenerateQuestionsRequest, GenerateQuizRequest},
    },
};

/// Minutes of quiz time budgeted per generated question.
const MINUTES_PER_QUESTION: u32 = 2;

pub struct ContentService {
    generator: Arc<dyn QuestionGenerator>,
}

impl ContentService {
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self { generator }
    }

    pub async fn generate_questions(
        &self,
        request: GenerateQuestionsRequest,
    ) -> AppResult<Vec<GeneratedQuestion>> {
        request.validate()?;

        let questions = self
            .generator
            .generate_questions(
                &request.topic,
                request.level,
                request.question_count,
                request.question_type,
            )
            .await?;

        log::info!(
            "Generated {} {} questions on '{}'",
            questions.len(),
            request.question_type.as_str(),
            request.topic
        );
        Ok(questions)
    }

    pub async fn generate_quiz(&self, request: GenerateQuizRequest) -> AppResult<GeneratedQuiz> {
        request.validate()?;

        let count = quiz_question_count(request.duration_minutes);
        let quiz = self
            .generator
            .generate_quiz(&request.topic, request.level, count)
            .await?;

        log::info!("Generated quiz '{}' with {} questions", quiz.title, quiz.questions.len());
        Ok(quiz)
    }
}

fn quiz_question_count(duration_minutes: u32) -> u32 {
    (duration_minutes / MINUTES_PER_QUESTION).max(1)
}
