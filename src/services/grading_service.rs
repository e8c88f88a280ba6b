use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::domain::{GradedAnswer, GradedAttempt, Question, Submission};

pub struct GradingService;

impl GradingService {
    /// Grade a submission against a test's questions.
    ///
    /// Answers whose question id is unknown are recorded as incorrect and add
    /// nothing to `total_points`. Every other answer adds its question's full
    /// value to `total_points`, duplicates included.
    pub fn grade_submission(
        questions: &[Question],
        submission: &Submission,
        passing_threshold: f64,
        completed_at: DateTime<Utc>,
    ) -> GradedAttempt {
        let question_map: HashMap<&str, &Question> =
            questions.iter().map(|q| (q.id.as_str(), q)).collect();

        let mut score: u64 = 0;
        let mut total_points: u64 = 0;
        let mut answers = Vec::with_capacity(submission.answers.len());

        for submitted in &submission.answers {
            let graded = match question_map.get(submitted.question_id.as_str()) {
                Some(question) => {
                    total_points += u64::from(question.points);

                    let is_correct = Self::answers_match(&submitted.answer, &question.correct_answer);
                    let points = if is_correct { question.points } else { 0 };
                    score += u64::from(points);

                    GradedAnswer {
                        question_id: submitted.question_id.clone(),
                        answer: submitted.answer.clone(),
                        is_correct,
                        points,
                    }
                }
                None => {
                    log::debug!(
                        "Submitted answer references unknown question '{}'",
                        submitted.question_id
                    );
                    GradedAnswer {
                        question_id: submitted.question_id.clone(),
                        answer: submitted.answer.clone(),
                        is_correct: false,
                        points: 0,
                    }
                }
            };
            answers.push(graded);
        }

        let percentage_score = if total_points > 0 {
            100.0 * score as f64 / total_points as f64
        } else {
            0.0
        };
        let passed = total_points > 0 && percentage_score >= passing_threshold;

        GradedAttempt {
            score,
            total_points,
            percentage_score,
            passed,
            answers,
            started_at: submission.started_at,
            completed_at,
            duration_seconds: (completed_at - submission.started_at).num_seconds().max(0),
        }
    }

    /// Case-insensitive comparison ignoring surrounding whitespace.
    pub fn answers_match(submitted: &str, correct: &str) -> bool {
        submitted.trim().to_lowercase() == correct.trim().to_lowercase()
    }
}
