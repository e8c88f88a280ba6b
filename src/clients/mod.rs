//! Third-party HTTP providers: question generation, speech synthesis and
//! transactional email. Each provider sits behind a trait so services can be
//! tested without the network.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    errors::AppResult,
    models::{
        domain::{ProficiencyLevel, QuestionKind},
        dto::generation::{GeneratedQuestion, GeneratedQuiz},
    },
};

pub mod elevenlabs;
pub mod openrouter;
pub mod resend;

pub use elevenlabs::ElevenLabsClient;
pub use openrouter::OpenRouterClient;
pub use resend::ResendClient;

const HTTP_TIMEOUT_SECS: u64 = 60;

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|err| {
            log::warn!("Falling back to default HTTP client: {}", err);
            reqwest::Client::new()
        })
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate_questions(
        &self,
        topic: &str,
        level: ProficiencyLevel,
        count: u32,
        kind: QuestionKind,
    ) -> AppResult<Vec<GeneratedQuestion>>;

    async fn generate_quiz(
        &self,
        topic: &str,
        level: ProficiencyLevel,
        count: u32,
    ) -> AppResult<GeneratedQuiz>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// MPEG audio bytes for `text` spoken by `voice_id`.
    async fn synthesize(&self, text: &str, voice_id: &str) -> AppResult<Vec<u8>>;
    async fn voices(&self) -> AppResult<Vec<Voice>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Returns the provider's message id.
    async fn send(&self, email: OutgoingEmail) -> AppResult<String>;
}
