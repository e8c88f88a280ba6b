use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use schemars::{schema_for, JsonSchema};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    clients::QuestionGenerator,
    config::OpenRouterConfig,
    constants::prompts::{
        MULTIPLE_CHOICE_OPTIONS_LINE, NO_OPTIONS_LINE, QUESTION_GENERATION_PROMPT,
        QUESTION_WRITER_SYSTEM_PROMPT, QUIZ_GENERATION_PROMPT,
    },
    errors::{AppError, AppResult},
    models::{
        domain::{ProficiencyLevel, QuestionKind},
        dto::generation::{GeneratedQuestion, GeneratedQuiz},
    },
};

const QUESTION_TEMPERATURE: f32 = 0.7;

static JSON_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[\s\S]*\]").expect("JSON_ARRAY is a valid regex pattern"));

static JSON_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[\s\S]*\}").expect("JSON_OBJECT is a valid regex pattern"));

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenRouter speaks the OpenAI chat-completions protocol.
pub struct OpenRouterClient {
    client: Option<Client<OpenAIConfig>>,
    question_model: String,
    quiz_model: String,
}

impl OpenRouterClient {
    pub fn new(config: &OpenRouterConfig) -> Self {
        let client = config.api_key.as_ref().map(|key| {
            let openai_config = OpenAIConfig::new()
                .with_api_key(key.expose_secret())
                .with_api_base(config.base_url.trim_end_matches('/'));
            Client::with_config(openai_config)
        });

        Self {
            client,
            question_model: config.question_model.clone(),
            quiz_model: config.quiz_model.clone(),
        }
    }

    fn client(&self) -> AppResult<&Client<OpenAIConfig>> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::NotConfigured("OpenRouter API key not configured".to_string()))
    }

    async fn complete(&self, request: ChatRequest) -> AppResult<String> {
        log::debug!("Requesting completion from model '{}'", request.model);

        let response: ChatResponse = self.client()?.chat().create_byot(request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AppError::ExternalService("OpenRouter returned an empty completion".to_string()))
    }
}

fn schema_text<T: JsonSchema>() -> AppResult<String> {
    serde_json::to_string_pretty(&schema_for!(T))
        .map_err(|e| AppError::InternalError(format!("Failed to render JSON schema: {}", e)))
}

pub(crate) fn question_prompt(
    topic: &str,
    level: ProficiencyLevel,
    count: u32,
    kind: QuestionKind,
    schema: &str,
) -> String {
    let options_line = if kind == QuestionKind::MultipleChoice {
        MULTIPLE_CHOICE_OPTIONS_LINE
    } else {
        NO_OPTIONS_LINE
    };

    QUESTION_GENERATION_PROMPT
        .replace("{count}", &count.to_string())
        .replace("{question_type}", kind.as_str())
        .replace("{level}", level.as_str())
        .replace("{options_line}", options_line)
        .replace("{schema}", schema)
        .replace("{topic}", topic)
}

pub(crate) fn quiz_prompt(topic: &str, level: ProficiencyLevel, count: u32, schema: &str) -> String {
    QUIZ_GENERATION_PROMPT
        .replace("{count}", &count.to_string())
        .replace("{level}", level.as_str())
        .replace("{schema}", schema)
        .replace("{topic}", topic)
}

/// Parses the outermost JSON value matched by `pattern` out of free-form model output.
pub(crate) fn extract_json<T: DeserializeOwned>(content: &str, pattern: &Regex, what: &str) -> AppResult<T> {
    let matched = pattern
        .find(content)
        .ok_or_else(|| AppError::ExternalService(format!("Could not parse {} from AI response", what)))?;

    serde_json::from_str(matched.as_str()).map_err(|e| {
        log::error!("Unparseable {} in AI response: {}", what, e);
        AppError::ExternalService(format!("Could not parse {} from AI response: {}", what, e))
    })
}

#[async_trait]
impl QuestionGenerator for OpenRouterClient {
    async fn generate_questions(
        &self,
        topic: &str,
        level: ProficiencyLevel,
        count: u32,
        kind: QuestionKind,
    ) -> AppResult<Vec<GeneratedQuestion>> {
        self.client()?;
        let schema = schema_text::<GeneratedQuestion>()?;

        let request = ChatRequest {
            model: self.question_model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: QUESTION_WRITER_SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: question_prompt(topic, level, count, kind, &schema),
                },
            ],
            temperature: Some(QUESTION_TEMPERATURE),
        };

        let content = self.complete(request).await?;
        let questions: Vec<GeneratedQuestion> = extract_json(&content, &JSON_ARRAY, "questions")?;

        log::debug!("Parsed {} questions from completion", questions.len());
        Ok(questions)
    }

    async fn generate_quiz(
        &self,
        topic: &str,
        level: ProficiencyLevel,
        count: u32,
    ) -> AppResult<GeneratedQuiz> {
        self.client()?;
        let schema = schema_text::<GeneratedQuiz>()?;

        let request = ChatRequest {
            model: self.quiz_model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: quiz_prompt(topic, level, count, &schema),
            }],
            temperature: None,
        };

        let content = self.complete(request).await?;
        let quiz: GeneratedQuiz = extract_json(&content, &JSON_OBJECT, "quiz")?;

        log::debug!("Parsed quiz '{}' from completion", quiz.title);
        Ok(quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> OpenRouterConfig {
        let mut config = Config::test_config().openrouter;
        config.base_url = server.uri();
        config
    }

    fn completion(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "gen-1",
            "object": "chat.completion",
            "created": 1714557600,
            "model": "openai/gpt-4-turbo",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
    }

    #[test]
    fn extract_json_finds_array_inside_prose() {
        let content = "Here you go:\n[{\"prompt\": \"Pick one\", \"correct_answer\": \"B\"}]\nGood luck!";

        let questions: Vec<GeneratedQuestion> = extract_json(content, &JSON_ARRAY, "questions").unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "B");
    }

    #[test]
    fn extract_json_without_match_is_external_error() {
        let err = extract_json::<Vec<GeneratedQuestion>>("I cannot help with that.", &JSON_ARRAY, "questions")
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
    }

    #[test]
    fn question_prompt_mentions_options_only_for_multiple_choice() {
        let mc = question_prompt("Travel", ProficiencyLevel::Beginner, 4, QuestionKind::MultipleChoice, "{}");
        assert!(mc.contains("Generate 4 multiple_choice"));
        assert!(mc.contains(MULTIPLE_CHOICE_OPTIONS_LINE));
        assert!(mc.contains("\"Travel\""));

        let tf = question_prompt("Travel", ProficiencyLevel::Beginner, 4, QuestionKind::TrueFalse, "{}");
        assert!(tf.contains(NO_OPTIONS_LINE));
        assert!(!tf.contains("{level}"));
    }

    #[test]
    fn missing_key_is_not_configured() {
        let mut config = Config::test_config().openrouter;
        config.api_key = None;

        let client = OpenRouterClient::new(&config);
        assert!(matches!(client.client(), Err(AppError::NotConfigured(_))));
    }

    #[tokio::test]
    async fn generates_questions_from_completion() {
        let server = MockServer::start().await;
        let content = "```json\n[{\"question\": \"She ___ to work.\", \"correctAnswer\": \"goes\", \"explanation\": \"Present simple\"}]\n```";

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-openrouter-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(&config_for(&server));
        let questions = client
            .generate_questions("Routines", ProficiencyLevel::Beginner, 1, QuestionKind::FillBlank)
            .await
            .unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "She ___ to work.");
        assert_eq!(questions[0].correct_answer, "goes");
    }

    #[tokio::test]
    async fn generates_quiz_from_completion() {
        let server = MockServer::start().await;
        let content = r#"{"title": "Office English", "description": "Workplace basics", "questions": [
            {"type": "multiple_choice", "question": "A ___ is held weekly.", "options": ["meeting", "meet"], "correctAnswer": "meeting", "points": 10},
            {"type": "true_false", "question": "'Regards' closes a letter.", "correctAnswer": "True"}
        ]}"#;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(&config_for(&server));
        let quiz = client
            .generate_quiz("Office", ProficiencyLevel::Intermediate, 2)
            .await
            .unwrap();

        assert_eq!(quiz.title, "Office English");
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[1].kind, QuestionKind::TrueFalse);
        assert_eq!(quiz.questions[1].points, 10);
    }

    #[tokio::test]
    async fn upstream_rejection_is_external_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"message": "No auth credentials found", "type": "invalid_request_error", "code": 401}
            })))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(&config_for(&server));
        let err = client
            .generate_questions("Travel", ProficiencyLevel::Advanced, 3, QuestionKind::TrueFalse)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExternalService(_)));
    }

    #[tokio::test]
    async fn prose_only_completion_is_external_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Sorry, I can't do that.")))
            .mount(&server)
            .await;

        let client = OpenRouterClient::new(&config_for(&server));
        let err = client
            .generate_quiz("Travel", ProficiencyLevel::Advanced, 3)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::ExternalService(_)));
    }
}
