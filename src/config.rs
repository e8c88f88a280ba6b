use secrecy::SecretString;
use std::env;

pub const DEFAULT_PASSING_SCORE: f64 = 70.0;

#[derive(Clone, Debug)]
pub struct OpenRouterConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub question_model: String,
    pub quiz_model: String,
}

#[derive(Clone, Debug)]
pub struct ElevenLabsConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub default_voice_id: String,
    pub model_id: String,
}

#[derive(Clone, Debug)]
pub struct ResendConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub from_email: String,
    pub from_name: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    /// Threshold used when a test has no passing score of its own.
    pub passing_score_default: f64,
    pub openrouter: OpenRouterConfig,
    pub elevenlabs: ElevenLabsConfig,
    pub resend: ResendConfig,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn secret_var(key: &str) -> Option<SecretString> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}

fn parse_passing_score(raw: Option<String>) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| (0.0..=100.0).contains(v))
        .unwrap_or(DEFAULT_PASSING_SCORE)
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: var_or("MONGO_CONN_STRING", "mongodb://localhost:27017"),
            mongo_db_name: var_or("MONGO_DB_NAME", "simmonds-local"),
            web_server_host: var_or("WEB_SERVER_HOST", "localhost"),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            passing_score_default: parse_passing_score(env::var("PASSING_SCORE_DEFAULT").ok()),
            openrouter: OpenRouterConfig {
                api_key: secret_var("OPENROUTER_API_KEY"),
                base_url: var_or("OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1"),
                question_model: var_or("OPENROUTER_QUESTION_MODEL", "openai/gpt-4-turbo"),
                quiz_model: var_or("OPENROUTER_QUIZ_MODEL", "anthropic/claude-3-sonnet"),
            },
            elevenlabs: ElevenLabsConfig {
                api_key: secret_var("ELEVENLABS_API_KEY"),
                base_url: var_or("ELEVENLABS_BASE_URL", "https://api.elevenlabs.io/v1"),
                // Rachel
                default_voice_id: var_or("ELEVENLABS_VOICE_ID", "21m00Tcm4TlvDq8ikWAM"),
                model_id: var_or("ELEVENLABS_MODEL_ID", "eleven_monolingual_v1"),
            },
            resend: ResendConfig {
                api_key: secret_var("RESEND_API_KEY"),
                base_url: var_or("RESEND_BASE_URL", "https://api.resend.com"),
                from_email: var_or("RESEND_FROM_EMAIL", "noreply@simmonds.online"),
                from_name: var_or("PLATFORM_NAME", "Simmonds Platform"),
            },
        }
    }

    /// Names of the third-party integrations that have no API key configured.
    pub fn missing_integrations(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.openrouter.api_key.is_none() {
            missing.push("OpenRouter");
        }
        if self.elevenlabs.api_key.is_none() {
            missing.push("ElevenLabs");
        }
        if self.resend.api_key.is_none() {
            missing.push("Resend");
        }
        missing
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "simmonds-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            passing_score_default: DEFAULT_PASSING_SCORE,
            openrouter: OpenRouterConfig {
                api_key: Some(SecretString::from("test-openrouter-key".to_string())),
                base_url: "http://127.0.0.1:1".to_string(),
                question_model: "openai/gpt-4-turbo".to_string(),
                quiz_model: "anthropic/claude-3-sonnet".to_string(),
            },
            elevenlabs: ElevenLabsConfig {
                api_key: Some(SecretString::from("test-elevenlabs-key".to_string())),
                base_url: "http://127.0.0.1:1".to_string(),
                default_voice_id: "21m00Tcm4TlvDq8ikWAM".to_string(),
                model_id: "eleven_monolingual_v1".to_string(),
            },
            resend: ResendConfig {
                api_key: Some(SecretString::from("test-resend-key".to_string())),
                base_url: "http://127.0.0.1:1".to_string(),
                from_email: "noreply@simmonds.online".to_string(),
                from_name: "Simmonds Platform".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.mongo_conn_string.is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!((0.0..=100.0).contains(&config.passing_score_default));
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "simmonds-test");
        assert_eq!(config.passing_score_default, 70.0);
        assert!(config.missing_integrations().is_empty());
    }

    #[test]
    fn test_missing_integrations_lists_unset_keys() {
        let mut config = Config::test_config();
        config.openrouter.api_key = None;
        config.resend.api_key = None;

        assert_eq!(config.missing_integrations(), vec!["OpenRouter", "Resend"]);
    }

    #[test]
    fn test_parse_passing_score() {
        assert_eq!(parse_passing_score(Some("80".to_string())), 80.0);
        assert_eq!(parse_passing_score(Some(" 55.5 ".to_string())), 55.5);
        assert_eq!(parse_passing_score(Some("abc".to_string())), 70.0);
        assert_eq!(parse_passing_score(Some("150".to_string())), 70.0);
        assert_eq!(parse_passing_score(None), 70.0);
    }
}
