use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    clients::{http_client, SpeechSynthesizer, Voice},
    config::ElevenLabsConfig,
    errors::{AppError, AppResult},
};

const STABILITY: f32 = 0.5;
const SIMILARITY_BOOST: f32 = 0.75;

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

#[derive(Debug, Deserialize)]
struct VoicesResponse {
    voices: Vec<Voice>,
}

pub struct ElevenLabsClient {
    api_key: Option<SecretString>,
    base_url: String,
    model_id: String,
    client: reqwest::Client,
}

impl ElevenLabsClient {
    pub fn new(config: &ElevenLabsConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model_id: config.model_id.clone(),
            client: http_client(),
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .ok_or_else(|| AppError::NotConfigured("ElevenLabs API key not configured".to_string()))
    }

    async fn check_status(response: reqwest::Response) -> AppResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::error!("ElevenLabs returned {}: {}", status, body);
        Err(AppError::ExternalService(format!(
            "ElevenLabs API error: {}",
            status.canonical_reason().unwrap_or(status.as_str())
        )))
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(&self, text: &str, voice_id: &str) -> AppResult<Vec<u8>> {
        let api_key = self.api_key()?;

        let body = SpeechRequest {
            text,
            model_id: &self.model_id,
            voice_settings: VoiceSettings {
                stability: STABILITY,
                similarity_boost: SIMILARITY_BOOST,
            },
        };

        let response = self
            .client
            .post(format!("{}/text-to-speech/{}", self.base_url, voice_id))
            .header("xi-api-key", api_key)
            .header("Accept", "audio/mpeg")
            .json(&body)
            .send()
            .await?;

        let audio = Self::check_status(response).await?.bytes().await?;
        log::debug!("Synthesized {} bytes of audio with voice '{}'", audio.len(), voice_id);

        Ok(audio.to_vec())
    }

    async fn voices(&self) -> AppResult<Vec<Voice>> {
        let api_key = self.api_key()?;

        let response = self
            .client
            .get(format!("{}/voices", self.base_url))
            .header("xi-api-key", api_key)
            .send()
            .await?;

        let body = Self::check_status(response).await?.text().await?;
        let parsed: VoicesResponse = serde_json::from_str(&body)?;

        Ok(parsed.voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ElevenLabsClient {
        let mut config = Config::test_config().elevenlabs;
        config.base_url = server.uri();
        ElevenLabsClient::new(&config)
    }

    #[tokio::test]
    async fn synthesize_returns_audio_bytes() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text-to-speech/voice-1"))
            .and(header("xi-api-key", "test-elevenlabs-key"))
            .and(header("accept", "audio/mpeg"))
            .and(body_partial_json(serde_json::json!({
                "text": "Good morning",
                "model_id": "eleven_monolingual_v1",
                "voice_settings": {"stability": 0.5, "similarity_boost": 0.75}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x49, 0x44, 0x33]))
            .mount(&server)
            .await;

        let audio = client_for(&server).synthesize("Good morning", "voice-1").await.unwrap();
        assert_eq!(audio, vec![0x49, 0x44, 0x33]);
    }

    #[tokio::test]
    async fn synthesize_failure_is_external_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/text-to-speech/voice-1"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client_for(&server).synthesize("Hello", "voice-1").await.unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
    }

    #[tokio::test]
    async fn voices_are_listed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/voices"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "voices": [
                    {"voice_id": "21m00Tcm4TlvDq8ikWAM", "name": "Rachel", "category": "premade"},
                    {"voice_id": "custom-1", "name": "Coach"}
                ]
            })))
            .mount(&server)
            .await;

        let voices = client_for(&server).voices().await.unwrap();
        assert_eq!(voices.len(), 2);
        assert_eq!(voices[0].name, "Rachel");
        assert!(voices[1].category.is_none());
    }

    #[tokio::test]
    async fn unparseable_voices_body_is_external_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/voices"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).voices().await.unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
    }

    #[tokio::test]
    async fn missing_key_is_not_configured() {
        let mut config = Config::test_config().elevenlabs;
        config.api_key = None;

        let err = ElevenLabsClient::new(&config).voices().await.unwrap_err();
        assert!(matches!(err, AppError::NotConfigured(_)));
    }
}
