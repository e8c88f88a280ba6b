use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    clients::{http_client, EmailSender, OutgoingEmail},
    config::ResendConfig,
    errors::{AppError, AppResult},
};

#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendError {
    message: String,
}

pub struct ResendClient {
    api_key: Option<SecretString>,
    base_url: String,
    client: reqwest::Client,
}

impl ResendClient {
    pub fn new(config: &ResendConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: http_client(),
        }
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(&self, email: OutgoingEmail) -> AppResult<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| AppError::NotConfigured("Resend API key not configured".to_string()))?;

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key.expose_secret())
            .json(&email)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ResendError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(AppError::ExternalService(format!(
                "Resend returned {}: {}",
                status.as_u16(),
                message
            )));
        }

        let sent: SendResponse = serde_json::from_str(&body)?;
        Ok(sent.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ResendClient {
        let mut config = Config::test_config().resend;
        config.base_url = server.uri();
        ResendClient::new(&config)
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "Simmonds Platform <noreply@simmonds.online>".to_string(),
            to: vec!["anna@example.com".to_string()],
            subject: "Welcome".to_string(),
            html: "<p>Hello</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn send_returns_message_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer test-resend-key"))
            .and(body_partial_json(serde_json::json!({
                "to": ["anna@example.com"],
                "subject": "Welcome"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "email-123"})))
            .mount(&server)
            .await;

        let id = client_for(&server).send(email()).await.unwrap();
        assert_eq!(id, "email-123");
    }

    #[tokio::test]
    async fn validation_error_carries_provider_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "statusCode": 422,
                "name": "validation_error",
                "message": "Invalid `to` field."
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).send(email()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "External service error: Resend returned 422: Invalid `to` field."
        );
    }

    #[tokio::test]
    async fn unparseable_success_body_is_external_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let err = client_for(&server).send(email()).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
    }

    #[tokio::test]
    async fn missing_key_is_not_configured() {
        let mut config = Config::test_config().resend;
        config.api_key = None;

        let err = ResendClient::new(&config).send(email()).await.unwrap_err();
        assert!(matches!(err, AppError::NotConfigured(_)));
    }
}
