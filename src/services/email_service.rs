use std::sync::Arc;

use serde_json::json;
use validator::Validate;

use crate::{
    clients::{EmailSender, OutgoingEmail},
    config::ResendConfig,
    constants::email_templates,
    errors::{AppError, AppResult},
    models::{
        domain::{EmailLog, EmailStatus, EmailType},
        dto::{
            request::{TestInvitationEmailRequest, TestResultsEmailRequest, WelcomeEmailRequest},
            response::EmailDispatch,
        },
    },
    repositories::EmailLogRepository,
};

const SKIP_FAILED_RESULTS: &str = "Only sending positive results";

/// Transactional email. Every attempted send is recorded in the email log.
pub struct EmailService {
    sender: Arc<dyn EmailSender>,
    logs: Arc<dyn EmailLogRepository>,
    from: String,
    platform_name: String,
    configured: bool,
}

impl EmailService {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        logs: Arc<dyn EmailLogRepository>,
        config: &ResendConfig,
    ) -> Self {
        Self {
            sender,
            logs,
            from: format!("{} <{}>", config.from_name, config.from_email),
            platform_name: config.from_name.clone(),
            configured: config.api_key.is_some(),
        }
    }

    pub async fn send_test_invitation(
        &self,
        request: TestInvitationEmailRequest,
    ) -> AppResult<EmailDispatch> {
        request.validate()?;

        let html = email_templates::invitation_html(
            &request.student_name,
            &request.test_title,
            &request.test_url,
            &request.company_name,
            &self.platform_name,
        );
        let subject = format!(
            "{}{}",
            email_templates::INVITATION_SUBJECT_PREFIX,
            request.test_title
        );

        self.dispatch(&request.to, subject, html, EmailType::TestInvitation)
            .await
    }

    /// Only passing results are emailed. Failed attempts are skipped without
    /// contacting the provider, but a missing API key is reported first.
    pub async fn send_test_results(
        &self,
        request: TestResultsEmailRequest,
    ) -> AppResult<EmailDispatch> {
        request.validate()?;

        if !self.configured {
            return Err(AppError::NotConfigured(
                "Resend API key not configured".to_string(),
            ));
        }

        if !request.passed {
            log::warn!(
                "Skipping results email to {} for '{}': attempt did not pass",
                request.to,
                request.test_title
            );
            return Ok(EmailDispatch::skipped(SKIP_FAILED_RESULTS));
        }

        let html = email_templates::results_html(
            &request.student_name,
            &request.test_title,
            request.score,
            &request.encouraging_message,
            &self.platform_name,
        );

        self.dispatch(
            &request.to,
            email_templates::RESULTS_SUBJECT.to_string(),
            html,
            EmailType::Results,
        )
        .await
    }

    pub async fn send_welcome(&self, request: WelcomeEmailRequest) -> AppResult<EmailDispatch> {
        request.validate()?;

        let html = email_templates::welcome_html(
            &request.name,
            request.role,
            request.company_name.as_deref(),
            &self.platform_name,
        );

        self.dispatch(
            &request.to,
            email_templates::WELCOME_SUBJECT.to_string(),
            html,
            EmailType::Welcome,
        )
        .await
    }

    async fn dispatch(
        &self,
        to: &str,
        subject: String,
        html: String,
        email_type: EmailType,
    ) -> AppResult<EmailDispatch> {
        let email = OutgoingEmail {
            from: self.from.clone(),
            to: vec![to.to_string()],
            subject: subject.clone(),
            html,
        };

        match self.sender.send(email).await {
            Ok(id) => {
                log::info!("Sent {:?} email to {} ({})", email_type, to, id);
                self.record(to, &subject, email_type, EmailStatus::Sent, json!({ "resend_id": id }))
                    .await;
                Ok(EmailDispatch::sent(id))
            }
            Err(err) => {
                log::error!("Failed to send {:?} email to {}: {}", email_type, to, err);
                self.record(
                    to,
                    &subject,
                    email_type,
                    EmailStatus::Failed,
                    json!({ "error": err.to_string() }),
                )
                .await;
                Err(err)
            }
        }
    }

    /// A log write failure must not change the outcome of the send itself.
    async fn record(
        &self,
        to: &str,
        subject: &str,
        email_type: EmailType,
        status: EmailStatus,
        metadata: serde_json::Value,
    ) {
        let entry = EmailLog::new(to, &self.from, subject, email_type, status, Some(metadata));
        if let Err(err) = self.logs.create(entry).await {
            log::error!("Failed to record email log for {}: {}", to, err);
        }
    }

    pub async fn history(&self, to: &str) -> AppResult<Vec<EmailLog>> {
        self.logs.list_for_recipient(to).await
    }
}
