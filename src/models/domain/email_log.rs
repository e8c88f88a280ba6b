use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailType {
    TestInvitation,
    Results,
    Reminder,
    Welcome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailStatus {
    Sent,
    Delivered,
    Failed,
}

/// Audit record of an outgoing email.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EmailLog {
    pub id: String,
    pub to: String,
    pub from: String,
    pub subject: String,
    pub email_type: EmailType,
    pub sent_at: DateTime<Utc>,
    pub status: EmailStatus,
    pub metadata: Option<serde_json::Value>,
}

impl EmailLog {
    pub fn new(
        to: &str,
        from: &str,
        subject: &str,
        email_type: EmailType,
        status: EmailStatus,
        metadata: Option<serde_json::Value>,
    ) -> Self {
        EmailLog {
            id: Uuid::new_v4().to_string(),
            to: to.to_string(),
            from: from.to_string(),
            subject: subject.to_string(),
            email_type,
            sent_at: Utc::now(),
            status,
            metadata,
        }
    }
}
