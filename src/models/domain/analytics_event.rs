use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const PAGE_VIEW: &str = "page_view";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnalyticsEvent {
    pub id: String,
    pub event_type: String,
    pub user_id: String,
    pub page: String,
    pub duration: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl AnalyticsEvent {
    pub fn new(event_type: &str, user_id: &str, page: &str, duration: Option<f64>) -> Self {
        AnalyticsEvent {
            id: Uuid::new_v4().to_string(),
            event_type: event_type.to_string(),
            user_id: user_id.to_string(),
            page: page.to_string(),
            duration,
            timestamp: Utc::now(),
        }
    }
}
