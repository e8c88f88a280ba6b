use std::collections::HashSet;
use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::AppResult,
    models::{
        domain::{analytics_event::PAGE_VIEW, AnalyticsEvent},
        dto::{request::TrackEventRequest, response::AnalyticsMetrics},
    },
    repositories::AnalyticsRepository,
};

const METRICS_WINDOW: i64 = 1000;
const RECENT_EVENTS: usize = 10;

pub struct AnalyticsService {
    repository: Arc<dyn AnalyticsRepository>,
}

impl AnalyticsService {
    pub fn new(repository: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn track_event(&self, request: TrackEventRequest) -> AppResult<AnalyticsEvent> {
        request.validate()?;

        let event = AnalyticsEvent::new(
            &request.event_type,
            &request.user_id,
            &request.page,
            request.duration,
        );
        self.repository.create(event).await
    }

    pub async fn metrics(&self) -> AppResult<AnalyticsMetrics> {
        let events = self.repository.recent(METRICS_WINDOW).await?;
        Ok(compute_metrics(events))
    }
}

/// Summarises events that arrive newest first.
fn compute_metrics(events: Vec<AnalyticsEvent>) -> AnalyticsMetrics {
    let total_views = events.iter().filter(|e| e.event_type == PAGE_VIEW).count();
    let unique_visitors = events
        .iter()
        .map(|e| e.user_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let avg_session_duration = if events.is_empty() {
        0
    } else {
        let total: f64 = events.iter().map(|e| e.duration.unwrap_or(0.0)).sum();
        (total / events.len() as f64).round() as i64
    };

    let recent_events = events.into_iter().take(RECENT_EVENTS).collect();

    AnalyticsMetrics {
        total_views,
        unique_visitors,
        avg_session_duration,
        recent_events,
    }
}
