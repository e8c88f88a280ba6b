use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::request::TrackEventRequest};

#[post("/api/analytics/events")]
async fn track_event(
    state: web::Data<Arc<AppState>>,
    request: web::Json<TrackEventRequest>,
) -> Result<HttpResponse, AppError> {
    let event = state
        .analytics_service
        .track_event(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(event))
}

#[get("/api/analytics/metrics")]
async fn metrics(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let metrics = state.analytics_service.metrics().await?;
    Ok(HttpResponse::Ok().json(metrics))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(track_event).service(metrics);
}
