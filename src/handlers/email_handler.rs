use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{
        EmailHistoryParams, TestInvitationEmailRequest, TestResultsEmailRequest,
        WelcomeEmailRequest,
    },
};

#[post("/api/emails/test-invitation")]
async fn send_test_invitation(
    state: web::Data<Arc<AppState>>,
    request: web::Json<TestInvitationEmailRequest>,
) -> Result<HttpResponse, AppError> {
    let dispatch = state
        .email_service
        .send_test_invitation(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(dispatch))
}

#[post("/api/emails/test-results")]
async fn send_test_results(
    state: web::Data<Arc<AppState>>,
    request: web::Json<TestResultsEmailRequest>,
) -> Result<HttpResponse, AppError> {
    let dispatch = state
        .email_service
        .send_test_results(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(dispatch))
}

#[post("/api/emails/welcome")]
async fn send_welcome(
    state: web::Data<Arc<AppState>>,
    request: web::Json<WelcomeEmailRequest>,
) -> Result<HttpResponse, AppError> {
    let dispatch = state
        .email_service
        .send_welcome(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(dispatch))
}

#[get("/api/emails")]
async fn email_history(
    state: web::Data<Arc<AppState>>,
    query: web::Query<EmailHistoryParams>,
) -> Result<HttpResponse, AppError> {
    let logs = state.email_service.history(&query.to).await?;
    Ok(HttpResponse::Ok().json(logs))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(send_test_invitation)
        .service(send_test_results)
        .service(send_welcome)
        .service(email_history);
}
