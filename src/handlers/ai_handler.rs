use std::sync::Arc;

use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateQuestionsRequest, GenerateQuizRequest},
};

#[post("/api/ai/questions")]
async fn generate_questions(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateQuestionsRequest>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .content_service
        .generate_questions(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(questions))
}

#[post("/api/ai/quiz")]
async fn generate_quiz(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .content_service
        .generate_quiz(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_questions).service(generate_quiz);
}
