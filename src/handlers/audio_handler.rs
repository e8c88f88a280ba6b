use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateAudioRequest, QuestionAudioRequest},
};

#[post("/api/audio")]
async fn generate_audio(
    state: web::Data<Arc<AppState>>,
    request: web::Json<GenerateAudioRequest>,
) -> Result<HttpResponse, AppError> {
    let audio = state
        .speech_service
        .generate_audio(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(audio))
}

#[post("/api/audio/questions/{id}")]
async fn generate_question_audio(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<QuestionAudioRequest>,
) -> Result<HttpResponse, AppError> {
    let audio = state
        .speech_service
        .generate_question_audio(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(audio))
}

#[get("/api/audio/voices")]
async fn list_voices(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let voices = state.speech_service.list_voices().await?;
    Ok(HttpResponse::Ok().json(voices))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_audio)
        .service(generate_question_audio)
        .service(list_voices);
}
