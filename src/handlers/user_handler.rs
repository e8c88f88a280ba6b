use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CreateUserRequest, EmailLookupParams, UpdateUserRequest, UserListParams},
        response::MessageResponse,
    },
};

#[get("/api/users/by-email")]
async fn get_user_by_email(
    state: web::Data<Arc<AppState>>,
    query: web::Query<EmailLookupParams>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user_by_email(&query.email).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[get("/api/users")]
async fn list_users(
    state: web::Data<Arc<AppState>>,
    query: web::Query<UserListParams>,
) -> Result<HttpResponse, AppError> {
    let users = state.user_service.list_users(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(users))
}

#[post("/api/users")]
async fn create_user(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.create_user(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

#[get("/api/users/{id}")]
async fn get_user(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user(&id).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[put("/api/users/{id}")]
async fn update_user(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .update_user(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

#[post("/api/users/{id}/last-active")]
async fn update_last_active(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.user_service.update_last_active(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/api/users/{id}")]
async fn delete_user(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.user_service.delete_user(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("User '{}' deleted", id))))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_user_by_email)
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(update_last_active)
        .service(delete_user);
}
