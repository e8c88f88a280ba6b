use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{AddStudentRequest, CreateGroupRequest, GroupListParams, UpdateGroupRequest},
        response::MessageResponse,
    },
};

#[get("/api/groups")]
async fn list_groups(
    state: web::Data<Arc<AppState>>,
    query: web::Query<GroupListParams>,
) -> Result<HttpResponse, AppError> {
    let groups = state.group_service.list_groups(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(groups))
}

#[post("/api/groups")]
async fn create_group(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateGroupRequest>,
) -> Result<HttpResponse, AppError> {
    let group = state.group_service.create_group(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(group))
}

#[get("/api/groups/{id}")]
async fn get_group(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let group = state.group_service.get_group(&id).await?;
    Ok(HttpResponse::Ok().json(group))
}

#[put("/api/groups/{id}")]
async fn update_group(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<UpdateGroupRequest>,
) -> Result<HttpResponse, AppError> {
    let group = state
        .group_service
        .update_group(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(group))
}

#[delete("/api/groups/{id}")]
async fn delete_group(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.group_service.delete_group(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Group '{}' deleted", id))))
}

#[get("/api/groups/{id}/students")]
async fn group_students(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let students = state.group_service.group_students(&id).await?;
    Ok(HttpResponse::Ok().json(students))
}

#[post("/api/groups/{id}/students")]
async fn add_student(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<AddStudentRequest>,
) -> Result<HttpResponse, AppError> {
    let member = state
        .group_service
        .add_student(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(member))
}

#[delete("/api/groups/{id}/students/{student_id}")]
async fn remove_student(
    state: web::Data<Arc<AppState>>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (group_id, student_id) = path.into_inner();
    state
        .group_service
        .remove_student(&group_id, &student_id)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Student '{}' removed from group '{}'",
        student_id, group_id
    ))))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_groups)
        .service(create_group)
        .service(get_group)
        .service(update_group)
        .service(delete_group)
        .service(group_students)
        .service(add_student)
        .service(remove_student);
}
