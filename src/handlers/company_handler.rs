use std::sync::Arc;

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CompanyListParams, CreateCompanyRequest, UpdateCompanyRequest},
        response::MessageResponse,
    },
};

#[get("/api/companies")]
async fn list_companies(
    state: web::Data<Arc<AppState>>,
    query: web::Query<CompanyListParams>,
) -> Result<HttpResponse, AppError> {
    let companies = state
        .company_service
        .list_companies(query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(companies))
}

#[post("/api/companies")]
async fn create_company(
    state: web::Data<Arc<AppState>>,
    request: web::Json<CreateCompanyRequest>,
) -> Result<HttpResponse, AppError> {
    let company = state
        .company_service
        .create_company(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(company))
}

#[get("/api/companies/{id}")]
async fn get_company(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let company = state.company_service.get_company(&id).await?;
    Ok(HttpResponse::Ok().json(company))
}

#[put("/api/companies/{id}")]
async fn update_company(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<UpdateCompanyRequest>,
) -> Result<HttpResponse, AppError> {
    let company = state
        .company_service
        .update_company(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(company))
}

#[delete("/api/companies/{id}")]
async fn delete_company(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.company_service.delete_company(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("Company '{}' deleted", id))))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_companies)
        .service(create_company)
        .service(get_company)
        .service(update_company)
        .service(delete_company);
}
