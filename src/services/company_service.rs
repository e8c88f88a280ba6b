use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Company,
        dto::request::{CompanyListParams, CreateCompanyRequest, UpdateCompanyRequest},
    },
    repositories::{CompanyRepository, UserRepository},
};

pub struct CompanyService {
    companies: Arc<dyn CompanyRepository>,
    users: Arc<dyn UserRepository>,
}

impl CompanyService {
    pub fn new(companies: Arc<dyn CompanyRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { companies, users }
    }

    pub async fn get_company(&self, id: &str) -> AppResult<Company> {
        self.companies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company with id '{}' not found", id)))
    }

    pub async fn list_companies(&self, params: CompanyListParams) -> AppResult<Vec<Company>> {
        self.companies.list(params.admin_id).await
    }

    /// Creates the company and links its admin to it.
    pub async fn create_company(&self, request: CreateCompanyRequest) -> AppResult<Company> {
        request.validate()?;

        let mut admin = self
            .users
            .find_by_id(&request.admin_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Admin user with id '{}' not found", request.admin_id))
            })?;

        let company = Company::new(&request.name, &request.admin_id, request.domain, request.logo);
        let company = self.companies.create(company).await?;

        admin.company_id = Some(company.id.clone());
        self.users.update(admin).await?;

        log::info!("Created company '{}' administered by '{}'", company.id, company.admin_id);
        Ok(company)
    }

    pub async fn update_company(&self, id: &str, request: UpdateCompanyRequest) -> AppResult<Company> {
        request.validate()?;

        let mut company = self.get_company(id).await?;

        if let Some(name) = request.name {
            company.name = name;
        }
        if let Some(domain) = request.domain {
            company.domain = Some(domain);
        }
        if let Some(logo) = request.logo {
            company.logo = Some(logo);
        }
        if let Some(settings) = request.settings {
            company.settings = Some(settings);
        }

        self.companies.update(company).await
    }

    pub async fn delete_company(&self, id: &str) -> AppResult<()> {
        self.companies.delete(id).await?;
        log::info!("Deleted company '{}'", id);
        Ok(())
    }
}
