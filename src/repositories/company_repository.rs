use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Company,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, company: Company) -> AppResult<Company>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Company>>;
    async fn list(&self, admin_id: Option<String>) -> AppResult<Vec<Company>>;
    async fn update(&self, company: Company) -> AppResult<Company>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoCompanyRepository {
    collection: Collection<Company>,
}

impl MongoCompanyRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("companies");
        Self { collection }
    }
}

#[async_trait]
impl CompanyRepository for MongoCompanyRepository {
    async fn create(&self, company: Company) -> AppResult<Company> {
        self.collection.insert_one(&company).await?;
        Ok(company)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Company>> {
        let company = self.collection.find_one(doc! { "id": id }).await?;
        Ok(company)
    }

    async fn list(&self, admin_id: Option<String>) -> AppResult<Vec<Company>> {
        let mut filter = Document::new();
        if let Some(admin_id) = admin_id {
            filter.insert("admin_id", admin_id);
        }

        let companies = self
            .collection
            .find(filter)
            .sort(doc! { "name": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(companies)
    }

    async fn update(&self, company: Company) -> AppResult<Company> {
        let result = self
            .collection
            .replace_one(doc! { "id": company.id.as_str() }, &company)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("Company '{}' not found", company.id)));
        }

        Ok(company)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Company '{}' not found", id)));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).name("id_unique".to_string()).build())
            .build();

        let admin_index = IndexModel::builder()
            .keys(doc! { "admin_id": 1 })
            .options(IndexOptions::builder().name("admin_id".to_string()).build())
            .build();

        self.collection.create_indexes(vec![id_index, admin_index]).await?;
        log::info!("Ensured indexes for companies collection");

        Ok(())
    }
}
