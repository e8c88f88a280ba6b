use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::{
            request::{CreateUserRequest, UpdateUserRequest, UserListParams},
            response::LastActiveResponse,
        },
    },
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", id)))
    }

    pub async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email '{}' not found", email)))
    }

    pub async fn list_users(&self, params: UserListParams) -> AppResult<Vec<User>> {
        self.repository.list(params.company_id, params.role).await
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        request.validate()?;

        if self.repository.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "User with email '{}' already exists",
                request.email
            )));
        }

        let user = self.repository.create(User::from_request(request)).await?;
        log::info!("Created {} user '{}'", user.role.as_str(), user.id);
        Ok(user)
    }

    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<User> {
        request.validate()?;

        let mut user = self.get_user(id).await?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(avatar_url) = request.avatar_url {
            user.avatar_url = Some(avatar_url);
        }
        if let Some(company_id) = request.company_id {
            user.company_id = Some(company_id);
        }
        user.touch();

        self.repository.update(user).await
    }

    pub async fn update_last_active(&self, id: &str) -> AppResult<LastActiveResponse> {
        let mut user = self.get_user(id).await?;
        user.touch();

        let user = self.repository.update(user).await?;
        Ok(LastActiveResponse {
            user_id: user.id,
            last_active: user.last_active,
        })
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Deleted user '{}'", id);
        Ok(())
    }
}
