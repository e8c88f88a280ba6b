use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::CreateUserRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Student => "student",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub company_id: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(email: &str, name: &str, role: UserRole) -> Self {
        let now = Utc::now();
        User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            company_id: None,
            avatar_url: None,
            created_at: now,
            last_active: Some(now),
        }
    }

    pub fn from_request(request: CreateUserRequest) -> Self {
        let mut user = User::new(&request.email, &request.name, request.role);
        user.company_id = request.company_id;
        user.avatar_url = request.avatar_url;
        user
    }

    pub fn touch(&mut self) {
        self.last_active = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new("john@example.com", "John Doe", UserRole::Student);

        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.role, UserRole::Student);
        assert_eq!(user.last_active, Some(user.created_at));
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn test_user_from_request() {
        let request = CreateUserRequest {
            email: "jane@example.com".to_string(),
            name: "Jane Smith".to_string(),
            role: UserRole::Teacher,
            company_id: Some("company-1".to_string()),
            avatar_url: None,
        };

        let user = User::from_request(request);
        assert_eq!(user.name, "Jane Smith");
        assert_eq!(user.company_id.as_deref(), Some("company-1"));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        assert_eq!(UserRole::Student.as_str(), "student");
    }
}
