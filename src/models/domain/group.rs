use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::level::ProficiencyLevel;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub level: ProficiencyLevel,
    pub company_id: String,
    pub teacher_id: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    pub fn new(
        name: &str,
        level: ProficiencyLevel,
        company_id: &str,
        teacher_id: Option<String>,
        description: Option<String>,
    ) -> Self {
        Group {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            level,
            company_id: company_id.to_string(),
            teacher_id,
            description,
            created_at: Utc::now(),
        }
    }
}

/// A student's membership in a learning group.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GroupMember {
    pub id: String,
    pub group_id: String,
    pub student_id: String,
    pub joined_at: DateTime<Utc>,
}

impl GroupMember {
    pub fn new(group_id: &str, student_id: &str) -> Self {
        GroupMember {
            id: Uuid::new_v4().to_string(),
            group_id: group_id.to_string(),
            student_id: student_id.to_string(),
            joined_at: Utc::now(),
        }
    }
}
