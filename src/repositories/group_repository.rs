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
    models::domain::{Group, GroupMember},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create(&self, group: Group) -> AppResult<Group>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Group>>;
    async fn list(&self, company_id: Option<String>, teacher_id: Option<String>) -> AppResult<Vec<Group>>;
    async fn update(&self, group: Group) -> AppResult<Group>;
    /// Removes the group and every membership pointing at it.
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn add_member(&self, member: GroupMember) -> AppResult<GroupMember>;
    async fn find_member(&self, group_id: &str, student_id: &str) -> AppResult<Option<GroupMember>>;
    /// Returns whether a membership was removed.
    async fn remove_member(&self, group_id: &str, student_id: &str) -> AppResult<bool>;
    async fn list_members(&self, group_id: &str) -> AppResult<Vec<GroupMember>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoGroupRepository {
    groups: Collection<Group>,
    members: Collection<GroupMember>,
}

impl MongoGroupRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            groups: db.get_collection("groups"),
            members: db.get_collection("group_members"),
        }
    }
}

#[async_trait]
impl GroupRepository for MongoGroupRepository {
    async fn create(&self, group: Group) -> AppResult<Group> {
        self.groups.insert_one(&group).await?;
        Ok(group)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Group>> {
        let group = self.groups.find_one(doc! { "id": id }).await?;
        Ok(group)
    }

    async fn list(&self, company_id: Option<String>, teacher_id: Option<String>) -> AppResult<Vec<Group>> {
        let mut filter = Document::new();
        if let Some(company_id) = company_id {
            filter.insert("company_id", company_id);
        }
        if let Some(teacher_id) = teacher_id {
            filter.insert("teacher_id", teacher_id);
        }

        let groups = self
            .groups
            .find(filter)
            .sort(doc! { "name": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(groups)
    }

    async fn update(&self, group: Group) -> AppResult<Group> {
        let result = self
            .groups
            .replace_one(doc! { "id": group.id.as_str() }, &group)
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!("Group '{}' not found", group.id)));
        }

        Ok(group)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.groups.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Group '{}' not found", id)));
        }

        let removed = self.members.delete_many(doc! { "group_id": id }).await?;
        log::debug!("Removed {} memberships of group '{}'", removed.deleted_count, id);

        Ok(())
    }

    async fn add_member(&self, member: GroupMember) -> AppResult<GroupMember> {
        self.members.insert_one(&member).await?;
        Ok(member)
    }

    async fn find_member(&self, group_id: &str, student_id: &str) -> AppResult<Option<GroupMember>> {
        let member = self
            .members
            .find_one(doc! { "group_id": group_id, "student_id": student_id })
            .await?;
        Ok(member)
    }

    async fn remove_member(&self, group_id: &str, student_id: &str) -> AppResult<bool> {
        let result = self
            .members
            .delete_one(doc! { "group_id": group_id, "student_id": student_id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn list_members(&self, group_id: &str) -> AppResult<Vec<GroupMember>> {
        let members = self
            .members
            .find(doc! { "group_id": group_id })
            .sort(doc! { "joined_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(members)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).name("id_unique".to_string()).build())
            .build();

        let company_index = IndexModel::builder()
            .keys(doc! { "company_id": 1 })
            .options(IndexOptions::builder().name("company_id".to_string()).build())
            .build();

        let teacher_index = IndexModel::builder()
            .keys(doc! { "teacher_id": 1 })
            .options(IndexOptions::builder().name("teacher_id".to_string()).build())
            .build();

        self.groups
            .create_indexes(vec![id_index, company_index, teacher_index])
            .await?;

        let membership_index = IndexModel::builder()
            .keys(doc! { "group_id": 1, "student_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("group_student_unique".to_string())
                    .build(),
            )
            .build();

        let student_index = IndexModel::builder()
            .keys(doc! { "student_id": 1 })
            .options(IndexOptions::builder().name("student_id".to_string()).build())
            .build();

        self.members
            .create_indexes(vec![membership_index, student_index])
            .await?;

        log::info!("Ensured indexes for groups and group_members collections");
        Ok(())
    }
}
