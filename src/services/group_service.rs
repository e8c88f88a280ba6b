use std::collections::HashMap;
use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Group, GroupMember, User},
        dto::{
            request::{AddStudentRequest, CreateGroupRequest, GroupListParams, UpdateGroupRequest},
            response::GroupStudent,
        },
    },
    repositories::{GroupRepository, UserRepository},
};

pub struct GroupService {
    groups: Arc<dyn GroupRepository>,
    users: Arc<dyn UserRepository>,
}

impl GroupService {
    pub fn new(groups: Arc<dyn GroupRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { groups, users }
    }

    pub async fn get_group(&self, id: &str) -> AppResult<Group> {
        self.groups
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Group with id '{}' not found", id)))
    }

    pub async fn list_groups(&self, params: GroupListParams) -> AppResult<Vec<Group>> {
        self.groups.list(params.company_id, params.teacher_id).await
    }

    pub async fn create_group(&self, request: CreateGroupRequest) -> AppResult<Group> {
        request.validate()?;

        let group = Group::new(
            &request.name,
            request.level,
            &request.company_id,
            request.teacher_id,
            request.description,
        );
        let group = self.groups.create(group).await?;

        log::info!("Created {} group '{}'", group.level.as_str(), group.id);
        Ok(group)
    }

    pub async fn update_group(&self, id: &str, request: UpdateGroupRequest) -> AppResult<Group> {
        request.validate()?;

        let mut group = self.get_group(id).await?;

        if let Some(name) = request.name {
            group.name = name;
        }
        if let Some(level) = request.level {
            group.level = level;
        }
        if let Some(teacher_id) = request.teacher_id {
            group.teacher_id = Some(teacher_id);
        }
        if let Some(description) = request.description {
            group.description = Some(description);
        }

        self.groups.update(group).await
    }

    pub async fn delete_group(&self, id: &str) -> AppResult<()> {
        self.groups.delete(id).await?;
        log::info!("Deleted group '{}'", id);
        Ok(())
    }

    pub async fn add_student(&self, group_id: &str, request: AddStudentRequest) -> AppResult<GroupMember> {
        self.get_group(group_id).await?;
        self.users.find_by_id(&request.student_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Student with id '{}' not found", request.student_id))
        })?;

        if self
            .groups
            .find_member(group_id, &request.student_id)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "Student '{}' is already in group '{}'",
                request.student_id, group_id
            )));
        }

        let member = self
            .groups
            .add_member(GroupMember::new(group_id, &request.student_id))
            .await?;
        log::info!("Added student '{}' to group '{}'", member.student_id, group_id);
        Ok(member)
    }

    /// Removing a student who is not a member succeeds without change.
    pub async fn remove_student(&self, group_id: &str, student_id: &str) -> AppResult<()> {
        if self.groups.remove_member(group_id, student_id).await? {
            log::info!("Removed student '{}' from group '{}'", student_id, group_id);
        }
        Ok(())
    }

    pub async fn group_students(&self, group_id: &str) -> AppResult<Vec<GroupStudent>> {
        let members = self.groups.list_members(group_id).await?;
        let ids: Vec<String> = members.iter().map(|m| m.student_id.clone()).collect();

        let mut users: HashMap<String, User> = self
            .users
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();

        Ok(members
            .into_iter()
            .filter_map(|member| {
                users.remove(&member.student_id).map(|user| GroupStudent {
                    user,
                    joined_at: member.joined_at,
                })
            })
            .collect())
    }
}
