//! Group Application Service

use std::sync::Arc;

use async_trait::async_trait;

use registra::{DepartmentId, DomainError, Group, GroupRepository};

use super::lifecycle::{non_empty, LifecycleService};

/// Application service for Group operations
pub struct GroupService<R: GroupRepository> {
    repo: Arc<R>,
}

impl<R: GroupRepository> GroupService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<Group>, DomainError> {
        let groups = self.repo.find_by_department(department_id).await?;
        non_empty(format!("groups in department {department_id}"), groups)
    }
}

#[async_trait]
impl<R: GroupRepository> LifecycleService for GroupService<R> {
    type Entity = Group;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }
}
