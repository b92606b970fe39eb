//! Department Application Service

use std::sync::Arc;

use async_trait::async_trait;

use registra::{Department, DepartmentRepository, DomainError, FacultyId};

use super::lifecycle::{non_empty, LifecycleService};

/// Application service for Department operations
pub struct DepartmentService<R: DepartmentRepository> {
    repo: Arc<R>,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn find_by_faculty(
        &self,
        faculty_id: FacultyId,
    ) -> Result<Vec<Department>, DomainError> {
        let departments = self.repo.find_by_faculty(faculty_id).await?;
        non_empty(format!("departments in faculty {faculty_id}"), departments)
    }
}

#[async_trait]
impl<R: DepartmentRepository> LifecycleService for DepartmentService<R> {
    type Entity = Department;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }
}
