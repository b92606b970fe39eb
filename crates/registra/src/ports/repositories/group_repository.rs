//! Group Repository Port

use async_trait::async_trait;

use crate::domain::{DepartmentId, DomainError, Group};

use super::Crud;

/// Repository interface for Group entities
#[async_trait]
pub trait GroupRepository: Crud<Group> {
    /// All groups of a department.
    async fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<Group>, DomainError>;
}
