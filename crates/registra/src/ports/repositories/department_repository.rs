//! Department Repository Port

use async_trait::async_trait;

use crate::domain::{Department, DomainError, FacultyId};

use super::Crud;

/// Repository interface for Department entities
#[async_trait]
pub trait DepartmentRepository: Crud<Department> {
    /// All departments of a faculty.
    async fn find_by_faculty(&self, faculty_id: FacultyId)
        -> Result<Vec<Department>, DomainError>;
}
