//! Student Repository Port

use async_trait::async_trait;

use crate::domain::{DomainError, GroupId, Student};

use super::Crud;

/// Repository interface for Student entities
#[async_trait]
pub trait StudentRepository: Crud<Student> {
    /// All students enrolled in a group.
    async fn find_by_group(&self, group_id: GroupId) -> Result<Vec<Student>, DomainError>;
}
