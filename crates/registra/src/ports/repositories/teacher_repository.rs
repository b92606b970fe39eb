//! Teacher Repository Port

use async_trait::async_trait;

use crate::domain::{DomainError, SubjectId, Teacher};

use super::Crud;

/// Repository interface for Teacher entities
#[async_trait]
pub trait TeacherRepository: Crud<Teacher> {
    /// All teachers assigned to a subject.
    async fn find_by_subject(&self, subject_id: SubjectId) -> Result<Vec<Teacher>, DomainError>;
}
