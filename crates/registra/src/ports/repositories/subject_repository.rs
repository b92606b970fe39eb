//! Subject Repository Port

use async_trait::async_trait;

use crate::domain::{DomainError, PersonId, Subject};

use super::Crud;

/// Repository interface for Subject entities
#[async_trait]
pub trait SubjectRepository: Crud<Subject> {
    /// All subjects a teacher teaches.
    async fn find_by_teacher(&self, teacher_id: PersonId) -> Result<Vec<Subject>, DomainError>;
}
