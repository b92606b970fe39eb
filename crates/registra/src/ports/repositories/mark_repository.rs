//! Mark Repository Port

use async_trait::async_trait;

use crate::domain::{DomainError, Mark, MarkId, MarkValue, PersonId, SubjectId};

use super::Crud;

/// Repository interface for Mark entities
#[async_trait]
pub trait MarkRepository: Crud<Mark> {
    /// Whether a stored mark other than `exclude` already carries the same
    /// value for the same student and subject.
    async fn exists_same_mark(
        &self,
        value: MarkValue,
        student_id: PersonId,
        subject_id: SubjectId,
        exclude: Option<MarkId>,
    ) -> Result<bool, DomainError>;

    async fn find_by_student(&self, student_id: PersonId) -> Result<Vec<Mark>, DomainError>;

    async fn find_by_subject(&self, subject_id: SubjectId) -> Result<Vec<Mark>, DomainError>;
}
