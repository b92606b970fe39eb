//! Mark Application Service
//!
//! Grade-duplication prevention around mark storage.

use std::sync::Arc;

use async_trait::async_trait;

use registra::{DomainError, Mark, MarkId, MarkRepository, PersonId, SubjectId};

use super::lifecycle::{non_empty, LifecycleService};

/// Application service for Mark operations
pub struct MarkService<R: MarkRepository> {
    repo: Arc<R>,
}

impl<R: MarkRepository> MarkService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn find_by_student(&self, student_id: PersonId) -> Result<Vec<Mark>, DomainError> {
        let marks = self.repo.find_by_student(student_id).await?;
        non_empty(format!("marks for student {student_id}"), marks)
    }

    pub async fn find_by_subject(&self, subject_id: SubjectId) -> Result<Vec<Mark>, DomainError> {
        let marks = self.repo.find_by_subject(subject_id).await?;
        non_empty(format!("marks for subject {subject_id}"), marks)
    }
}

#[async_trait]
impl<R: MarkRepository> LifecycleService for MarkService<R> {
    type Entity = Mark;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }

    async fn ensure_no_duplicate(
        &self,
        mark: &Mark,
        exclude: Option<MarkId>,
    ) -> Result<(), DomainError> {
        let duplicated = self
            .repo
            .exists_same_mark(mark.value, mark.student_id, mark.subject_id, exclude)
            .await?;
        if duplicated {
            return Err(DomainError::already_exists(format!(
                "student {} already has mark {} for subject {}",
                mark.student_id, mark.value, mark.subject_id
            )));
        }
        Ok(())
    }
}
