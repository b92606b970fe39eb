//! Subject Application Service

use std::sync::Arc;

use async_trait::async_trait;

use registra::{DomainError, PersonId, Subject, SubjectRepository};

use super::lifecycle::{non_empty, LifecycleService};

/// Application service for Subject operations
pub struct SubjectService<R: SubjectRepository> {
    repo: Arc<R>,
}

impl<R: SubjectRepository> SubjectService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn find_by_teacher(
        &self,
        teacher_id: PersonId,
    ) -> Result<Vec<Subject>, DomainError> {
        let subjects = self.repo.find_by_teacher(teacher_id).await?;
        non_empty(format!("subjects taught by teacher {teacher_id}"), subjects)
    }
}

#[async_trait]
impl<R: SubjectRepository> LifecycleService for SubjectService<R> {
    type Entity = Subject;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }
}
