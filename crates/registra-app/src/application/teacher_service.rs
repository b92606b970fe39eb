//! Teacher Application Service
//!
//! A teacher wraps an employee; the person rules run against the wrapped
//! identity.

use std::sync::Arc;

use async_trait::async_trait;

use registra::{DomainError, HasPerson, PersonId, SubjectId, Teacher, TeacherRepository};

use super::lifecycle::{non_empty, LifecycleService};
use super::rules::{AddressMerge, EmailUniqueness};

/// Application service for Teacher operations
pub struct TeacherService<R: TeacherRepository> {
    repo: Arc<R>,
    emails: EmailUniqueness,
    addresses: AddressMerge,
}

impl<R: TeacherRepository> TeacherService<R> {
    pub fn new(repo: Arc<R>, emails: EmailUniqueness, addresses: AddressMerge) -> Self {
        Self {
            repo,
            emails,
            addresses,
        }
    }

    pub async fn find_by_subject(&self, subject_id: SubjectId) -> Result<Vec<Teacher>, DomainError> {
        let teachers = self.repo.find_by_subject(subject_id).await?;
        non_empty(format!("teachers assigned to subject {subject_id}"), teachers)
    }
}

#[async_trait]
impl<R: TeacherRepository> LifecycleService for TeacherService<R> {
    type Entity = Teacher;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }

    async fn ensure_no_duplicate(
        &self,
        teacher: &Teacher,
        exclude: Option<PersonId>,
    ) -> Result<(), DomainError> {
        self.emails
            .ensure_free(&teacher.person().email, exclude)
            .await
    }

    async fn reconcile(&self, mut teacher: Teacher) -> Result<Teacher, DomainError> {
        self.addresses.apply(teacher.person_mut()).await?;
        Ok(teacher)
    }
}
