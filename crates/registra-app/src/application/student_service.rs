//! Student Application Service
//!
//! Orchestrates the email-uniqueness and address-merge rules around plain
//! student storage.

use std::sync::Arc;

use async_trait::async_trait;

use registra::{DomainError, GroupId, HasPerson, PersonId, Student, StudentRepository};

use super::lifecycle::{non_empty, LifecycleService};
use super::rules::{AddressMerge, EmailUniqueness};

/// Application service for Student operations
pub struct StudentService<R: StudentRepository> {
    repo: Arc<R>,
    emails: EmailUniqueness,
    addresses: AddressMerge,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: Arc<R>, emails: EmailUniqueness, addresses: AddressMerge) -> Self {
        Self {
            repo,
            emails,
            addresses,
        }
    }

    pub async fn find_by_group(&self, group_id: GroupId) -> Result<Vec<Student>, DomainError> {
        let students = self.repo.find_by_group(group_id).await?;
        non_empty(format!("students in group {group_id}"), students)
    }
}

#[async_trait]
impl<R: StudentRepository> LifecycleService for StudentService<R> {
    type Entity = Student;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }

    async fn ensure_no_duplicate(
        &self,
        student: &Student,
        exclude: Option<PersonId>,
    ) -> Result<(), DomainError> {
        self.emails
            .ensure_free(&student.person().email, exclude)
            .await
    }

    async fn reconcile(&self, mut student: Student) -> Result<Student, DomainError> {
        self.addresses.apply(student.person_mut()).await?;
        Ok(student)
    }
}
