//! Employee Application Service

use std::sync::Arc;

use async_trait::async_trait;

use registra::{DepartmentId, DomainError, Employee, EmployeeRepository, HasPerson, PersonId};

use super::lifecycle::{non_empty, LifecycleService};
use super::rules::{AddressMerge, EmailUniqueness};

/// Application service for Employee operations
pub struct EmployeeService<R: EmployeeRepository> {
    repo: Arc<R>,
    emails: EmailUniqueness,
    addresses: AddressMerge,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repo: Arc<R>, emails: EmailUniqueness, addresses: AddressMerge) -> Self {
        Self {
            repo,
            emails,
            addresses,
        }
    }

    pub async fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<Employee>, DomainError> {
        let employees = self.repo.find_by_department(department_id).await?;
        non_empty(format!("employees in department {department_id}"), employees)
    }
}

#[async_trait]
impl<R: EmployeeRepository> LifecycleService for EmployeeService<R> {
    type Entity = Employee;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }

    async fn ensure_no_duplicate(
        &self,
        employee: &Employee,
        exclude: Option<PersonId>,
    ) -> Result<(), DomainError> {
        self.emails
            .ensure_free(&employee.person().email, exclude)
            .await
    }

    async fn reconcile(&self, mut employee: Employee) -> Result<Employee, DomainError> {
        self.addresses.apply(employee.person_mut()).await?;
        Ok(employee)
    }
}
