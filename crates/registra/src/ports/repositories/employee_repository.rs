//! Employee Repository Port

use async_trait::async_trait;

use crate::domain::{DepartmentId, DomainError, Employee};

use super::Crud;

/// Repository interface for Employee entities
#[async_trait]
pub trait EmployeeRepository: Crud<Employee> {
    /// All employees attached to a department.
    async fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<Employee>, DomainError>;
}
