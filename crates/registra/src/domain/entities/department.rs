//! Department - division of a faculty

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DepartmentId, FacultyId};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
    pub faculty_id: FacultyId,
}

impl Department {
    pub fn new(name: impl Into<String>, faculty_id: FacultyId) -> Self {
        Self {
            id: DepartmentId::UNSET,
            name: name.into(),
            faculty_id,
        }
    }
}

impl Record for Department {
    type Id = DepartmentId;
    const KIND: &'static str = "department";

    fn id(&self) -> DepartmentId {
        self.id
    }

    fn assign_id(&mut self, id: DepartmentId) {
        self.id = id;
    }
}
