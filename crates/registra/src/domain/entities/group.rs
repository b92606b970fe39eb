//! Group - student group within a department

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DepartmentId, GroupId};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub department_id: DepartmentId,
}

impl Group {
    pub fn new(name: impl Into<String>, department_id: DepartmentId) -> Self {
        Self {
            id: GroupId::UNSET,
            name: name.into(),
            department_id,
        }
    }
}

impl Record for Group {
    type Id = GroupId;
    const KIND: &'static str = "group";

    fn id(&self) -> GroupId {
        self.id
    }

    fn assign_id(&mut self, id: GroupId) {
        self.id = id;
    }
}
