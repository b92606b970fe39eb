//! Employee - person attached to a department

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DepartmentId, PersonId};

use super::{HasPerson, Person, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub person: Person,
    pub department_id: DepartmentId,
}

impl Employee {
    pub fn new(person: Person, department_id: DepartmentId) -> Self {
        Self {
            person,
            department_id,
        }
    }
}

impl Record for Employee {
    type Id = PersonId;
    const KIND: &'static str = "employee";

    fn id(&self) -> PersonId {
        self.person.id
    }

    fn assign_id(&mut self, id: PersonId) {
        self.person.id = id;
    }
}

impl HasPerson for Employee {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
