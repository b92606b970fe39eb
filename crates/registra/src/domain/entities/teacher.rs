//! Teacher - employee who additionally teaches subjects

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Degree, PersonId, SubjectId};

use super::{Employee, HasPerson, Person, Record};

/// A teacher wraps an [`Employee`] and identifies by the wrapped person id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub employee: Employee,
    pub degree: Degree,
    pub subject_ids: Vec<SubjectId>,
}

impl Teacher {
    pub fn new(employee: Employee, degree: Degree, subject_ids: Vec<SubjectId>) -> Self {
        Self {
            employee,
            degree,
            subject_ids,
        }
    }

    pub fn teaches(&self, subject_id: SubjectId) -> bool {
        self.subject_ids.contains(&subject_id)
    }
}

impl Record for Teacher {
    type Id = PersonId;
    const KIND: &'static str = "teacher";

    fn id(&self) -> PersonId {
        self.employee.person.id
    }

    fn assign_id(&mut self, id: PersonId) {
        self.employee.person.id = id;
    }
}

impl HasPerson for Teacher {
    fn person(&self) -> &Person {
        &self.employee.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.employee.person
    }
}
