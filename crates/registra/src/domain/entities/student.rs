//! Student - person enrolled in a group

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{GroupId, PersonId};

use super::{HasPerson, Person, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub person: Person,
    pub group_id: GroupId,
}

impl Student {
    pub fn new(person: Person, group_id: GroupId) -> Self {
        Self { person, group_id }
    }
}

impl Record for Student {
    type Id = PersonId;
    const KIND: &'static str = "student";

    fn id(&self) -> PersonId {
        self.person.id
    }

    fn assign_id(&mut self, id: PersonId) {
        self.person.id = id;
    }
}

impl HasPerson for Student {
    fn person(&self) -> &Person {
        &self.person
    }

    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
