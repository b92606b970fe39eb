//! Subject - taught discipline

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SubjectId;

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SubjectId::UNSET,
            name: name.into(),
        }
    }
}

impl Record for Subject {
    type Id = SubjectId;
    const KIND: &'static str = "subject";

    fn id(&self) -> SubjectId {
        self.id
    }

    fn assign_id(&mut self, id: SubjectId) {
        self.id = id;
    }
}
