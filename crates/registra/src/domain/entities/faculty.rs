//! Faculty - top-level academic division

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FacultyId;

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: FacultyId,
    pub name: String,
}

impl Faculty {
    /// Create a faculty that has not been persisted yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FacultyId::UNSET,
            name: name.into(),
        }
    }
}

impl Record for Faculty {
    type Id = FacultyId;
    const KIND: &'static str = "faculty";

    fn id(&self) -> FacultyId {
        self.id
    }

    fn assign_id(&mut self, id: FacultyId) {
        self.id = id;
    }
}
