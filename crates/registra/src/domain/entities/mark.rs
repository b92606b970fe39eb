//! Mark - grade a student received for a subject

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{MarkId, MarkValue, PersonId, SubjectId};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub id: MarkId,
    pub student_id: PersonId,
    pub subject_id: SubjectId,
    pub value: MarkValue,
    pub noted_at: DateTime<Utc>,
}

impl Mark {
    pub fn new(student_id: PersonId, subject_id: SubjectId, value: MarkValue) -> Self {
        Self {
            id: MarkId::UNSET,
            student_id,
            subject_id,
            value,
            noted_at: Utc::now(),
        }
    }

    /// Duplication rule: same student, same subject, same value. The same
    /// pair may still carry different values.
    pub fn duplicates(&self, other: &Mark) -> bool {
        self.student_id == other.student_id
            && self.subject_id == other.subject_id
            && self.value == other.value
    }
}

impl Record for Mark {
    type Id = MarkId;
    const KIND: &'static str = "mark";

    fn id(&self) -> MarkId {
        self.id
    }

    fn assign_id(&mut self, id: MarkId) {
        self.id = id;
    }
}
