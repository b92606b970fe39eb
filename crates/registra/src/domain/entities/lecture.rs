//! Lecture - a scheduled class

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    DurationId, GroupId, LectureId, LectureRoomId, PersonId, SubjectId,
};

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: LectureId,
    pub date: NaiveDate,
    pub duration_id: DurationId,
    pub room_id: LectureRoomId,
    pub subject_id: SubjectId,
    pub teacher_id: PersonId,
    pub group_ids: Vec<GroupId>,
}

impl Lecture {
    pub fn new(
        date: NaiveDate,
        duration_id: DurationId,
        room_id: LectureRoomId,
        subject_id: SubjectId,
        teacher_id: PersonId,
        group_ids: Vec<GroupId>,
    ) -> Self {
        Self {
            id: LectureId::UNSET,
            date,
            duration_id,
            room_id,
            subject_id,
            teacher_id,
            group_ids,
        }
    }

    /// Double-booking rule: two lectures conflict when they occupy the same
    /// date and duration slot and share the teacher, the room, or at least
    /// one group.
    pub fn conflicts_with(&self, other: &Lecture) -> bool {
        if self.date != other.date || self.duration_id != other.duration_id {
            return false;
        }
        self.teacher_id == other.teacher_id
            || self.room_id == other.room_id
            || self.shares_group_with(other)
    }

    fn shares_group_with(&self, other: &Lecture) -> bool {
        self.group_ids.iter().any(|g| other.group_ids.contains(g))
    }
}

impl Record for Lecture {
    type Id = LectureId;
    const KIND: &'static str = "lecture";

    fn id(&self) -> LectureId {
        self.id
    }

    fn assign_id(&mut self, id: LectureId) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecture(duration: i64, room: i64, teacher: i64, groups: &[i64]) -> Lecture {
        Lecture::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            DurationId(duration),
            LectureRoomId(room),
            SubjectId(1),
            PersonId(teacher),
            groups.iter().map(|g| GroupId(*g)).collect(),
        )
    }

    #[test]
    fn test_same_room_same_slot_conflicts() {
        let a = lecture(1, 101, 5, &[1]);
        let b = lecture(1, 101, 9, &[2]);
        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn test_same_teacher_same_slot_conflicts() {
        let a = lecture(1, 101, 5, &[1]);
        let b = lecture(1, 202, 5, &[2]);
        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn test_shared_group_same_slot_conflicts() {
        let a = lecture(1, 101, 5, &[1, 2]);
        let b = lecture(1, 202, 9, &[2, 3]);
        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn test_disjoint_resources_do_not_conflict() {
        let a = lecture(1, 101, 5, &[1]);
        let b = lecture(1, 202, 9, &[2]);
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn test_different_slot_never_conflicts() {
        let a = lecture(1, 101, 5, &[1]);
        let b = lecture(2, 101, 5, &[1]);
        assert!(!a.conflicts_with(&b));
    }
}
