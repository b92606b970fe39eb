//! LectureRoom - physical room lectures are scheduled into

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LectureRoomId;

use super::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LectureRoom {
    pub id: LectureRoomId,
    pub number: i32,
    pub capacity: i32,
}

impl LectureRoom {
    pub fn new(number: i32, capacity: i32) -> Self {
        Self {
            id: LectureRoomId::UNSET,
            number,
            capacity,
        }
    }
}

impl Record for LectureRoom {
    type Id = LectureRoomId;
    const KIND: &'static str = "lecture room";

    fn id(&self) -> LectureRoomId {
        self.id
    }

    fn assign_id(&mut self, id: LectureRoomId) {
        self.id = id;
    }
}
