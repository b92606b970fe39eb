//! LectureRoom Repository Port

use crate::domain::LectureRoom;

use super::Crud;

/// Repository interface for LectureRoom entities
pub trait LectureRoomRepository: Crud<LectureRoom> {}
