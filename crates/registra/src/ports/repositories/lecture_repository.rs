//! Lecture Repository Port

use async_trait::async_trait;

use crate::domain::{
    DomainError, DurationId, GroupId, Lecture, LectureId, LectureRoomId, PersonId, SubjectId,
};

use super::Crud;

/// Repository interface for Lecture entities
#[async_trait]
pub trait LectureRepository: Crud<Lecture> {
    /// Whether a stored lecture other than `exclude` would be double-booked
    /// by `candidate`: same date and duration slot, and the same teacher,
    /// the same room, or at least one common group
    /// (see [`Lecture::conflicts_with`]).
    async fn exists_overlapping(
        &self,
        candidate: &Lecture,
        exclude: Option<LectureId>,
    ) -> Result<bool, DomainError>;

    async fn find_by_teacher(&self, teacher_id: PersonId) -> Result<Vec<Lecture>, DomainError>;

    async fn find_by_room(&self, room_id: LectureRoomId) -> Result<Vec<Lecture>, DomainError>;

    async fn find_by_group(&self, group_id: GroupId) -> Result<Vec<Lecture>, DomainError>;

    async fn find_by_subject(&self, subject_id: SubjectId) -> Result<Vec<Lecture>, DomainError>;

    async fn find_by_duration(&self, duration_id: DurationId) -> Result<Vec<Lecture>, DomainError>;
}
