//! Lecture Application Service
//!
//! Scheduling-conflict detection around lecture storage: a lecture must not
//! double-book a teacher, a room or a group within one date and time slot.

use std::sync::Arc;

use async_trait::async_trait;

use registra::{
    DomainError, DurationId, GroupId, Lecture, LectureId, LectureRepository, LectureRoomId,
    PersonId, SubjectId,
};

use super::lifecycle::{non_empty, LifecycleService};

/// Application service for Lecture operations
pub struct LectureService<R: LectureRepository> {
    repo: Arc<R>,
}

impl<R: LectureRepository> LectureService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn find_by_teacher(&self, teacher_id: PersonId) -> Result<Vec<Lecture>, DomainError> {
        let lectures = self.repo.find_by_teacher(teacher_id).await?;
        non_empty(format!("lectures for teacher {teacher_id}"), lectures)
    }

    pub async fn find_by_room(&self, room_id: LectureRoomId) -> Result<Vec<Lecture>, DomainError> {
        let lectures = self.repo.find_by_room(room_id).await?;
        non_empty(format!("lectures in room {room_id}"), lectures)
    }

    pub async fn find_by_group(&self, group_id: GroupId) -> Result<Vec<Lecture>, DomainError> {
        let lectures = self.repo.find_by_group(group_id).await?;
        non_empty(format!("lectures for group {group_id}"), lectures)
    }

    pub async fn find_by_subject(&self, subject_id: SubjectId) -> Result<Vec<Lecture>, DomainError> {
        let lectures = self.repo.find_by_subject(subject_id).await?;
        non_empty(format!("lectures on subject {subject_id}"), lectures)
    }

    pub async fn find_by_duration(
        &self,
        duration_id: DurationId,
    ) -> Result<Vec<Lecture>, DomainError> {
        let lectures = self.repo.find_by_duration(duration_id).await?;
        non_empty(format!("lectures in slot {duration_id}"), lectures)
    }
}

#[async_trait]
impl<R: LectureRepository> LifecycleService for LectureService<R> {
    type Entity = Lecture;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }

    async fn ensure_no_duplicate(
        &self,
        lecture: &Lecture,
        exclude: Option<LectureId>,
    ) -> Result<(), DomainError> {
        if self.repo.exists_overlapping(lecture, exclude).await? {
            return Err(DomainError::already_exists(format!(
                "lecture on {} in slot {} double-books a teacher, room or group",
                lecture.date, lecture.duration_id
            )));
        }
        Ok(())
    }
}
