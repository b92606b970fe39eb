//! LectureRoom Application Service

use std::sync::Arc;

use async_trait::async_trait;

use registra::{LectureRoom, LectureRoomRepository};

use super::lifecycle::LifecycleService;

/// Application service for LectureRoom operations
pub struct LectureRoomService<R: LectureRoomRepository> {
    repo: Arc<R>,
}

impl<R: LectureRoomRepository> LectureRoomService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: LectureRoomRepository> LifecycleService for LectureRoomService<R> {
    type Entity = LectureRoom;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }
}
