//! Faculty Application Service

use std::sync::Arc;

use async_trait::async_trait;

use registra::{Faculty, FacultyRepository};

use super::lifecycle::LifecycleService;

/// Application service for Faculty operations
pub struct FacultyService<R: FacultyRepository> {
    repo: Arc<R>,
}

impl<R: FacultyRepository> FacultyService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: FacultyRepository> LifecycleService for FacultyService<R> {
    type Entity = Faculty;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }
}
