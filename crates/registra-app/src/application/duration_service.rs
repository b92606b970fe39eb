//! Duration Application Service

use std::sync::Arc;

use async_trait::async_trait;

use registra::{Duration, DurationRepository};

use super::lifecycle::LifecycleService;

/// Application service for Duration (time slot) operations
pub struct DurationService<R: DurationRepository> {
    repo: Arc<R>,
}

impl<R: DurationRepository> DurationService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: DurationRepository> LifecycleService for DurationService<R> {
    type Entity = Duration;
    type Repo = R;

    fn repo(&self) -> &R {
        &self.repo
    }
}
