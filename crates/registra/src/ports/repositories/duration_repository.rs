//! Duration Repository Port

use crate::domain::Duration;

use super::Crud;

/// Repository interface for Duration entities
pub trait DurationRepository: Crud<Duration> {}
