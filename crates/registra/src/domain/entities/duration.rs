//! Duration - named lecture time slot

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DurationId;

use super::Record;

/// A named time interval lectures are scheduled into, e.g. "first period"
/// from 08:30 to 10:05.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Duration {
    pub id: DurationId,
    pub name: String,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
}

impl Duration {
    pub fn new(name: impl Into<String>, starts_at: NaiveTime, ends_at: NaiveTime) -> Self {
        Self {
            id: DurationId::UNSET,
            name: name.into(),
            starts_at,
            ends_at,
        }
    }
}

impl Record for Duration {
    type Id = DurationId;
    const KIND: &'static str = "duration";

    fn id(&self) -> DurationId {
        self.id
    }

    fn assign_id(&mut self, id: DurationId) {
        self.id = id;
    }
}
