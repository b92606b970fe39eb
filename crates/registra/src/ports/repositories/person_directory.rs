//! Person Directory Port
//!
//! Indexed email lookup across every person role. The email is the
//! authentication identifier, so uniqueness spans students, employees and
//! teachers rather than being scoped to one role.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, PersonId};

/// Role a person record is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonRole {
    Student,
    Employee,
    Teacher,
}

impl std::fmt::Display for PersonRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonRole::Student => write!(f, "student"),
            PersonRole::Employee => write!(f, "employee"),
            PersonRole::Teacher => write!(f, "teacher"),
        }
    }
}

/// Minimal view of a stored person, enough for the email-uniqueness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonRef {
    pub id: PersonId,
    pub role: PersonRole,
}

/// Lookup across all person roles by email.
#[async_trait]
pub trait PersonDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<PersonRef>, DomainError>;
}
