//! Person - identity data shared by every concrete role

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Gender, PersonId};

use super::Address;

/// Identity record embedded by [`Student`](super::Student),
/// [`Employee`](super::Employee) and, through Employee,
/// [`Teacher`](super::Teacher).
///
/// The email is the authentication identifier and must be unique across all
/// roles, not just within one of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub email: String,
    /// Credential as produced upstream; this layer treats it as opaque.
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub address: Address,
}

impl Person {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: Gender,
        address: Address,
    ) -> Self {
        Self {
            id: PersonId::UNSET,
            email: email.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender,
            address,
        }
    }
}

/// Capability shared by every concrete person role.
///
/// Rules that only need identity data - the email-uniqueness check, the
/// address merge - go through this trait and stay ignorant of which role
/// they are looking at.
pub trait HasPerson {
    fn person(&self) -> &Person;
    fn person_mut(&mut self) -> &mut Person;
}
