//! Typed entity identifiers.
//!
//! Ids are assigned by the persistence layer; `0` marks a record that has
//! not been stored yet. Student, Employee and Teacher all identify by
//! [`PersonId`], drawn from one sequence shared across the roles.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Id of a record that has not been persisted yet.
            pub const UNSET: Self = Self(0);

            pub fn is_unset(self) -> bool {
                self.0 == 0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(FacultyId);
entity_id!(DepartmentId);
entity_id!(GroupId);
entity_id!(SubjectId);
entity_id!(LectureRoomId);
entity_id!(DurationId);
entity_id!(
    /// Identity shared by every person role (student, employee, teacher).
    PersonId
);
entity_id!(AddressId);
entity_id!(LectureId);
entity_id!(MarkId);
