//! Entities
//!
//! Core domain models. Entities are plain data aggregates; all consistency
//! rules live in the application layer.

use std::fmt;
use std::hash::Hash;

mod address;
mod department;
mod duration;
mod employee;
mod faculty;
mod group;
mod lecture;
mod lecture_room;
mod mark;
mod person;
mod student;
mod subject;
mod teacher;

pub use address::Address;
pub use department::Department;
pub use duration::Duration;
pub use employee::Employee;
pub use faculty::Faculty;
pub use group::Group;
pub use lecture::Lecture;
pub use lecture_room::LectureRoom;
pub use mark::Mark;
pub use person::{HasPerson, Person};
pub use student::Student;
pub use subject::Subject;
pub use teacher::Teacher;

/// Implemented by every stored entity: a typed id plus the label used in
/// error messages.
pub trait Record: Send + Sync + 'static {
    type Id: Copy + Eq + Hash + fmt::Display + Send + Sync + 'static;

    /// Singular label, e.g. `"faculty"`.
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    /// Stamp a storage-assigned or caller-supplied id onto the record.
    fn assign_id(&mut self, id: Self::Id);
}
