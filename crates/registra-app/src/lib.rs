//! Registra Application Layer
//!
//! Entity lifecycle services for the university-records domain and the
//! consistency rules they enforce on top of plain storage: cross-role email
//! uniqueness, the 1:1 person-address merge, lecture double-booking
//! detection and mark duplication prevention.
//!
//! Storage is reached only through the repository ports defined in the
//! `registra` domain crate; `adapters::memory` provides the in-memory
//! backend the integration tests run against.

pub mod adapters;
pub mod application;

// Re-export commonly used types
pub use application::{
    AddressMerge, DepartmentService, DurationService, EmailUniqueness, EmployeeService,
    FacultyService, GroupService, LectureRoomService, LectureService, LifecycleService,
    MarkService, StudentService, SubjectService, TeacherService,
};
