//! Registra Domain Library
//!
//! Core domain types and interfaces for the Registra university-records
//! system.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Faculty, Group, Student, Lecture, ...)
//!   - `value_objects/`: Immutable value types (ids, Gender, Degree, MarkValue)
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces, implemented by storage
//!     backends outside this crate
//!
//! # Usage
//!
//! ```rust,ignore
//! use registra::domain::{Student, Lecture, Mark};
//! use registra::ports::{StudentRepository, LectureRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Address, AddressId, Degree, Department, DepartmentId, DomainError, Duration, DurationId,
    Employee, Faculty, FacultyId, Gender, Group, GroupId, HasPerson, Lecture, LectureId,
    LectureRoom, LectureRoomId, Mark, MarkId, MarkValue, Person, PersonId, Record, Student,
    Subject, SubjectId, Teacher,
};
pub use ports::{
    AddressRepository, Crud, DepartmentRepository, DurationRepository, EmployeeRepository,
    FacultyRepository, GroupRepository, LectureRepository, LectureRoomRepository, MarkRepository,
    PersonDirectory, PersonRef, PersonRole, StudentRepository, SubjectRepository,
    TeacherRepository,
};
