//! Repository Ports
//!
//! Abstract interfaces for data persistence operations, one per entity kind,
//! plus the person directory and address lookups used by the consistency
//! rules.

mod address_repository;
mod crud;
mod department_repository;
mod duration_repository;
mod employee_repository;
mod faculty_repository;
mod group_repository;
mod lecture_repository;
mod lecture_room_repository;
mod mark_repository;
mod person_directory;
mod student_repository;
mod subject_repository;
mod teacher_repository;

pub use address_repository::AddressRepository;
pub use crud::Crud;
pub use department_repository::DepartmentRepository;
pub use duration_repository::DurationRepository;
pub use employee_repository::EmployeeRepository;
pub use faculty_repository::FacultyRepository;
pub use group_repository::GroupRepository;
pub use lecture_repository::LectureRepository;
pub use lecture_room_repository::LectureRoomRepository;
pub use mark_repository::MarkRepository;
pub use person_directory::{PersonDirectory, PersonRef, PersonRole};
pub use student_repository::StudentRepository;
pub use subject_repository::SubjectRepository;
pub use teacher_repository::TeacherRepository;
