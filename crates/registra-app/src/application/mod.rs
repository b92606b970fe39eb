//! Application Layer (Use Cases)
//!
//! One lifecycle service per entity kind, all instantiations of the
//! template in [`lifecycle`], plus the shared consistency rules in
//! [`rules`].

mod department_service;
mod duration_service;
mod employee_service;
mod faculty_service;
mod group_service;
mod lecture_room_service;
mod lecture_service;
mod lifecycle;
mod mark_service;
pub mod rules;
mod student_service;
mod subject_service;
mod teacher_service;

pub use department_service::DepartmentService;
pub use duration_service::DurationService;
pub use employee_service::EmployeeService;
pub use faculty_service::FacultyService;
pub use group_service::GroupService;
pub use lecture_room_service::LectureRoomService;
pub use lecture_service::LectureService;
pub use lifecycle::LifecycleService;
pub use mark_service::MarkService;
pub use rules::{AddressMerge, EmailUniqueness};
pub use student_service::StudentService;
pub use subject_service::SubjectService;
pub use teacher_service::TeacherService;
