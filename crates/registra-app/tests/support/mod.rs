//! Shared fixtures for the service tests.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use chrono::NaiveDate;

use registra::{
    Address, Degree, DepartmentId, DurationId, Employee, Gender, GroupId, Lecture, LectureRoomId,
    Person, PersonId, Student, SubjectId, Teacher,
};
use registra_app::adapters::memory::MemoryStore;
use registra_app::application::{
    AddressMerge, DepartmentService, DurationService, EmailUniqueness, EmployeeService,
    FacultyService, GroupService, LectureRoomService, LectureService, MarkService, StudentService,
    SubjectService, TeacherService,
};

pub fn store() -> Arc<MemoryStore> {
    init_tracing();
    Arc::new(MemoryStore::new())
}

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// Services

pub fn faculty_service(store: &Arc<MemoryStore>) -> FacultyService<MemoryStore> {
    FacultyService::new(store.clone())
}

pub fn department_service(store: &Arc<MemoryStore>) -> DepartmentService<MemoryStore> {
    DepartmentService::new(store.clone())
}

pub fn group_service(store: &Arc<MemoryStore>) -> GroupService<MemoryStore> {
    GroupService::new(store.clone())
}

pub fn subject_service(store: &Arc<MemoryStore>) -> SubjectService<MemoryStore> {
    SubjectService::new(store.clone())
}

pub fn lecture_room_service(store: &Arc<MemoryStore>) -> LectureRoomService<MemoryStore> {
    LectureRoomService::new(store.clone())
}

pub fn duration_service(store: &Arc<MemoryStore>) -> DurationService<MemoryStore> {
    DurationService::new(store.clone())
}

pub fn student_service(store: &Arc<MemoryStore>) -> StudentService<MemoryStore> {
    StudentService::new(
        store.clone(),
        EmailUniqueness::new(store.clone()),
        AddressMerge::new(store.clone()),
    )
}

pub fn employee_service(store: &Arc<MemoryStore>) -> EmployeeService<MemoryStore> {
    EmployeeService::new(
        store.clone(),
        EmailUniqueness::new(store.clone()),
        AddressMerge::new(store.clone()),
    )
}

pub fn teacher_service(store: &Arc<MemoryStore>) -> TeacherService<MemoryStore> {
    TeacherService::new(
        store.clone(),
        EmailUniqueness::new(store.clone()),
        AddressMerge::new(store.clone()),
    )
}

pub fn lecture_service(store: &Arc<MemoryStore>) -> LectureService<MemoryStore> {
    LectureService::new(store.clone())
}

pub fn mark_service(store: &Arc<MemoryStore>) -> MarkService<MemoryStore> {
    MarkService::new(store.clone())
}

// Builders

pub fn address(city: &str, street: &str, building: &str) -> Address {
    Address::new(city, street, building, None)
}

pub fn person(email: &str) -> Person {
    Person::new(
        email,
        "opaque-hash",
        "Grace",
        "Hopper",
        Gender::Female,
        address("Arlington", "Wilson Blvd", "1000"),
    )
}

pub fn student(email: &str, group: i64) -> Student {
    Student::new(person(email), GroupId(group))
}

pub fn employee(email: &str, department: i64) -> Employee {
    Employee::new(person(email), DepartmentId(department))
}

pub fn teacher(email: &str, department: i64) -> Teacher {
    Teacher::new(
        employee(email, department),
        Degree::Phd,
        vec![SubjectId(1)],
    )
}

/// A lecture on 2024-05-`day`; resource ids are taken verbatim.
pub fn lecture(day: u32, duration: i64, room: i64, teacher: i64, groups: &[i64]) -> Lecture {
    Lecture::new(
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
        DurationId(duration),
        LectureRoomId(room),
        SubjectId(1),
        PersonId(teacher),
        groups.iter().map(|g| GroupId(*g)).collect(),
    )
}
