//! In-memory implementation of the repository ports
//!
//! Reference backend used by the integration tests. State lives in
//! `BTreeMap`s behind a single `RwLock`. One id sequence covers every
//! entity, so person ids stay unique across student/employee/teacher roles;
//! the email rule's self-exclusion relies on that.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use registra::{
    Address, AddressId, AddressRepository, Crud, Department, DepartmentId, DepartmentRepository,
    DomainError, Duration, DurationId, DurationRepository, Employee, EmployeeRepository, Faculty,
    FacultyId, FacultyRepository, Group, GroupId, GroupRepository, HasPerson, Lecture, LectureId,
    LectureRepository, LectureRoom, LectureRoomId, LectureRoomRepository, Mark, MarkId,
    MarkRepository, MarkValue, Person, PersonDirectory, PersonId, PersonRef, PersonRole, Record,
    Student, StudentRepository, Subject, SubjectId, SubjectRepository, Teacher, TeacherRepository,
};

#[derive(Debug, Default)]
struct State {
    next_id: i64,
    faculties: BTreeMap<i64, Faculty>,
    departments: BTreeMap<i64, Department>,
    groups: BTreeMap<i64, Group>,
    subjects: BTreeMap<i64, Subject>,
    rooms: BTreeMap<i64, LectureRoom>,
    durations: BTreeMap<i64, Duration>,
    students: BTreeMap<i64, Student>,
    employees: BTreeMap<i64, Employee>,
    teachers: BTreeMap<i64, Teacher>,
    lectures: BTreeMap<i64, Lecture>,
    marks: BTreeMap<i64, Mark>,
    /// Address rows, keyed by the owning person id.
    addresses: BTreeMap<i64, Address>,
}

impl State {
    fn take_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Assign ids to a person record and upsert its owned address row.
    fn persist_person(&mut self, person: &mut Person) {
        if person.id.is_unset() {
            person.id = PersonId(self.take_id());
        }
        person.address.person_id = person.id;
        if person.address.id.is_unset() {
            person.address.id = AddressId(self.take_id());
        }
        self.addresses.insert(person.id.0, person.address.clone());
    }

    fn person_exists(&self, id: PersonId) -> bool {
        self.students.contains_key(&id.0)
            || self.employees.contains_key(&id.0)
            || self.teachers.contains_key(&id.0)
    }
}

/// In-memory storage backend implementing every repository port.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored address rows. Tests use this to assert the merge
    /// rule keeps the person-address relation 1:1.
    pub fn address_rows(&self) -> usize {
        self.read().addresses.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// CRUD over one plain entity map.
macro_rules! memory_crud {
    ($field:ident, $entity:ty, $id:ty) => {
        #[async_trait]
        impl Crud<$entity> for MemoryStore {
            async fn exists_by_id(&self, id: $id) -> Result<bool, DomainError> {
                Ok(self.read().$field.contains_key(&id.0))
            }

            async fn find_by_id(&self, id: $id) -> Result<Option<$entity>, DomainError> {
                Ok(self.read().$field.get(&id.0).cloned())
            }

            async fn find_all(&self) -> Result<Vec<$entity>, DomainError> {
                Ok(self.read().$field.values().cloned().collect())
            }

            async fn save(&self, mut entity: $entity) -> Result<$entity, DomainError> {
                let mut state = self.write();
                if entity.id().is_unset() {
                    let id = state.take_id();
                    entity.assign_id(<$id>::from(id));
                }
                state.$field.insert(entity.id().0, entity.clone());
                Ok(entity)
            }

            async fn delete_by_id(&self, id: $id) -> Result<(), DomainError> {
                self.write().$field.remove(&id.0);
                Ok(())
            }
        }
    };
}

/// CRUD over one person-role map; saves also persist the owned address row
/// and deletes drop it once no role still holds the id.
macro_rules! memory_person_crud {
    ($field:ident, $entity:ty) => {
        #[async_trait]
        impl Crud<$entity> for MemoryStore {
            async fn exists_by_id(&self, id: PersonId) -> Result<bool, DomainError> {
                Ok(self.read().$field.contains_key(&id.0))
            }

            async fn find_by_id(&self, id: PersonId) -> Result<Option<$entity>, DomainError> {
                Ok(self.read().$field.get(&id.0).cloned())
            }

            async fn find_all(&self) -> Result<Vec<$entity>, DomainError> {
                Ok(self.read().$field.values().cloned().collect())
            }

            async fn save(&self, mut entity: $entity) -> Result<$entity, DomainError> {
                let mut state = self.write();
                state.persist_person(entity.person_mut());
                state.$field.insert(entity.id().0, entity.clone());
                Ok(entity)
            }

            async fn delete_by_id(&self, id: PersonId) -> Result<(), DomainError> {
                let mut state = self.write();
                state.$field.remove(&id.0);
                if !state.person_exists(id) {
                    state.addresses.remove(&id.0);
                }
                Ok(())
            }
        }
    };
}

memory_crud!(faculties, Faculty, FacultyId);
memory_crud!(departments, Department, DepartmentId);
memory_crud!(groups, Group, GroupId);
memory_crud!(subjects, Subject, SubjectId);
memory_crud!(rooms, LectureRoom, LectureRoomId);
memory_crud!(durations, Duration, DurationId);
memory_crud!(lectures, Lecture, LectureId);
memory_crud!(marks, Mark, MarkId);

memory_person_crud!(students, Student);
memory_person_crud!(employees, Employee);
memory_person_crud!(teachers, Teacher);

impl FacultyRepository for MemoryStore {}
impl LectureRoomRepository for MemoryStore {}
impl DurationRepository for MemoryStore {}

#[async_trait]
impl DepartmentRepository for MemoryStore {
    async fn find_by_faculty(
        &self,
        faculty_id: FacultyId,
    ) -> Result<Vec<Department>, DomainError> {
        Ok(self
            .read()
            .departments
            .values()
            .filter(|d| d.faculty_id == faculty_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl GroupRepository for MemoryStore {
    async fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<Group>, DomainError> {
        Ok(self
            .read()
            .groups
            .values()
            .filter(|g| g.department_id == department_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SubjectRepository for MemoryStore {
    async fn find_by_teacher(&self, teacher_id: PersonId) -> Result<Vec<Subject>, DomainError> {
        let state = self.read();
        let Some(teacher) = state.teachers.get(&teacher_id.0) else {
            return Ok(Vec::new());
        };
        Ok(state
            .subjects
            .values()
            .filter(|s| teacher.subject_ids.contains(&s.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StudentRepository for MemoryStore {
    async fn find_by_group(&self, group_id: GroupId) -> Result<Vec<Student>, DomainError> {
        Ok(self
            .read()
            .students
            .values()
            .filter(|s| s.group_id == group_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn find_by_department(
        &self,
        department_id: DepartmentId,
    ) -> Result<Vec<Employee>, DomainError> {
        Ok(self
            .read()
            .employees
            .values()
            .filter(|e| e.department_id == department_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TeacherRepository for MemoryStore {
    async fn find_by_subject(&self, subject_id: SubjectId) -> Result<Vec<Teacher>, DomainError> {
        Ok(self
            .read()
            .teachers
            .values()
            .filter(|t| t.teaches(subject_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl LectureRepository for MemoryStore {
    async fn exists_overlapping(
        &self,
        candidate: &Lecture,
        exclude: Option<LectureId>,
    ) -> Result<bool, DomainError> {
        Ok(self
            .read()
            .lectures
            .values()
            .any(|other| Some(other.id) != exclude && candidate.conflicts_with(other)))
    }

    async fn find_by_teacher(&self, teacher_id: PersonId) -> Result<Vec<Lecture>, DomainError> {
        Ok(self
            .read()
            .lectures
            .values()
            .filter(|l| l.teacher_id == teacher_id)
            .cloned()
            .collect())
    }

    async fn find_by_room(&self, room_id: LectureRoomId) -> Result<Vec<Lecture>, DomainError> {
        Ok(self
            .read()
            .lectures
            .values()
            .filter(|l| l.room_id == room_id)
            .cloned()
            .collect())
    }

    async fn find_by_group(&self, group_id: GroupId) -> Result<Vec<Lecture>, DomainError> {
        Ok(self
            .read()
            .lectures
            .values()
            .filter(|l| l.group_ids.contains(&group_id))
            .cloned()
            .collect())
    }

    async fn find_by_subject(&self, subject_id: SubjectId) -> Result<Vec<Lecture>, DomainError> {
        Ok(self
            .read()
            .lectures
            .values()
            .filter(|l| l.subject_id == subject_id)
            .cloned()
            .collect())
    }

    async fn find_by_duration(&self, duration_id: DurationId) -> Result<Vec<Lecture>, DomainError> {
        Ok(self
            .read()
            .lectures
            .values()
            .filter(|l| l.duration_id == duration_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MarkRepository for MemoryStore {
    async fn exists_same_mark(
        &self,
        value: MarkValue,
        student_id: PersonId,
        subject_id: SubjectId,
        exclude: Option<MarkId>,
    ) -> Result<bool, DomainError> {
        let probe = Mark::new(student_id, subject_id, value);
        Ok(self
            .read()
            .marks
            .values()
            .any(|m| Some(m.id) != exclude && m.duplicates(&probe)))
    }

    async fn find_by_student(&self, student_id: PersonId) -> Result<Vec<Mark>, DomainError> {
        Ok(self
            .read()
            .marks
            .values()
            .filter(|m| m.student_id == student_id)
            .cloned()
            .collect())
    }

    async fn find_by_subject(&self, subject_id: SubjectId) -> Result<Vec<Mark>, DomainError> {
        Ok(self
            .read()
            .marks
            .values()
            .filter(|m| m.subject_id == subject_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PersonDirectory for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<PersonRef>, DomainError> {
        let state = self.read();
        if let Some(s) = state.students.values().find(|s| s.person.email == email) {
            return Ok(Some(PersonRef {
                id: s.person.id,
                role: PersonRole::Student,
            }));
        }
        if let Some(e) = state.employees.values().find(|e| e.person.email == email) {
            return Ok(Some(PersonRef {
                id: e.person.id,
                role: PersonRole::Employee,
            }));
        }
        if let Some(t) = state
            .teachers
            .values()
            .find(|t| t.employee.person.email == email)
        {
            return Ok(Some(PersonRef {
                id: t.employee.person.id,
                role: PersonRole::Teacher,
            }));
        }
        Ok(None)
    }
}

#[async_trait]
impl AddressRepository for MemoryStore {
    async fn find_by_person_id(
        &self,
        person_id: PersonId,
    ) -> Result<Option<Address>, DomainError> {
        Ok(self.read().addresses.get(&person_id.0).cloned())
    }
}
