//! Email uniqueness across person roles and the address merge rule.

mod support;

use registra::Record;
use registra_app::LifecycleService;

use support::*;

#[tokio::test]
async fn test_email_taken_by_student_blocks_employee() {
    let store = store();
    let students = student_service(&store);
    let employees = employee_service(&store);

    students.add(student("a@x.com", 1)).await.unwrap();

    let err = employees.add(employee("a@x.com", 1)).await.unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_email_taken_by_employee_blocks_student() {
    let store = store();
    let students = student_service(&store);
    let employees = employee_service(&store);

    employees.add(employee("b@x.com", 1)).await.unwrap();

    let err = students.add(student("b@x.com", 1)).await.unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_update_keeping_own_email_succeeds() {
    let store = store();
    let students = student_service(&store);

    let saved = students.add(student("a@x.com", 1)).await.unwrap();

    // same email, same person: never a conflict
    let updated = students
        .update(saved.id(), student("a@x.com", 2))
        .await
        .unwrap();
    assert_eq!(updated.group_id.0, 2);
}

#[tokio::test]
async fn test_update_to_foreign_email_conflicts() {
    let store = store();
    let students = student_service(&store);
    let employees = employee_service(&store);

    employees.add(employee("owner@x.com", 1)).await.unwrap();
    let saved = students.add(student("mine@x.com", 1)).await.unwrap();

    let err = students
        .update(saved.id(), student("owner@x.com", 1))
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_teacher_email_checked_against_wrapped_employee() {
    let store = store();
    let students = student_service(&store);
    let teachers = teacher_service(&store);

    students.add(student("a@x.com", 1)).await.unwrap();

    let err = teachers.add(teacher("a@x.com", 1)).await.unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_teacher_update_keeping_own_email_succeeds() {
    let store = store();
    let teachers = teacher_service(&store);

    let saved = teachers.add(teacher("t@x.com", 1)).await.unwrap();

    let updated = teachers
        .update(saved.id(), teacher("t@x.com", 2))
        .await
        .unwrap();
    assert_eq!(updated.employee.department_id.0, 2);
}

#[tokio::test]
async fn test_address_merge_keeps_single_row_with_latest_values() {
    let store = store();
    let students = student_service(&store);

    let saved = students.add(student("a@x.com", 1)).await.unwrap();
    assert_eq!(store.address_rows(), 1);
    let original_row = saved.person.address.id;

    let mut first = student("a@x.com", 1);
    first.person.address = address("Kyiv", "Khreshchatyk", "12");
    students.update(saved.id(), first).await.unwrap();

    let mut second = student("a@x.com", 1);
    second.person.address = address("Kyiv", "Volodymyrska", "60");
    let updated = students.update(saved.id(), second).await.unwrap();

    assert_eq!(store.address_rows(), 1);
    assert_eq!(updated.person.address.id, original_row);
    assert_eq!(updated.person.address.street, "Volodymyrska");
}
