//! Lifecycle template behavior shared by every entity service.

mod support;

use registra::{Faculty, FacultyId, GroupId, PersonId};
use registra_app::LifecycleService;

use support::*;

#[tokio::test]
async fn test_add_then_find_round_trip() {
    let store = store();
    let faculties = faculty_service(&store);

    let saved = faculties.add(Faculty::new("Mathematics")).await.unwrap();
    assert!(!saved.id.is_unset());

    let found = faculties.find(saved.id).await.unwrap();
    assert_eq!(found, saved);
}

#[tokio::test]
async fn test_update_replaces_stored_record() {
    let store = store();
    let faculties = faculty_service(&store);

    let saved = faculties.add(Faculty::new("Mathematics")).await.unwrap();
    let updated = faculties
        .update(saved.id, Faculty::new("Applied Mathematics"))
        .await
        .unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(
        faculties.find(saved.id).await.unwrap().name,
        "Applied Mathematics"
    );
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let store = store();
    let faculties = faculty_service(&store);

    let err = faculties
        .update(FacultyId(999), Faculty::new("Phantom"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_missing_id_is_not_found() {
    let store = store();
    let faculties = faculty_service(&store);

    let err = faculties.delete(FacultyId(999)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_then_find_is_not_found() {
    let store = store();
    let faculties = faculty_service(&store);

    let saved = faculties.add(Faculty::new("Mathematics")).await.unwrap();
    faculties.delete(saved.id).await.unwrap();

    let err = faculties.find(saved.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_empty_find_all_is_not_found() {
    let store = store();
    let faculties = faculty_service(&store);

    let err = faculties.find_all().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_empty_group_filter_is_not_found() {
    let store = store();
    let students = student_service(&store);

    // no students at all, so group 42 certainly has none
    let err = students.find_by_group(GroupId(42)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_not_found_precedes_conflict_on_update() {
    let store = store();
    let employees = employee_service(&store);

    employees.add(employee("taken@uni.edu", 1)).await.unwrap();

    // payload would also violate the email rule, but the id wins
    let err = employees
        .update(PersonId(999), employee("taken@uni.edu", 1))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_find_all_returns_every_record() {
    let store = store();
    let faculties = faculty_service(&store);

    faculties.add(Faculty::new("Mathematics")).await.unwrap();
    faculties.add(Faculty::new("Physics")).await.unwrap();

    assert_eq!(faculties.find_all().await.unwrap().len(), 2);
}
