//! Lecture double-booking detection.

mod support;

use registra::{LectureId, SubjectId};
use registra_app::LifecycleService;

use support::*;

#[tokio::test]
async fn test_room_conflict_rejected_despite_different_teacher_and_groups() {
    let store = store();
    let lectures = lecture_service(&store);

    lectures.add(lecture(1, 1, 101, 5, &[1])).await.unwrap();

    let err = lectures
        .add(lecture(1, 1, 101, 9, &[2]))
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_teacher_conflict_rejected() {
    let store = store();
    let lectures = lecture_service(&store);

    lectures.add(lecture(1, 1, 101, 5, &[1])).await.unwrap();

    let err = lectures
        .add(lecture(1, 1, 202, 5, &[2]))
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_group_overlap_conflict_rejected() {
    let store = store();
    let lectures = lecture_service(&store);

    lectures.add(lecture(1, 1, 101, 5, &[1, 2])).await.unwrap();

    let err = lectures
        .add(lecture(1, 1, 202, 9, &[2, 3]))
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_disjoint_lectures_share_a_slot() {
    let store = store();
    let lectures = lecture_service(&store);

    lectures.add(lecture(1, 1, 101, 5, &[1])).await.unwrap();
    lectures.add(lecture(1, 1, 202, 9, &[2])).await.unwrap();

    assert_eq!(lectures.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_other_duration_does_not_conflict() {
    let store = store();
    let lectures = lecture_service(&store);

    lectures.add(lecture(1, 1, 101, 5, &[1])).await.unwrap();
    lectures.add(lecture(1, 2, 101, 5, &[1])).await.unwrap();
}

#[tokio::test]
async fn test_other_date_does_not_conflict() {
    let store = store();
    let lectures = lecture_service(&store);

    lectures.add(lecture(1, 1, 101, 5, &[1])).await.unwrap();
    lectures.add(lecture(2, 1, 101, 5, &[1])).await.unwrap();
}

#[tokio::test]
async fn test_update_does_not_conflict_with_itself() {
    let store = store();
    let lectures = lecture_service(&store);

    let saved = lectures.add(lecture(1, 1, 101, 5, &[1])).await.unwrap();

    // same slot and resources, different subject: only the stored record
    // itself matches, which is not a conflict
    let mut payload = lecture(1, 1, 101, 5, &[1]);
    payload.subject_id = SubjectId(2);
    let updated = lectures.update(saved.id, payload).await.unwrap();
    assert_eq!(updated.subject_id, SubjectId(2));
}

#[tokio::test]
async fn test_update_onto_occupied_slot_conflicts() {
    let store = store();
    let lectures = lecture_service(&store);

    lectures.add(lecture(1, 1, 101, 5, &[1])).await.unwrap();
    let movable = lectures.add(lecture(1, 2, 101, 5, &[1])).await.unwrap();

    let err = lectures
        .update(movable.id, lecture(1, 1, 101, 5, &[1]))
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_update_missing_lecture_is_not_found_even_when_conflicting() {
    let store = store();
    let lectures = lecture_service(&store);

    lectures.add(lecture(1, 1, 101, 5, &[1])).await.unwrap();

    let err = lectures
        .update(LectureId(999), lecture(1, 1, 101, 5, &[1]))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_filters_cover_every_scheduling_dimension() {
    let store = store();
    let lectures = lecture_service(&store);

    let saved = lectures.add(lecture(1, 1, 101, 5, &[1, 2])).await.unwrap();

    assert_eq!(
        lectures.find_by_teacher(saved.teacher_id).await.unwrap(),
        vec![saved.clone()]
    );
    assert_eq!(
        lectures.find_by_room(saved.room_id).await.unwrap(),
        vec![saved.clone()]
    );
    assert_eq!(
        lectures.find_by_group(saved.group_ids[0]).await.unwrap(),
        vec![saved.clone()]
    );
    assert_eq!(
        lectures.find_by_subject(saved.subject_id).await.unwrap(),
        vec![saved.clone()]
    );
    assert_eq!(
        lectures.find_by_duration(saved.duration_id).await.unwrap(),
        vec![saved]
    );
}
