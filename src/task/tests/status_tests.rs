//! Tests for the task status machine and classification parsing.

use crate::task::domain::{
    AdvanceBlocked, AdvancePlan, Task, TaskCategory, TaskId, TaskPriority, TaskStatus,
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[case(TaskStatus::NotStarted, 0)]
#[case(TaskStatus::InProgress, 50)]
#[case(TaskStatus::PendingReview, 75)]
#[case(TaskStatus::Completed, 100)]
fn progress_follows_status(#[case] status: TaskStatus, #[case] expected: u8) {
    assert_eq!(status.progress(), expected);
}

#[rstest]
#[case("in-progress", 50)]
#[case("Completed", 100)]
#[case("archived", 0)]
#[case("", 0)]
fn progress_for_unknown_values_is_zero(#[case] raw: &str, #[case] expected: u8) {
    assert_eq!(TaskStatus::progress_for(raw), expected);
}

#[rstest]
#[case(" pending-review ", TaskStatus::PendingReview)]
#[case("NOT-STARTED", TaskStatus::NotStarted)]
fn try_from_normalizes_case_and_whitespace(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
fn try_from_rejects_unknown_status() {
    let err = TaskStatus::try_from("archived").expect_err("unknown status is rejected");
    assert_eq!(err.0, "archived");
}

#[rstest]
#[case(None)]
#[case(Some("archived"))]
#[case(Some("   "))]
fn from_external_defaults_to_not_started(#[case] raw: Option<&str>) {
    assert_eq!(TaskStatus::from_external(raw), TaskStatus::NotStarted);
}

#[rstest]
fn plan_advance_moves_forward_until_review() {
    assert_eq!(
        TaskStatus::NotStarted.plan_advance(),
        AdvancePlan::Transition {
            from: TaskStatus::NotStarted,
            to: TaskStatus::InProgress,
        }
    );
    assert_eq!(
        TaskStatus::InProgress.plan_advance(),
        AdvancePlan::Transition {
            from: TaskStatus::InProgress,
            to: TaskStatus::PendingReview,
        }
    );
    assert_eq!(
        TaskStatus::PendingReview.plan_advance(),
        AdvancePlan::Blocked(AdvanceBlocked::AwaitingReview)
    );
    assert_eq!(
        TaskStatus::Completed.plan_advance(),
        AdvancePlan::Blocked(AdvanceBlocked::AlreadyCompleted)
    );
}

#[rstest]
fn only_completed_is_terminal() {
    for status in TaskStatus::ALL {
        assert_eq!(status.can_advance(), status != TaskStatus::Completed);
        assert_eq!(status.is_terminal(), status == TaskStatus::Completed);
    }
}

#[rstest]
fn advancing_pending_review_repeatedly_changes_nothing() {
    let clock = DefaultClock;
    let mut task = Task::new(TaskId::new("t-1").expect("valid id"), "Review me")
        .with_status(TaskStatus::PendingReview);
    let before = task.clone();

    for _ in 0..5 {
        assert_eq!(task.advance(&clock), None);
    }

    assert_eq!(task, before);
}

#[rstest]
fn mentor_completion_is_one_way() {
    let clock = DefaultClock;
    let mut task = Task::new(TaskId::new("t-2").expect("valid id"), "Finish me")
        .with_status(TaskStatus::PendingReview);

    assert!(task.complete_by_mentor(&clock));
    assert_eq!(task.status(), TaskStatus::Completed);
    assert!(task.updated_at().is_some());
    assert!(!task.complete_by_mentor(&clock));
    assert_eq!(task.advance(&clock), None);
    assert_eq!(task.status(), TaskStatus::Completed);
}

#[rstest]
fn status_serializes_as_kebab_case() {
    let json = serde_json::to_string(&TaskStatus::PendingReview).expect("serializes");
    assert_eq!(json, "\"pending-review\"");
}

#[rstest]
#[case(Some("coding"), TaskCategory::Coding)]
#[case(Some("Documentation"), TaskCategory::Documentation)]
#[case(Some("gardening"), TaskCategory::General)]
#[case(None, TaskCategory::General)]
fn category_parsing_is_lenient(#[case] raw: Option<&str>, #[case] expected: TaskCategory) {
    assert_eq!(TaskCategory::from_external(raw), expected);
}

#[rstest]
#[case(Some("urgent"), TaskPriority::Urgent)]
#[case(Some("LOW"), TaskPriority::Low)]
#[case(Some("critical"), TaskPriority::Medium)]
#[case(None, TaskPriority::Medium)]
fn priority_parsing_is_lenient(#[case] raw: Option<&str>, #[case] expected: TaskPriority) {
    assert_eq!(TaskPriority::from_external(raw), expected);
}

#[rstest]
fn priority_labels_are_human_readable() {
    assert_eq!(TaskPriority::High.label(), "High Priority");
    assert_eq!(TaskStatus::PendingReview.label(), "Pending Review");
}
