//! Tests for the attachment ledger and size formatting.

use std::collections::HashSet;

use crate::task::domain::{AttachmentId, AttachmentLedger, FileDescriptor, format_size};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn report(name: &str, size: u64) -> FileDescriptor {
    FileDescriptor::new(name, size, "application/pdf")
}

#[rstest]
#[case(0, "0 Bytes")]
#[case(1, "1 Bytes")]
#[case(1023, "1023 Bytes")]
#[case(1024, "1 KB")]
#[case(1536, "1.5 KB")]
#[case(1_048_576, "1 MB")]
#[case(1_073_741_824, "1 GB")]
#[case(5_497_558_138_880, "5120 GB")]
fn format_size_uses_base_1024_units(#[case] bytes: u64, #[case] expected: &str) {
    assert_eq!(format_size(bytes), expected);
}

#[rstest]
fn format_size_rounds_to_two_decimals() {
    // 1234 / 1024 = 1.2050...
    assert_eq!(format_size(1234), "1.21 KB");
}

#[rstest]
fn add_files_preserves_input_order(clock: DefaultClock) {
    let mut ledger = AttachmentLedger::new();

    let added = ledger.add_files(vec![report("a.pdf", 10), report("b.pdf", 20)], &clock);

    assert_eq!(added, 2);
    let names: Vec<&str> = ledger.iter().map(|file| file.name()).collect();
    assert_eq!(names, ["a.pdf", "b.pdf"]);
    assert_eq!(ledger.total_size(), 30);
}

#[rstest]
fn duplicate_files_receive_distinct_identifiers(clock: DefaultClock) {
    let mut ledger = AttachmentLedger::new();

    ledger.add_files(vec![report("same.pdf", 42), report("same.pdf", 42)], &clock);
    ledger.add_files(vec![report("same.pdf", 42)], &clock);

    let ids: HashSet<AttachmentId> = ledger.iter().map(|file| file.id().clone()).collect();
    assert_eq!(ledger.len(), 3);
    assert_eq!(ids.len(), 3);
}

#[rstest]
fn empty_batch_is_a_no_op(clock: DefaultClock) {
    let mut ledger = AttachmentLedger::new();

    assert_eq!(ledger.add_files(Vec::new(), &clock), 0);
    assert!(ledger.is_empty());
}

#[rstest]
fn uploads_record_metadata(clock: DefaultClock) {
    let mut ledger = AttachmentLedger::new();
    ledger.add_files(vec![FileDescriptor::new("notes.md", 1536, "text/markdown")], &clock);

    let attachment = ledger.iter().next().expect("one attachment");
    assert_eq!(attachment.mime_type(), "text/markdown");
    assert_eq!(attachment.display_size(), "1.5 KB");
    assert!(attachment.uploaded_at().ends_with(" UTC"));
}

#[rstest]
fn remove_file_is_idempotent(clock: DefaultClock) {
    let mut ledger = AttachmentLedger::new();
    ledger.add_files(vec![report("keep.pdf", 1), report("drop.pdf", 2)], &clock);
    let drop_id = ledger
        .iter()
        .find(|file| file.name() == "drop.pdf")
        .map(|file| file.id().clone())
        .expect("drop.pdf was added");

    assert!(ledger.remove_file(&drop_id));
    assert!(!ledger.remove_file(&drop_id));
    assert!(ledger.get(&drop_id).is_none());
    assert_eq!(ledger.len(), 1);
}

#[rstest]
fn removing_unknown_identifier_changes_nothing(clock: DefaultClock) {
    let mut ledger = AttachmentLedger::new();
    ledger.add_files(vec![report("keep.pdf", 1)], &clock);
    let before = ledger.clone();

    assert!(!ledger.remove_file(&AttachmentId::new()));
    assert_eq!(ledger, before);
}

#[rstest]
fn attachments_use_the_wire_field_names(clock: DefaultClock) {
    let mut ledger = AttachmentLedger::new();
    ledger.add_files(vec![report("proof.pdf", 7)], &clock);

    let json = serde_json::to_value(&ledger).expect("serializes");
    let first = json.get(0).expect("one entry");
    assert_eq!(first.get("type").and_then(|v| v.as_str()), Some("application/pdf"));
    assert!(first.get("uploadedAt").is_some());
}
