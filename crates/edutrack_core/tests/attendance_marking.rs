use edutrack_core::attendance::catalog::{methods, MARKED_BANNER_TITLE};
use edutrack_core::{AttendanceMarker, AttendanceMethod, MarkError, MarkPhase, MarkTimings};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn mark_cycle_follows_default_timings() {
    let start = Instant::now();
    let mut marker = AttendanceMarker::default();

    marker.mark(start).expect("mark from idle");
    assert_eq!(marker.phase(), MarkPhase::Marking);
    assert!(!marker.is_mark_enabled());

    assert!(marker.poll(start + ms(1999)).is_empty());
    assert_eq!(marker.phase(), MarkPhase::Marking);

    assert_eq!(marker.poll(start + ms(2000)), vec![MarkPhase::Marked]);
    assert!(marker.shows_marked_banner());
    assert!(marker.is_mark_enabled());

    assert!(marker.poll(start + ms(4999)).is_empty());
    assert_eq!(marker.poll(start + ms(5000)), vec![MarkPhase::Idle]);
    assert!(!marker.shows_marked_banner());
    assert_eq!(marker.next_deadline(), None);
}

#[test]
fn every_method_behaves_the_same() {
    for presentation in methods() {
        let start = Instant::now();
        let mut marker = AttendanceMarker::default();
        marker.select_method(presentation.method);

        marker.mark(start).expect("mark from idle");
        assert_eq!(marker.action_label(), presentation.busy_label);

        let entered = marker.poll(start + ms(5000));
        assert_eq!(entered, vec![MarkPhase::Marked, MarkPhase::Idle]);
        assert_eq!(marker.action_label(), presentation.action_label);
    }
}

#[test]
fn marking_twice_is_rejected() {
    let start = Instant::now();
    let mut marker = AttendanceMarker::default();
    marker.mark(start).expect("mark from idle");
    let deadline = marker.next_deadline();

    assert_eq!(marker.mark(start + ms(500)), Err(MarkError::AlreadyMarking));
    assert_eq!(marker.next_deadline(), deadline);
}

#[test]
fn marking_again_from_marked_cancels_the_revert() {
    let start = Instant::now();
    let mut marker = AttendanceMarker::default();
    marker.mark(start).expect("mark from idle");
    marker.poll(start + ms(2000));

    marker.mark(start + ms(3000)).expect("mark from marked");

    assert_eq!(marker.phase(), MarkPhase::Marking);
    // Old revert deadline (5000 ms) must not fire.
    assert!(marker.poll(start + ms(4999)).is_empty());
    assert_eq!(marker.poll(start + ms(5000)), vec![MarkPhase::Marked]);
}

#[test]
fn cancel_pending_stops_the_cycle() {
    let start = Instant::now();
    let mut marker = AttendanceMarker::default();
    marker.mark(start).expect("mark from idle");

    marker.cancel_pending();

    assert!(marker.poll(start + ms(60_000)).is_empty());
    assert_eq!(marker.phase(), MarkPhase::Marking);
    assert_eq!(marker.next_deadline(), None);
}

#[test]
fn switching_method_mid_cycle_only_changes_panel() {
    let start = Instant::now();
    let mut marker = AttendanceMarker::default();
    marker.mark(start).expect("mark from idle");

    marker.select_method(AttendanceMethod::Proximity);

    assert_eq!(marker.phase(), MarkPhase::Marking);
    assert_eq!(marker.action_label(), "Detecting...");
    assert_eq!(marker.poll(start + ms(2000)), vec![MarkPhase::Marked]);
}

#[test]
fn custom_timings_drive_the_deadlines() {
    let start = Instant::now();
    let mut marker = AttendanceMarker::new(MarkTimings {
        marking_delay: ms(10),
        marked_display: ms(20),
    });

    marker.mark(start).expect("mark from idle");
    assert_eq!(marker.next_deadline(), Some(start + ms(10)));
    marker.poll(start + ms(15));
    // Revert is measured from the marked deadline, not from the late poll.
    assert_eq!(marker.next_deadline(), Some(start + ms(30)));
}

#[test]
fn banner_copy_is_stable() {
    assert_eq!(MARKED_BANNER_TITLE, "Attendance Marked Successfully!");
}
