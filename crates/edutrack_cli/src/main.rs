//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `edutrack_core` linkage without the Flutter shell.
//! - Replay the tasks and attendance walkthroughs with deterministic output.
//!
//! Time is simulated: the attendance replay advances a virtual clock
//! instead of sleeping.

use edutrack_core::{AttendanceMarker, AttendanceMethod, MarkError, TaskBoard};
use std::time::Instant;

fn main() {
    println!("edutrack_core ping={}", edutrack_core::ping());
    println!("edutrack_core version={}", edutrack_core::core_version());
    replay_tasks();
    if let Err(err) = replay_attendance() {
        eprintln!("attendance replay failed: {err}");
        std::process::exit(1);
    }
}

fn replay_tasks() {
    let mut board = TaskBoard::seeded();
    print_board("mount", &board);
    board.toggle_complete(1);
    print_board("toggle 1", &board);
}

fn print_board(step: &str, board: &TaskBoard) {
    let pending = board
        .pending()
        .iter()
        .map(|task| format!("{}({})", task.id, task.priority.as_str()))
        .collect::<Vec<_>>()
        .join(",");
    println!(
        "tasks step={step} rate={}% pending=[{pending}] completed={}",
        board.completion_rate(),
        board.completed_count()
    );
}

fn replay_attendance() -> Result<(), MarkError> {
    let mut marker = AttendanceMarker::default();
    let start = Instant::now();
    marker.select_method(AttendanceMethod::Proximity);
    print_marker(&marker, 0);

    marker.mark(start)?;
    print_marker(&marker, 0);

    let mut clock = start;
    while let Some(deadline) = marker.next_deadline() {
        clock = deadline;
        marker.poll(clock);
        print_marker(&marker, clock.duration_since(start).as_millis());
    }
    Ok(())
}

fn print_marker(marker: &AttendanceMarker, elapsed_ms: u128) {
    println!(
        "attendance t={elapsed_ms}ms method={} phase={} enabled={} label=\"{}\"",
        marker.method().as_str(),
        marker.phase().as_str(),
        marker.is_mark_enabled(),
        marker.action_label()
    );
}
