//! Attendance screen state.
//!
//! # Responsibility
//! - Track the selected marking method.
//! - Run the simulated `idle -> marking -> marked -> idle` cycle.
//!
//! # Invariants
//! - At most one mark cycle is in flight per marker; `mark` is rejected
//!   while `Marking`.
//! - Marking never fails and behaves the same for every method.
//! - At most one timer is armed; a new mark or `cancel_pending` drops the old
//!   one so a stale transition can never fire.

pub mod catalog;
pub mod timer;

use crate::model::attendance::AttendanceMethod;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};
use timer::TransitionTimer;

pub use catalog::{presentation, recent_attendance, MethodPresentation};

/// Default simulated latency of one mark.
pub const DEFAULT_MARKING_DELAY: Duration = Duration::from_millis(2000);
/// Default time the success banner stays up.
pub const DEFAULT_MARKED_DISPLAY: Duration = Duration::from_millis(3000);

/// Phase of the mark cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkPhase {
    #[default]
    Idle,
    Marking,
    Marked,
}

impl MarkPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Marking => "marking",
            Self::Marked => "marked",
        }
    }
}

/// Durations of the two timed transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkTimings {
    /// `Marking -> Marked`.
    pub marking_delay: Duration,
    /// `Marked -> Idle`.
    pub marked_display: Duration,
}

impl Default for MarkTimings {
    fn default() -> Self {
        Self {
            marking_delay: DEFAULT_MARKING_DELAY,
            marked_display: DEFAULT_MARKED_DISPLAY,
        }
    }
}

/// Mark action errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkError {
    /// The mark control is disabled while a cycle is in flight.
    AlreadyMarking,
}

impl Display for MarkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyMarking => write!(f, "attendance marking already in progress"),
        }
    }
}

impl Error for MarkError {}

/// Attendance state for one mounted attendance screen.
#[derive(Debug)]
pub struct AttendanceMarker {
    method: AttendanceMethod,
    phase: MarkPhase,
    timings: MarkTimings,
    timer: Option<TransitionTimer<MarkPhase>>,
}

impl Default for AttendanceMarker {
    fn default() -> Self {
        Self::new(MarkTimings::default())
    }
}

impl AttendanceMarker {
    /// Idle marker with QR selected.
    pub fn new(timings: MarkTimings) -> Self {
        Self {
            method: AttendanceMethod::default(),
            phase: MarkPhase::Idle,
            timings,
            timer: None,
        }
    }

    pub fn method(&self) -> AttendanceMethod {
        self.method
    }

    pub fn phase(&self) -> MarkPhase {
        self.phase
    }

    pub fn timings(&self) -> MarkTimings {
        self.timings
    }

    /// Changes which action panel is shown. No other effect.
    pub fn select_method(&mut self, method: AttendanceMethod) {
        self.method = method;
    }

    /// Whether the mark control accepts input.
    pub fn is_mark_enabled(&self) -> bool {
        self.phase != MarkPhase::Marking
    }

    /// Whether the success banner is shown.
    pub fn shows_marked_banner(&self) -> bool {
        self.phase == MarkPhase::Marked
    }

    /// Label for the active panel's button in the current phase.
    pub fn action_label(&self) -> &'static str {
        let presentation = presentation(self.method);
        match self.phase {
            MarkPhase::Marking => presentation.busy_label,
            MarkPhase::Idle | MarkPhase::Marked => presentation.action_label,
        }
    }

    /// Deadline of the armed transition, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.map(|timer| timer.deadline())
    }

    /// The armed transition, if any.
    pub fn pending_timer(&self) -> Option<TransitionTimer<MarkPhase>> {
        self.timer
    }

    /// Starts a mark cycle with the selected method.
    ///
    /// A pending `Marked -> Idle` revert is cancelled.
    ///
    /// # Errors
    /// - `AlreadyMarking` while a cycle is in flight.
    pub fn mark(&mut self, now: Instant) -> Result<(), MarkError> {
        if self.phase == MarkPhase::Marking {
            return Err(MarkError::AlreadyMarking);
        }
        self.timer = Some(TransitionTimer::arm(
            now,
            self.timings.marking_delay,
            MarkPhase::Marked,
        ));
        self.enter(MarkPhase::Marking);
        Ok(())
    }

    /// Fires every transition due at `now` and returns the phases entered.
    pub fn poll(&mut self, now: Instant) -> Vec<MarkPhase> {
        let mut entered = Vec::new();
        while let Some(timer) = self.timer.filter(|timer| timer.is_due(now)) {
            let next = timer.target();
            self.timer = match next {
                MarkPhase::Marked => Some(TransitionTimer::arm(
                    timer.deadline(),
                    self.timings.marked_display,
                    MarkPhase::Idle,
                )),
                MarkPhase::Idle | MarkPhase::Marking => None,
            };
            self.enter(next);
            entered.push(next);
        }
        entered
    }

    /// Drops the armed timer. Called on unmount.
    pub fn cancel_pending(&mut self) {
        if self.timer.take().is_some() {
            debug!(
                "event=attendance_timer_cancelled module=attendance status=ok phase={}",
                self.phase.as_str()
            );
        }
    }

    fn enter(&mut self, phase: MarkPhase) {
        self.phase = phase;
        match phase {
            MarkPhase::Marked => info!(
                "event=attendance_marked module=attendance status=ok method={}",
                self.method.as_str()
            ),
            _ => debug!(
                "event=attendance_phase module=attendance status=ok phase={} method={}",
                phase.as_str(),
                self.method.as_str()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AttendanceMarker, MarkPhase};
    use crate::model::attendance::AttendanceMethod;
    use std::time::{Duration, Instant};

    #[test]
    fn starts_idle_with_qr() {
        let marker = AttendanceMarker::default();
        assert_eq!(marker.phase(), MarkPhase::Idle);
        assert_eq!(marker.method(), AttendanceMethod::Qr);
        assert!(marker.is_mark_enabled());
        assert_eq!(marker.next_deadline(), None);
    }

    #[test]
    fn late_poll_chains_both_transitions() {
        let start = Instant::now();
        let mut marker = AttendanceMarker::default();
        marker.mark(start).expect("mark from idle");

        let entered = marker.poll(start + Duration::from_secs(10));
        assert_eq!(entered, vec![MarkPhase::Marked, MarkPhase::Idle]);
        assert_eq!(marker.phase(), MarkPhase::Idle);
        assert_eq!(marker.next_deadline(), None);
    }

    #[test]
    fn pending_timer_reports_time_left() {
        let start = Instant::now();
        let mut marker = AttendanceMarker::default();
        marker.mark(start).expect("mark from idle");

        let timer = marker.pending_timer().expect("armed after mark");
        assert_eq!(timer.target(), MarkPhase::Marked);
        assert_eq!(
            timer.remaining(start + Duration::from_millis(500)),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn busy_label_follows_selected_method() {
        let mut marker = AttendanceMarker::default();
        marker.select_method(AttendanceMethod::Face);
        assert_eq!(marker.action_label(), "Start Verification");
        marker.mark(Instant::now()).expect("mark from idle");
        assert_eq!(marker.action_label(), "Verifying...");
    }
}
