//! One-shot transition timer owned by a screen.
//!
//! The shell drives time: it passes its current `Instant` to `poll`. Dropping
//! or cancelling the timer guarantees the transition never fires.

use std::time::{Duration, Instant};

/// Armed transition to `target` at `deadline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTimer<T> {
    deadline: Instant,
    target: T,
}

impl<T: Copy> TransitionTimer<T> {
    pub fn arm(now: Instant, delay: Duration, target: T) -> Self {
        Self {
            deadline: now + delay,
            target,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before firing; zero once due.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::TransitionTimer;
    use std::time::{Duration, Instant};

    #[test]
    fn fires_exactly_at_deadline() {
        let start = Instant::now();
        let timer = TransitionTimer::arm(start, Duration::from_millis(2000), 'x');
        assert!(!timer.is_due(start + Duration::from_millis(1999)));
        assert!(timer.is_due(start + Duration::from_millis(2000)));
        assert_eq!(timer.remaining(start + Duration::from_millis(2500)), Duration::ZERO);
        assert_eq!(timer.target(), 'x');
    }
}
