use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Elapsed time as shown in the `MM:SS` label. Minutes are not capped at 59.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ElapsedTime {
    pub minutes: u64,
    pub seconds: u8,
}

impl ElapsedTime {
    /// Split an elapsed duration into whole minutes and seconds. Negative durations
    /// (clock moved backwards) count as zero.
    #[must_use]
    pub fn from_duration(elapsed: Duration) -> Self {
        let millis = u64::try_from(elapsed.num_milliseconds()).unwrap_or(0);
        Self::from_millis(millis)
    }

    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        let minutes = millis / 60_000;
        let seconds = (millis % 60_000) / 1_000;
        Self {
            minutes,
            // always < 60
            seconds: u8::try_from(seconds).unwrap_or(59),
        }
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Wall-clock stopwatch for the current question view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    started_at: DateTime<Utc>,
    running: bool,
    displayed: Option<ElapsedTime>,
}

impl TimerState {
    #[must_use]
    pub fn start(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            running: true,
            displayed: None,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn displayed(&self) -> Option<ElapsedTime> {
        self.displayed
    }

    /// Recompute the elapsed time. Returns `None` once the timer is stopped.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<ElapsedTime> {
        if !self.running {
            return None;
        }
        let elapsed = ElapsedTime::from_duration(now - self.started_at);
        self.displayed = Some(elapsed);
        Some(elapsed)
    }

    /// Returns `true` the first time it is called, `false` afterwards.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(ElapsedTime::from_millis(0).to_string(), "00:00");
        assert_eq!(ElapsedTime::from_millis(999).to_string(), "00:00");
        assert_eq!(ElapsedTime::from_millis(65_000).to_string(), "01:05");
        assert_eq!(ElapsedTime::from_millis(3_599_999).to_string(), "59:59");
        assert_eq!(ElapsedTime::from_millis(3_600_000).to_string(), "60:00");
        assert_eq!(ElapsedTime::from_millis(6_000_000_000).to_string(), "100000:00");
    }

    #[test]
    fn negative_elapsed_counts_as_zero() {
        assert_eq!(
            ElapsedTime::from_duration(Duration::seconds(-5)),
            ElapsedTime::default()
        );
    }

    #[test]
    fn tick_measures_from_start() {
        let start = fixed_now();
        let mut timer = TimerState::start(start);
        assert_eq!(timer.tick(start).map(|e| e.to_string()).as_deref(), Some("00:00"));
        let later = start + Duration::milliseconds(125_400);
        assert_eq!(timer.tick(later).map(|e| e.to_string()).as_deref(), Some("02:05"));
        assert_eq!(
            timer.displayed(),
            Some(ElapsedTime {
                minutes: 2,
                seconds: 5
            })
        );
    }

    #[test]
    fn stopped_timer_no_longer_ticks() {
        let start = fixed_now();
        let mut timer = TimerState::start(start);
        assert!(timer.stop());
        assert!(!timer.stop());
        assert_eq!(timer.tick(start + Duration::seconds(30)), None);
        assert!(!timer.is_running());
    }
}
