//! Timer state machine.
//!
//! [`TimerState`] is owned by the UI thread. Ticks and start/stop requests are
//! applied to it as plain method calls; nothing else mutates it.

use crate::{
    duration::{DurationError, parse_duration},
    ticker::{FIXED_INCREMENT, TICK_RATE_HZ},
};

/// Progress this close to 1 counts as complete.
const COMPLETION_EPSILON: f64 = 1e-9;

/// How a tick advances progress.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TimerMode {
    /// Every tick adds [`FIXED_INCREMENT`]. Starting and stopping only flips
    /// the boiling flag; there is no duration input and no reset.
    FixedIncrement,
    /// Every tick adds `1 / 25 / duration` so the boil lasts the entered
    /// number of seconds.
    #[default]
    DurationScaled,
}

/// What a start request does when the duration text cannot be parsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDurationPolicy {
    /// Stay in the current phase.
    #[default]
    Refuse,
    /// Start boiling anyway with the previously configured duration.
    StartAnyway,
}

/// Phase of the timer, derived from the boiling flag and progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// Not boiling.
    Idle,
    /// Boiling and not yet done.
    Boiling,
    /// Boiling and progress has reached 1.
    Finished,
}

impl Phase {
    /// Label of the start button in this phase.
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "start",
            Self::Boiling => "stop",
            Self::Finished => "finished",
        }
    }
}

/// Progress of a boil and the settings that drive it.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerState {
    progress: f64,
    boiling: bool,
    configured_duration: f64,
    mode: TimerMode,
    invalid_duration: InvalidDurationPolicy,
}

impl TimerState {
    /// Creates an idle timer with no progress and no configured duration.
    #[must_use]
    pub const fn new(mode: TimerMode, invalid_duration: InvalidDurationPolicy) -> Self {
        Self {
            progress: 0.0,
            boiling: false,
            configured_duration: 0.0,
            mode,
            invalid_duration,
        }
    }

    /// Fraction of the boil elapsed, in `[0, 1]`.
    #[must_use]
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether the timer is counting.
    #[must_use]
    pub const fn is_boiling(&self) -> bool {
        self.boiling
    }

    /// Total boil duration in seconds, rescaled on every restart.
    #[must_use]
    pub const fn configured_duration(&self) -> f64 {
        self.configured_duration
    }

    /// The tick mode this timer was created with.
    #[must_use]
    pub const fn mode(&self) -> TimerMode {
        self.mode
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.boiling, self.is_complete()) {
            (false, _) => Phase::Idle,
            (true, false) => Phase::Boiling,
            (true, true) => Phase::Finished,
        }
    }

    /// Seconds left until the boil is done.
    #[must_use]
    pub fn remaining_seconds(&self) -> f64 {
        (1.0 - self.progress) * self.configured_duration
    }

    fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Handles a click on the start button.
    ///
    /// With [`TimerMode::FixedIncrement`] this only flips the boiling flag and
    /// `duration_text` is ignored.
    ///
    /// With [`TimerMode::DurationScaled`] a running boil is stopped. Otherwise
    /// `duration_text` is parsed as the number of seconds left; a finished boil
    /// is reset first and the configured duration is rescaled so the remaining
    /// progress takes exactly that long. The new phase is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`DurationError`] if the text cannot be parsed. The
    /// configured duration is left unchanged; whether boiling starts anyway
    /// depends on the [`InvalidDurationPolicy`].
    pub fn handle_start(&mut self, duration_text: &str) -> Result<Phase, DurationError> {
        match self.mode {
            TimerMode::FixedIncrement => {
                self.boiling = !self.boiling;
                Ok(self.phase())
            }
            TimerMode::DurationScaled => {
                if self.phase() == Phase::Boiling {
                    self.boiling = false;
                    return Ok(self.phase());
                }
                match parse_duration(duration_text) {
                    Ok(seconds) => {
                        self.reset_if_complete();
                        self.configured_duration = seconds / (1.0 - self.progress);
                        self.boiling = true;
                        Ok(self.phase())
                    }
                    Err(err) => {
                        if self.invalid_duration == InvalidDurationPolicy::StartAnyway {
                            self.reset_if_complete();
                            self.boiling = true;
                        }
                        Err(err)
                    }
                }
            }
        }
    }

    fn reset_if_complete(&mut self) {
        if self.is_complete() {
            self.progress = 0.0;
        }
    }

    /// Progress added by one tick.
    #[must_use]
    pub fn tick_increment(&self) -> f64 {
        match self.mode {
            TimerMode::FixedIncrement => FIXED_INCREMENT,
            TimerMode::DurationScaled => 1.0 / f64::from(TICK_RATE_HZ) / self.configured_duration,
        }
    }

    /// Applies one tick. Returns `true` if progress changed and the UI should redraw.
    pub fn on_tick(&mut self) -> bool {
        if !self.boiling || self.is_complete() {
            return false;
        }
        let next = self.progress + self.tick_increment();
        // NaN fails every comparison and ends up complete.
        self.progress = if next < 1.0 - COMPLETION_EPSILON {
            next.max(0.0)
        } else {
            1.0
        };
        true
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(TimerMode::default(), InvalidDurationPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn scaled() -> TimerState {
        TimerState::new(TimerMode::DurationScaled, InvalidDurationPolicy::Refuse)
    }

    fn ticks(timer: &mut TimerState, count: usize) {
        for _ in 0..count {
            timer.on_tick();
        }
    }

    #[test]
    fn starts_idle() {
        let timer = TimerState::default();
        assert_eq!(timer.progress(), 0.0);
        assert!(!timer.is_boiling());
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.mode(), TimerMode::DurationScaled);
    }

    #[test]
    fn fixed_increment_reaches_one_after_250_ticks() {
        let mut timer =
            TimerState::new(TimerMode::FixedIncrement, InvalidDurationPolicy::Refuse);
        assert_eq!(timer.handle_start(""), Ok(Phase::Boiling));

        ticks(&mut timer, 249);
        assert!(timer.progress() < 1.0);
        assert_eq!(timer.phase(), Phase::Boiling);

        assert!(timer.on_tick());
        assert_eq!(timer.progress(), 1.0);
        assert_eq!(timer.phase(), Phase::Finished);
        assert!(!timer.on_tick());
    }

    #[test]
    fn fixed_increment_toggle_never_resets() {
        let mut timer =
            TimerState::new(TimerMode::FixedIncrement, InvalidDurationPolicy::Refuse);
        timer.handle_start("").unwrap();
        ticks(&mut timer, 300);
        assert_eq!(timer.phase(), Phase::Finished);

        assert_eq!(timer.handle_start(""), Ok(Phase::Idle));
        assert_eq!(timer.progress(), 1.0);
        assert_eq!(timer.phase().button_label(), "start");

        assert_eq!(timer.handle_start(""), Ok(Phase::Finished));
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn idle_timer_ignores_ticks() {
        let mut timer = scaled();
        assert!(!timer.on_tick());
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn duration_scaled_boils_for_entered_seconds() {
        let mut timer = scaled();
        assert_eq!(timer.handle_start(" 30 "), Ok(Phase::Boiling));
        assert_eq!(timer.configured_duration(), 30.0);

        ticks(&mut timer, 30 * 25 - 1);
        assert_eq!(timer.phase(), Phase::Boiling);
        timer.on_tick();
        assert_eq!(timer.phase(), Phase::Finished);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn restart_rescales_remaining_duration() {
        let mut timer = scaled();
        timer.progress = 0.5;
        assert_eq!(timer.handle_start("30"), Ok(Phase::Boiling));
        assert_eq!(timer.configured_duration(), 60.0);
        assert_eq!(timer.remaining_seconds(), 30.0);

        ticks(&mut timer, 749);
        assert_eq!(timer.phase(), Phase::Boiling);
        timer.on_tick();
        assert_eq!(timer.phase(), Phase::Finished);
    }

    #[test]
    fn stop_keeps_progress_and_duration() {
        let mut timer = scaled();
        timer.handle_start("10").unwrap();
        ticks(&mut timer, 100);
        let progress = timer.progress();

        assert_eq!(timer.handle_start("garbage is not parsed"), Ok(Phase::Idle));
        assert_eq!(timer.progress(), progress);
        assert_eq!(timer.configured_duration(), 10.0);
        assert!(!timer.on_tick());
    }

    #[test]
    fn invalid_duration_is_refused() {
        let mut timer = scaled();
        timer.handle_start("20").unwrap();
        timer.handle_start("").unwrap();

        assert!(timer.handle_start("abc").is_err());
        assert_eq!(timer.phase(), Phase::Idle);
        assert_eq!(timer.configured_duration(), 20.0);
    }

    #[test]
    fn invalid_duration_on_finished_keeps_finished() {
        let mut timer = scaled();
        timer.handle_start("1").unwrap();
        ticks(&mut timer, 25);
        assert_eq!(timer.phase(), Phase::Finished);

        assert!(timer.handle_start("abc").is_err());
        assert_eq!(timer.phase(), Phase::Finished);
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn invalid_duration_can_start_anyway() {
        let mut timer =
            TimerState::new(TimerMode::DurationScaled, InvalidDurationPolicy::StartAnyway);
        timer.handle_start("20").unwrap();
        timer.handle_start("").unwrap();

        assert!(timer.handle_start("abc").is_err());
        assert_eq!(timer.phase(), Phase::Boiling);
        assert_eq!(timer.configured_duration(), 20.0);
    }

    #[test]
    fn start_anyway_without_duration_finishes_at_once() {
        let mut timer =
            TimerState::new(TimerMode::DurationScaled, InvalidDurationPolicy::StartAnyway);
        assert!(timer.handle_start("").is_err());
        assert_eq!(timer.phase(), Phase::Boiling);

        assert!(timer.on_tick());
        assert_eq!(timer.progress(), 1.0);
        assert_eq!(timer.phase(), Phase::Finished);
    }

    #[test]
    fn button_label_sequence() {
        let mut timer = scaled();
        assert_eq!(timer.phase().button_label(), "start");

        timer.handle_start("2").unwrap();
        assert_eq!(timer.phase().button_label(), "stop");

        ticks(&mut timer, 50);
        assert_eq!(timer.phase().button_label(), "finished");

        assert_eq!(timer.handle_start("2"), Ok(Phase::Boiling));
        assert_eq!(timer.progress(), 0.0);
        assert_eq!(timer.configured_duration(), 2.0);
        assert_eq!(timer.phase().button_label(), "stop");
    }

    proptest! {
        #[test]
        fn progress_stays_in_unit_range(
            duration in 0.01f64..10_000.0,
            start in 0.0f64..1.0,
            count in 0usize..2_000,
        ) {
            let mut timer = scaled();
            timer.progress = start;
            timer.handle_start(&duration.to_string()).unwrap();
            for _ in 0..count {
                timer.on_tick();
                prop_assert!((0.0..=1.0).contains(&timer.progress()));
            }
        }

        #[test]
        fn restart_finishes_after_entered_seconds(
            seconds in 1u32..120,
            start in 0.0f64..0.99,
        ) {
            let mut timer = scaled();
            timer.progress = start;
            timer.handle_start(&seconds.to_string()).unwrap();
            prop_assert!((timer.configured_duration() - f64::from(seconds) / (1.0 - start)).abs() < 1e-9);

            let expected = (seconds * TICK_RATE_HZ) as usize;
            let mut elapsed: usize = 0;
            while timer.phase() == Phase::Boiling {
                timer.on_tick();
                elapsed += 1;
            }
            prop_assert!(elapsed.abs_diff(expected) <= 1, "{elapsed} vs {expected}");
        }
    }
}
