use eggtimer_core::{DurationError, Phase, TimerState, format_remaining};

use crate::config::AppConfig;

// Shortest remaining time written back to the field on stop; "0.0" would not parse.
const MIN_RESUME_SECONDS: f64 = 0.1;

// AppState is owned by the UI thread. Ticks reach it only as `Action::Tick`.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) timer: TimerState,
    /// Contents of the duration field while it is editable.
    pub(crate) duration_input: String,
    // Text a boil was started with from zero progress; restored when it finishes.
    full_duration_input: Option<String>,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            timer: TimerState::new(config.mode, config.invalid_duration),
            duration_input: config.initial_duration.clone(),
            full_duration_input: None,
        }
    }

    pub(crate) fn toggle_boiling(&mut self) -> Result<Phase, DurationError> {
        let before = self.timer.phase();
        let fresh = before.is_finished() || self.timer.progress() <= 0.0;
        let result = self.timer.handle_start(&self.duration_input);

        match (before, self.timer.phase()) {
            (Phase::Boiling, Phase::Idle) => {
                // The next start resumes from what is left.
                let remaining = self.timer.remaining_seconds().max(MIN_RESUME_SECONDS);
                self.duration_input = format_remaining(remaining);
            }
            (_, Phase::Boiling) if fresh && result.is_ok() => {
                self.full_duration_input = Some(self.duration_input.trim().to_owned());
            }
            _ => {}
        }

        result
    }

    /// Only a running boil reacts to ticks.
    pub(crate) fn needs_ticks(&self) -> bool {
        self.timer.phase().is_boiling()
    }

    pub(crate) fn tick(&mut self) -> bool {
        let before = self.timer.phase();
        let changed = self.timer.on_tick();
        if before.is_boiling() && self.timer.phase().is_finished() {
            log::info!(
                "boil finished after {}s",
                format_remaining(self.timer.configured_duration())
            );
            if let Some(text) = &self.full_duration_input {
                self.duration_input.clone_from(text);
            }
        }
        changed
    }
}
