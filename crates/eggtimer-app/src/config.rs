//! Application configuration.
//!
//! The binary maps its command-line arguments onto [`AppConfig`]; the
//! defaults match running it without any.

use eggtimer_core::{InvalidDurationPolicy, TimerMode};

/// Startup settings, filled from the command line by the binary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How each tick advances the boil. Defaults to scaling by the entered duration.
    pub mode: TimerMode,
    /// What a start does when the duration field does not parse. Defaults to
    /// refusing to start.
    pub invalid_duration: InvalidDurationPolicy,
    /// Initial contents of the duration field.
    pub initial_duration: String,
}
