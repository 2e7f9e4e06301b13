//! Core logic for the egg timer application.
//!
//! This crate holds everything that does not depend on a GUI toolkit, so it
//! can be tested headless:
//!
//! - [`timer`]: the [`TimerState`] that advances progress on ticks and reacts
//!   to start/stop requests, together with its derived [`Phase`].
//! - [`duration`]: parsing of the duration text field and formatting of the
//!   remaining time.
//! - [`egg`]: the parametric egg outline and the shell color for a given
//!   progress.
//! - [`ticker`]: the background thread that emits a [`Tick`] 25 times per
//!   second.
//!
//! # Examples
//!
//! ```
//! use eggtimer_core::{InvalidDurationPolicy, Phase, TimerMode, TimerState};
//!
//! let mut timer = TimerState::new(TimerMode::DurationScaled, InvalidDurationPolicy::Refuse);
//! timer.handle_start("10").unwrap();
//! assert_eq!(timer.phase(), Phase::Boiling);
//!
//! // 10 seconds at 25 ticks per second.
//! for _ in 0..250 {
//!     timer.on_tick();
//! }
//! assert_eq!(timer.phase(), Phase::Finished);
//! assert_eq!(timer.phase().button_label(), "finished");
//! ```

pub mod duration;
pub mod egg;
pub mod ticker;
pub mod timer;

pub use self::{
    duration::{DurationError, format_remaining, parse_duration},
    egg::{EggShape, OutlinePoint, ShellColor},
    ticker::{FIXED_INCREMENT, TICK_BACKLOG, TICK_INTERVAL, TICK_RATE_HZ, Tick, Ticker, TickerError},
    timer::{InvalidDurationPolicy, Phase, TimerMode, TimerState},
};
