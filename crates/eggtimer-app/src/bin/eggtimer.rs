//! Egg timer desktop application using egui/eframe.
//!
//! Enter a boil duration in seconds, press `start`, and watch the egg change
//! color while the progress bar fills.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin eggtimer -- --duration 360
//! ```
//!
//! Use the fixed per-tick increment instead of a duration (10 seconds per boil):
//!
//! ```sh
//! cargo run --bin eggtimer -- --mode fixed-increment
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use eframe::{CreationContext, NativeOptions, egui::ViewportBuilder};
use eggtimer_app::{AppConfig, EggTimerApp, version};
use eggtimer_core::{InvalidDurationPolicy, TimerMode};

const TITLE: &str = "Egg Timer";
const WINDOW_SIZE: (f32, f32) = (400.0, 600.0);

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Every tick adds a fixed step; a boil always takes 10 seconds.
    FixedIncrement,
    /// A boil takes the number of seconds entered in the window.
    DurationScaled,
}

impl From<ModeArg> for TimerMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::FixedIncrement => Self::FixedIncrement,
            ModeArg::DurationScaled => Self::DurationScaled,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// How each tick advances the boil.
    #[arg(long, value_enum, value_name = "MODE", default_value = "duration-scaled")]
    mode: ModeArg,

    /// Pre-fill the duration field with this many seconds.
    #[arg(long, value_name = "SECONDS")]
    duration: Option<f64>,

    /// Start boiling even when the duration field cannot be parsed, keeping the
    /// previous duration.
    #[arg(long)]
    start_on_invalid_duration: bool,
}

impl Args {
    fn into_config(self) -> AppConfig {
        AppConfig {
            mode: self.mode.into(),
            invalid_duration: if self.start_on_invalid_duration {
                InvalidDurationPolicy::StartAnyway
            } else {
                InvalidDurationPolicy::Refuse
            },
            initial_duration: self
                .duration
                .map(|seconds| seconds.to_string())
                .unwrap_or_default(),
        }
    }
}

type DynError = Box<dyn std::error::Error + Send + Sync>;

fn create_app(
    cc: &CreationContext<'_>,
    config: &AppConfig,
) -> Result<Box<dyn eframe::App>, DynError> {
    Ok(Box::new(EggTimerApp::new(cc, config)?))
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let config = Args::parse().into_config();
    log::info!(
        "Starting Egg Timer, version={}",
        version::build_version()
    );

    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_SIZE),
        ..Default::default()
    };
    let result = eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| create_app(cc, &config)),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event loop failed: {err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
