//! Egg timer desktop application built on egui/eframe.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod app;
pub mod config;
pub mod version;

mod action;
mod state;
mod ui;
mod view_model_builder;

pub use self::{app::EggTimerApp, config::AppConfig};
