//! Egg timer application window.
//!
//! # Design Notes
//! - A background [`Ticker`] sends 25 ticks per second. They are drained on
//!   the UI thread at the start of each frame and applied as `Action::Tick`.
//! - While a boil is running the window schedules its own repaint one tick
//!   interval ahead. Idle and finished timers only repaint on user input;
//!   ticks drained then leave the timer untouched.
//! - Widgets never touch `AppState` directly. They request actions, which
//!   are applied once the frame has been laid out.
//! - The egg outline is sampled once at startup.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};
use eggtimer_core::{EggShape, OutlinePoint, TICK_INTERVAL, Ticker, TickerError};

use crate::{
    action::{self, Action, ActionRequestQueue},
    config::AppConfig,
    state::AppState,
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct EggTimerApp {
    app_state: AppState,
    egg_outline: Vec<OutlinePoint>,
    ticker: Option<Ticker>,
}

impl EggTimerApp {
    pub fn new(_cc: &CreationContext<'_>, config: &AppConfig) -> Result<Self, TickerError> {
        let ticker = Ticker::spawn(TICK_INTERVAL)?;
        log::info!(
            "egg timer ready, mode={:?}, invalid_duration={:?}",
            config.mode,
            config.invalid_duration
        );
        Ok(Self {
            app_state: AppState::new(config),
            egg_outline: EggShape::default().default_outline(),
            ticker: Some(ticker),
        })
    }

    fn poll_ticker(&mut self, action_queue: &mut ActionRequestQueue) {
        let Some(ticker) = &self.ticker else {
            return;
        };
        match ticker.pending() {
            Ok(count) => {
                for _ in 0..count {
                    action_queue.request(Action::Tick);
                }
            }
            Err(err) => {
                log::error!("{err}, the timer will no longer advance");
                self.ticker = None;
            }
        }
    }
}

impl App for EggTimerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.poll_ticker(&mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut action_queue);

        let timer_screen_vm =
            view_model_builder::build_timer_screen_vm(&self.app_state, &self.egg_outline);

        CentralPanel::default().show(ctx, |ui| {
            ui::timer_screen::show(ui, &timer_screen_vm, &mut action_queue);
        });

        let widget_focused = ctx.memory(|m| m.focused().is_some());
        ctx.input(|i| ui::input::handle_input(i, widget_focused, &mut action_queue));
        action::handler::handle_all(&mut self.app_state, &mut action_queue);

        if self.ticker.is_some() && self.app_state.needs_ticks() {
            ctx.request_repaint_after(TICK_INTERVAL);
        }
    }
}
