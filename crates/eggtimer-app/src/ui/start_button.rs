use eframe::egui::{Button, Frame, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::layout,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StartButtonViewModel {
    pub(crate) label: &'static str,
}

impl StartButtonViewModel {
    #[must_use]
    pub(crate) fn new(label: &'static str) -> Self {
        Self { label }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StartButtonViewModel, action_queue: &mut ActionRequestQueue) {
    Frame::NONE
        .inner_margin(layout::START_BUTTON_MARGIN)
        .show(ui, |ui| {
            let size = Vec2::new(ui.available_width(), layout::START_BUTTON_HEIGHT);
            if ui.add_sized(size, Button::new(vm.label)).clicked() {
                action_queue.request(Action::ToggleBoiling);
            }
        });
}
