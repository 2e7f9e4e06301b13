use eframe::egui::{Align, Frame, Stroke, TextEdit, Ui};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::layout,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DurationFieldViewModel {
    pub(crate) text: String,
    /// Read-only while a boil is running; the text is then the remaining time.
    pub(crate) editable: bool,
}

impl DurationFieldViewModel {
    #[must_use]
    pub(crate) fn editable(text: String) -> Self {
        Self {
            text,
            editable: true,
        }
    }

    #[must_use]
    pub(crate) fn countdown(text: String) -> Self {
        Self {
            text,
            editable: false,
        }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &DurationFieldViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        Frame::NONE
            .stroke(Stroke::new(
                layout::DURATION_FIELD_BORDER_WIDTH,
                layout::DURATION_FIELD_BORDER_COLOR,
            ))
            .corner_radius(layout::DURATION_FIELD_CORNER_RADIUS)
            .show(ui, |ui| {
                let mut text = vm.text.clone();
                let response = ui.add(
                    TextEdit::singleline(&mut text)
                        .id_salt("boil_duration")
                        .hint_text("sec")
                        .horizontal_align(Align::Center)
                        .desired_width(layout::DURATION_FIELD_WIDTH)
                        .interactive(vm.editable),
                );
                if vm.editable && response.changed() {
                    action_queue.request(Action::UpdateDurationInput(text));
                }
            });
    });
}
