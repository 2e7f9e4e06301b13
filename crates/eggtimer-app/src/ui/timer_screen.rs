use eframe::egui::{ProgressBar, Ui};
use egui_extras::{Size, StripBuilder};

use super::{duration_field, egg, layout, start_button};
use crate::{
    action::ActionRequestQueue,
    ui::{
        duration_field::DurationFieldViewModel, egg::EggViewModel,
        start_button::StartButtonViewModel,
    },
};

#[derive(Debug, Clone)]
pub(crate) struct TimerScreenViewModel<'a> {
    pub(crate) egg_vm: EggViewModel<'a>,
    /// Absent when ticks use a fixed increment.
    pub(crate) duration_field_vm: Option<DurationFieldViewModel>,
    pub(crate) progress: f32,
    pub(crate) start_button_vm: StartButtonViewModel,
}

pub(crate) fn show(ui: &mut Ui, vm: &TimerScreenViewModel, action_queue: &mut ActionRequestQueue) {
    // The egg takes whatever height the controls leave.
    let mut strip = StripBuilder::new(ui).size(Size::remainder());
    if vm.duration_field_vm.is_some() {
        strip = strip.size(Size::exact(layout::DURATION_FIELD_BLOCK_HEIGHT));
    }
    strip
        .size(Size::exact(layout::PROGRESS_BAR_HEIGHT))
        .size(Size::exact(layout::start_button_block_height()))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                egg::show(ui, &vm.egg_vm);
            });
            if let Some(field_vm) = &vm.duration_field_vm {
                strip.cell(|ui| {
                    duration_field::show(ui, field_vm, action_queue);
                });
            }
            strip.cell(|ui| {
                ui.add(ProgressBar::new(vm.progress));
            });
            strip.cell(|ui| {
                start_button::show(ui, &vm.start_button_vm, action_queue);
            });
        });
}
