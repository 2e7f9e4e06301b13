use eggtimer_core::{OutlinePoint, Phase, ShellColor, TimerMode, format_remaining};

use crate::{
    state::AppState,
    ui::{
        duration_field::DurationFieldViewModel, egg::EggViewModel,
        start_button::StartButtonViewModel, timer_screen::TimerScreenViewModel,
    },
};

#[must_use]
fn build_duration_field_vm(app_state: &AppState) -> Option<DurationFieldViewModel> {
    let timer = &app_state.timer;
    match timer.mode() {
        TimerMode::FixedIncrement => None,
        TimerMode::DurationScaled => Some(if timer.phase() == Phase::Boiling {
            DurationFieldViewModel::countdown(format_remaining(timer.remaining_seconds()))
        } else {
            DurationFieldViewModel::editable(app_state.duration_input.clone())
        }),
    }
}

#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub(crate) fn build_timer_screen_vm<'a>(
    app_state: &AppState,
    egg_outline: &'a [OutlinePoint],
) -> TimerScreenViewModel<'a> {
    let timer = &app_state.timer;
    TimerScreenViewModel {
        egg_vm: EggViewModel::new(egg_outline, ShellColor::at_progress(timer.progress())),
        duration_field_vm: build_duration_field_vm(app_state),
        progress: timer.progress() as f32,
        start_button_vm: StartButtonViewModel::new(timer.phase().button_label()),
    }
}
