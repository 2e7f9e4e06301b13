use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

pub(crate) fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) {
    for action in action_queue.take_all() {
        handle(app_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, action: Action) {
    match action {
        Action::ToggleBoiling => match app_state.toggle_boiling() {
            Ok(phase) => log::debug!("start button pressed, phase={phase:?}"),
            Err(err) => log::warn!(
                "error parsing boil duration: {err}, phase={:?}",
                app_state.timer.phase()
            ),
        },
        Action::UpdateDurationInput(text) => app_state.duration_input = text,
        Action::Tick => {
            app_state.tick();
        }
    }
}
