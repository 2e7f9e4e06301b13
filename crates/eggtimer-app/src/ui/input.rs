use eframe::egui::{InputState, Key, Modifiers};

use crate::action::{Action, ActionRequestQueue};

const START_KEY: Key = Key::Enter;

/// Enter acts like the start button, so a duration can be typed and started from the keyboard.
///
/// Must run after the frame's widgets: a focused start button already turns
/// Enter into a click and keeps focus, so the shortcut is skipped while any
/// widget is focused. The single-line duration field gives up focus on Enter.
pub(crate) fn handle_input(
    i: &InputState,
    widget_focused: bool,
    action_queue: &mut ActionRequestQueue,
) {
    if is_start_shortcut(i.key_pressed(START_KEY), i.modifiers, widget_focused) {
        action_queue.request(Action::ToggleBoiling);
    }
}

fn is_start_shortcut(pressed: bool, modifiers: Modifiers, widget_focused: bool) -> bool {
    pressed && modifiers.is_none() && !widget_focused
}
