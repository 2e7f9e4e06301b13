use std::mem;

pub(crate) mod handler;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum Action {
    /// Start button clicked or its shortcut pressed.
    ToggleBoiling,
    UpdateDurationInput(String),
    /// One tick drained from the ticker.
    Tick,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_in_order_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::UpdateDurationInput("30".to_owned()));
        queue.request(Action::ToggleBoiling);
        queue.request(Action::Tick);

        let drained = queue.take_all();
        assert_eq!(
            drained,
            vec![
                Action::UpdateDurationInput("30".to_owned()),
                Action::ToggleBoiling,
                Action::Tick,
            ]
        );
        assert!(drained[2].is_tick());

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
