pub(crate) mod duration_field;
pub(crate) mod egg;
pub(crate) mod input;
pub(crate) mod layout;
pub(crate) mod start_button;
pub(crate) mod timer_screen;
