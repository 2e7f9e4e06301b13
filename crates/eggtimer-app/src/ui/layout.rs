use eframe::egui::{Color32, Margin};

pub(crate) const DURATION_FIELD_WIDTH: f32 = 60.0;
pub(crate) const DURATION_FIELD_BORDER_WIDTH: f32 = 2.0;
pub(crate) const DURATION_FIELD_BORDER_COLOR: Color32 = Color32::from_rgb(204, 204, 204);
pub(crate) const DURATION_FIELD_CORNER_RADIUS: u8 = 3;
// Field height plus the gap above the progress bar.
pub(crate) const DURATION_FIELD_BLOCK_HEIGHT: f32 = 28.0 + 40.0;

pub(crate) const PROGRESS_BAR_HEIGHT: f32 = 18.0;

pub(crate) const START_BUTTON_MARGIN: Margin = Margin::symmetric(35, 25);
pub(crate) const START_BUTTON_HEIGHT: f32 = 36.0;

#[must_use]
pub(crate) fn start_button_block_height() -> f32 {
    START_BUTTON_HEIGHT + START_BUTTON_MARGIN.sum().y
}
