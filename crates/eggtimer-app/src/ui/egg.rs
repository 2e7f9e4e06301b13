use eframe::egui::{Color32, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use eggtimer_core::{OutlinePoint, ShellColor, egg};

#[derive(Debug, Clone)]
pub(crate) struct EggViewModel<'a> {
    outline: &'a [OutlinePoint],
    fill: Color32,
}

impl<'a> EggViewModel<'a> {
    #[must_use]
    pub(crate) fn new(outline: &'a [OutlinePoint], shell: ShellColor) -> Self {
        let ShellColor { r, g, b } = shell;
        Self {
            outline,
            fill: Color32::from_rgb(r, g, b),
        }
    }

    #[cfg(test)]
    pub(crate) fn fill(&self) -> Color32 {
        self.fill
    }
}

/// Fills the egg centered in the available space, shrinking it only when it does not fit.
pub(crate) fn show(ui: &mut Ui, vm: &EggViewModel) {
    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let Some((min, max)) = egg::bounds(vm.outline) else {
        return;
    };

    let egg_size = Vec2::new(max.x - min.x, max.y - min.y);
    let egg_center = Vec2::new(min.x + max.x, min.y + max.y) / 2.0;
    let scale = f32::min(rect.width() / egg_size.x, rect.height() / egg_size.y).clamp(0.0, 1.0);

    // The last sample closes the curve and duplicates the first. The curve runs
    // counter-clockwise on screen; egui wants clockwise.
    let points: Vec<Pos2> = vm.outline[..vm.outline.len() - 1]
        .iter()
        .rev()
        .map(|p| rect.center() + (Vec2::new(p.x, p.y) - egg_center) * scale)
        .collect();

    ui.painter()
        .add(Shape::convex_polygon(points, vm.fill, Stroke::NONE));
}
