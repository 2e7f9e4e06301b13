//! Egg geometry and shell color.
//!
//! The outline uses the egg curve
//!
//! ```text
//! x = a cos θ
//! y = -(sqrt(b² - d² cos² θ) + d sin θ) sin θ
//! ```
//!
//! with `y` growing downwards, so the blunt end of the egg points up.

/// A point on the egg outline, in logical pixels relative to the egg center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlinePoint {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset, growing downwards.
    pub y: f32,
}

/// Parameters of the egg curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EggShape {
    /// Half width of the egg.
    pub a: f64,
    /// Half height of the egg.
    pub b: f64,
    /// Asymmetry between the blunt and the pointed end.
    pub d: f64,
}

impl Default for EggShape {
    fn default() -> Self {
        Self {
            a: 110.0,
            b: 150.0,
            d: 20.0,
        }
    }
}

impl EggShape {
    /// Number of whole-degree steps used for a full turn.
    pub const STEPS: u32 = 360;

    /// Returns the point at angle `degrees`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn point_at(&self, degrees: f64) -> OutlinePoint {
        let Self { a, b, d } = *self;
        let (sin_t, cos_t) = degrees.to_radians().sin_cos();
        let x = a * cos_t;
        let y = -((b * b - d * d * cos_t * cos_t).sqrt() + d * sin_t) * sin_t;
        OutlinePoint {
            x: x as f32,
            y: y as f32,
        }
    }

    /// Samples the closed outline from 0° to 360° inclusive, `steps + 1` points.
    ///
    /// The first and last point coincide.
    #[must_use]
    pub fn outline(&self, steps: u32) -> Vec<OutlinePoint> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| self.point_at(360.0 * f64::from(i) / f64::from(steps)))
            .collect()
    }

    /// Samples the outline at one point per degree (361 points).
    #[must_use]
    pub fn default_outline(&self) -> Vec<OutlinePoint> {
        self.outline(Self::STEPS)
    }
}

/// Axis-aligned bounds of a set of outline points, as `(min, max)`.
#[must_use]
pub fn bounds(points: &[OutlinePoint]) -> Option<(OutlinePoint, OutlinePoint)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(min, max), p| {
        (
            OutlinePoint {
                x: min.x.min(p.x),
                y: min.y.min(p.y),
            },
            OutlinePoint {
                x: max.x.max(p.x),
                y: max.y.max(p.y),
            },
        )
    }))
}

/// Shell color for a given progress, fully opaque.
///
/// Red stays saturated while green and blue fade with `1 - progress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl ShellColor {
    const GREEN_RAW: f64 = 239.0;
    const BLUE_RAW: f64 = 174.0;

    /// Color of the egg after `progress` of the boil has elapsed.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn at_progress(progress: f64) -> Self {
        let remaining = 1.0 - progress.clamp(0.0, 1.0);
        Self {
            r: 255,
            g: (Self::GREEN_RAW * remaining) as u8,
            b: (Self::BLUE_RAW * remaining) as u8,
        }
    }
}
