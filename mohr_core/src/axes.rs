//! # Plot Axes
//!
//! Toolkit-independent plot math shared by both diagrams:
//!
//! - [`DataBounds`] - the data rectangle a plot must show
//! - [`ViewTransform`] - equal-aspect mapping from data to screen pixels
//! - [`nice_ticks`] - grid/tick positions at 1, 2 or 5 × 10ⁿ spacing
//!
//! Screen coordinates have +y pointing down, data coordinates +y up.

use crate::circle::{MohrCircle, StressPoints};
use crate::stress::StressState;

/// Fraction of the span added on every side when autoscaling
pub const AUTOSCALE_PADDING: f64 = 0.1;

/// Smallest span an autoscaled axis may have
pub const MIN_SPAN: f64 = 1.0;

/// Axis-aligned rectangle in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataBounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Zero-size bounds at a single point
    pub fn at(x: f64, y: f64) -> Self {
        Self::new(x, x, y, y)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> (f64, f64) {
        ((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
    }

    /// Grow to contain a point
    pub fn include(mut self, (x, y): (f64, f64)) -> Self {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
        self
    }

    pub fn is_finite(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
    }

    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// Pad each side by `fraction` of the span, enforcing [`MIN_SPAN`]
    pub fn padded(self, fraction: f64) -> Self {
        let (cx, cy) = self.center();
        let half_w = (self.width() * (1.0 + 2.0 * fraction)).max(MIN_SPAN) / 2.0;
        let half_h = (self.height() * (1.0 + 2.0 * fraction)).max(MIN_SPAN) / 2.0;
        Self::new(cx - half_w, cx + half_w, cy - half_h, cy + half_h)
    }

    /// Autoscaled bounds for the Mohr's circle plot.
    ///
    /// Covers the circle, both stress points, the θ-rotated points and the
    /// origin, so the axis lines through zero are always visible. Falls back
    /// to the [`MIN_SPAN`] box around the origin when the geometry overflows.
    pub fn for_mohr_circle(state: &StressState) -> Self {
        let circle = MohrCircle::from_state(state);
        let points = StressPoints::from_state(state);
        let rotated = StressPoints::from_state(&state.rotated_by_theta());

        let bounds = DataBounds::at(0.0, 0.0)
            .include((circle.center - circle.radius, -circle.radius))
            .include((circle.center + circle.radius, circle.radius))
            .include(points.x_face)
            .include(points.y_face)
            .include(rotated.x_face)
            .include(rotated.y_face)
            .padded(AUTOSCALE_PADDING);

        if bounds.is_finite() {
            bounds
        } else {
            DataBounds::at(0.0, 0.0).padded(AUTOSCALE_PADDING)
        }
    }
}

/// Pixel rectangle a plot is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Largest centered sub-rectangle with the given width/height ratio
    pub fn shrink_to_aspect(self, aspect: f64) -> Self {
        let aspect = aspect as f32;
        if !aspect.is_finite() || aspect <= 0.0 {
            return self;
        }
        let width = self.width.min(self.height * aspect);
        let height = width / aspect;
        Self::new(
            self.x + (self.width - width) / 2.0,
            self.y + (self.height - height) / 2.0,
            width,
            height,
        )
    }
}

/// Equal-aspect mapping from data coordinates into a [`ScreenRect`].
///
/// One data unit has the same pixel length on both axes. [`fit`] centers the
/// requested bounds and grows them along one axis to fill the rectangle,
/// [`fit_fixed`] keeps them exact and shrinks the rectangle instead.
///
/// [`fit`]: ViewTransform::fit
/// [`fit_fixed`]: ViewTransform::fit_fixed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Pixels per data unit
    pub scale: f64,
    /// Data bounds actually visible in the rectangle
    pub visible: DataBounds,
    rect: ScreenRect,
}

impl ViewTransform {
    pub fn fit(bounds: DataBounds, rect: ScreenRect) -> Self {
        let width = bounds.width().max(f64::EPSILON);
        let height = bounds.height().max(f64::EPSILON);
        let rect_w = f64::from(rect.width.max(1.0));
        let rect_h = f64::from(rect.height.max(1.0));

        let scale = (rect_w / width).min(rect_h / height);
        let (cx, cy) = bounds.center();
        let half_w = rect_w / scale / 2.0;
        let half_h = rect_h / scale / 2.0;

        Self {
            scale,
            visible: DataBounds::new(cx - half_w, cx + half_w, cy - half_h, cy + half_h),
            rect,
        }
    }

    /// Show exactly `bounds`, drawn into the centered part of `rect` that has
    /// their aspect ratio.
    pub fn fit_fixed(bounds: DataBounds, rect: ScreenRect) -> Self {
        let aspect = bounds.width() / bounds.height();
        let rect = rect.shrink_to_aspect(aspect);
        let mut view = Self::fit(bounds, rect);
        view.visible = bounds;
        view
    }

    pub fn rect(&self) -> ScreenRect {
        self.rect
    }

    /// Data point to screen pixel
    pub fn to_screen(&self, (x, y): (f64, f64)) -> (f32, f32) {
        let sx = f64::from(self.rect.x) + (x - self.visible.x_min) * self.scale;
        let sy = f64::from(self.rect.y) + (self.visible.y_max - y) * self.scale;
        (sx as f32, sy as f32)
    }

    /// Data-space length to pixels
    pub fn length_to_screen(&self, length: f64) -> f32 {
        (length * self.scale) as f32
    }
}

/// Tick positions covering [min, max] with roughly `target` intervals.
///
/// Spacing is 1, 2 or 5 × 10ⁿ. Returns an empty list for an empty or
/// non-finite range.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 || target == 0 {
        return Vec::new();
    }

    let step = nice_step(span / target as f64);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    (first..=last)
        .map(|i| {
            let tick = i as f64 * step;
            // Avoid "-0" labels
            if tick == 0.0 {
                0.0
            } else {
                tick
            }
        })
        .collect()
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick label text: integers without decimals, otherwise trimmed to the
/// precision the spacing needs.
pub fn format_tick(value: f64, step: f64) -> String {
    if step >= 1.0 || value.fract() == 0.0 {
        return format!("{:.0}", value);
    }
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_bounds_include_and_contains() {
        let bounds = DataBounds::at(0.0, 0.0).include((3.0, -2.0)).include((-1.0, 4.0));
        assert_eq!(bounds, DataBounds::new(-1.0, 3.0, -2.0, 4.0));
        assert!(bounds.contains((0.0, 0.0)));
        assert!(!bounds.contains((3.5, 0.0)));
    }

    #[test]
    fn test_padding_enforces_min_span() {
        let bounds = DataBounds::at(0.0, 0.0).padded(AUTOSCALE_PADDING);
        assert!((bounds.width() - MIN_SPAN).abs() < EPS);
        assert!((bounds.height() - MIN_SPAN).abs() < EPS);
        assert_eq!(bounds.center(), (0.0, 0.0));
    }

    #[test]
    fn test_mohr_bounds_cover_circle_and_origin() {
        let state = StressState::default();
        let bounds = DataBounds::for_mohr_circle(&state);
        let circle = MohrCircle::from_state(&state);

        for point in circle.points(100) {
            assert!(bounds.contains(point));
        }
        assert!(bounds.contains((0.0, 0.0)));
        assert!(bounds.contains((30.0, -10.0)));
    }

    #[test]
    fn test_mohr_bounds_include_origin_for_distant_circle() {
        let state = StressState::new(90.0, 80.0, 1.0, 0.0);
        let bounds = DataBounds::for_mohr_circle(&state);
        assert!(bounds.x_min < 0.0);
        assert!(bounds.x_max > 90.0);
    }

    #[test]
    fn test_degenerate_state_has_usable_bounds() {
        let bounds = DataBounds::for_mohr_circle(&StressState::new(0.0, 0.0, 0.0, 0.0));
        assert!(bounds.width() >= MIN_SPAN);
        assert!(bounds.height() >= MIN_SPAN);
    }

    #[test]
    fn test_transform_equal_aspect() {
        let bounds = DataBounds::new(-10.0, 30.0, -10.0, 10.0);
        let rect = ScreenRect::new(20.0, 10.0, 300.0, 600.0);
        let view = ViewTransform::fit(bounds, rect);

        let (x0, y0) = view.to_screen((0.0, 0.0));
        let (x1, _) = view.to_screen((5.0, 0.0));
        let (_, y1) = view.to_screen((0.0, 5.0));
        assert!(((x1 - x0) - (y0 - y1)).abs() < 1e-3);
        assert!(y1 < y0, "data +y should map upward on screen");
    }

    #[test]
    fn test_transform_contains_requested_bounds() {
        let bounds = DataBounds::new(-10.0, 30.0, -10.0, 10.0);
        for rect in [
            ScreenRect::new(0.0, 0.0, 300.0, 600.0),
            ScreenRect::new(0.0, 0.0, 800.0, 100.0),
        ] {
            let view = ViewTransform::fit(bounds, rect);
            assert!(view.visible.x_min <= bounds.x_min + EPS);
            assert!(view.visible.x_max >= bounds.x_max - EPS);
            assert!(view.visible.y_min <= bounds.y_min + EPS);
            assert!(view.visible.y_max >= bounds.y_max - EPS);

            let (left, top) = view.to_screen((view.visible.x_min, view.visible.y_max));
            let (right, bottom) = view.to_screen((view.visible.x_max, view.visible.y_min));
            assert!(left.abs() < 1e-3 && top.abs() < 1e-3);
            assert!((right - rect.width).abs() < 1e-3);
            assert!((bottom - rect.height).abs() < 1e-3);
        }
    }

    #[test]
    fn test_fixed_view_keeps_bounds_on_any_pane() {
        let bounds = DataBounds::new(0.0, 2.0, 0.0, 2.0);
        for rect in [
            ScreenRect::new(0.0, 0.0, 400.0, 200.0),
            ScreenRect::new(10.0, 20.0, 150.0, 500.0),
        ] {
            let view = ViewTransform::fit_fixed(bounds, rect);
            assert_eq!(view.visible, bounds);

            let inner = view.rect();
            assert!((inner.width - inner.height).abs() < 1e-3);
            assert!((inner.width - rect.width.min(rect.height)).abs() < 1e-3);

            // Centered in the pane
            let (left, top) = view.to_screen((0.0, 2.0));
            let (right, bottom) = view.to_screen((2.0, 0.0));
            assert!(((left - rect.x) - (rect.x + rect.width - right)).abs() < 1e-3);
            assert!(((top - rect.y) - (rect.y + rect.height - bottom)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_overflowing_state_falls_back_to_origin_box() {
        let state = StressState::new(1e308, 1e308, 0.0, 0.0);
        let bounds = DataBounds::for_mohr_circle(&state);
        assert!(bounds.is_finite());
        assert_eq!(bounds, DataBounds::at(0.0, 0.0).padded(AUTOSCALE_PADDING));

        let view = ViewTransform::fit(bounds, ScreenRect::new(0.0, 0.0, 300.0, 200.0));
        assert!(view.scale.is_finite());
        let (x, y) = view.to_screen((0.0, 0.0));
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(-10.0, 30.0, 8), vec![-10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
        assert_eq!(nice_ticks(0.0, 2.0, 4), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
        assert!(nice_ticks(1.0, 1.0, 5).is_empty());
        assert!(nice_ticks(0.0, f64::NAN, 5).is_empty());
    }

    #[test]
    fn test_nice_ticks_never_negative_zero() {
        let ticks = nice_ticks(-3.0, 3.0, 6);
        let zero = ticks.iter().find(|t| **t == 0.0).unwrap();
        assert!(zero.is_sign_positive());
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(20.0, 5.0), "20");
        assert_eq!(format_tick(-10.0, 10.0), "-10");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(1.0, 0.5), "1");
        assert_eq!(format_tick(0.25, 0.05), "0.25");
    }
}
