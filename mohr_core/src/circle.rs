//! # Mohr's Circle Geometry
//!
//! Pure geometry for Mohr's circle: center, radius, the sampled outline,
//! the characteristic points, and the label text the plot shows next to them.
//!
//! Plot coordinates are (σ, τ) with the τ axis pointing up. The x-face point
//! sits at (σx, −τxy) and the y-face point at (σy, τxy).
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::circle::MohrCircle;
//! use mohr_core::stress::StressState;
//!
//! let circle = MohrCircle::from_state(&StressState::default());
//! assert_eq!(circle.center, 5.0);
//! assert!((circle.radius - 725f64.sqrt()).abs() < 1e-12);
//!
//! let outline: Vec<(f64, f64)> = circle.points(100).collect();
//! assert_eq!(outline.len(), 100);
//! ```

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::stress::{format_value, StressState};

/// Number of outline samples used by the plot
pub const DEFAULT_CIRCLE_SAMPLES: usize = 100;

/// Center and radius of Mohr's circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MohrCircle {
    /// Average normal stress, (σx + σy) / 2
    pub center: f64,
    /// sqrt(((σx − σy) / 2)² + τxy²), never negative
    pub radius: f64,
}

impl MohrCircle {
    pub fn from_state(state: &StressState) -> Self {
        let center = (state.sigma_x + state.sigma_y) / 2.0;
        let half_diff = (state.sigma_x - state.sigma_y) / 2.0;
        let radius = (half_diff * half_diff + state.tau_xy * state.tau_xy).sqrt();
        Self { center, radius }
    }

    /// Evenly spaced outline points over [0, 2π], both endpoints included.
    ///
    /// The iterator is lazy and `Clone`, so it can be restarted.
    pub fn points(&self, samples: usize) -> CirclePoints {
        CirclePoints {
            center: self.center,
            radius: self.radius,
            samples,
            index: 0,
        }
    }

    /// Principal stresses (σ1, σ2) with σ1 ≥ σ2
    pub fn principal_stresses(&self) -> (f64, f64) {
        (self.center + self.radius, self.center - self.radius)
    }

    /// Top of the circle, (center, +radius)
    pub fn max_shear_point(&self) -> (f64, f64) {
        (self.center, self.radius)
    }

    /// Bottom of the circle, (center, −radius)
    pub fn min_shear_point(&self) -> (f64, f64) {
        (self.center, -self.radius)
    }

    /// True when the circle collapses to a single point
    pub fn is_degenerate(&self) -> bool {
        self.radius == 0.0
    }
}

/// Lazy outline sampler returned by [`MohrCircle::points`].
#[derive(Debug, Clone)]
pub struct CirclePoints {
    center: f64,
    radius: f64,
    samples: usize,
    index: usize,
}

impl Iterator for CirclePoints {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.samples {
            return None;
        }
        let t = if self.samples > 1 {
            TAU * self.index as f64 / (self.samples - 1) as f64
        } else {
            0.0
        };
        self.index += 1;
        let (sin, cos) = t.sin_cos();
        Some((self.center + self.radius * cos, self.radius * sin))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CirclePoints {}

/// The two points representing the x and y faces of an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressPoints {
    /// (σx, −τxy)
    pub x_face: (f64, f64),
    /// (σy, τxy)
    pub y_face: (f64, f64),
}

impl StressPoints {
    pub fn from_state(state: &StressState) -> Self {
        Self {
            x_face: (state.sigma_x, -state.tau_xy),
            y_face: (state.sigma_y, state.tau_xy),
        }
    }
}

/// A text label attached to a data point, shifted by a fixed screen offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    /// Anchor in (σ, τ) data coordinates
    pub anchor: (f64, f64),
    /// Offset in screen points, +y up
    pub offset: (f32, f32),
}

/// Labels for the two stress points and the two shear extremes.
pub fn annotations(state: &StressState, circle: &MohrCircle) -> [Annotation; 4] {
    let points = StressPoints::from_state(state);
    [
        Annotation {
            text: format!("({}, {:.2})", format_value(state.sigma_x), -state.tau_xy),
            anchor: points.x_face,
            offset: (10.0, 10.0),
        },
        Annotation {
            text: format!("({}, {:.2})", format_value(state.sigma_y), state.tau_xy),
            anchor: points.y_face,
            offset: (10.0, -10.0),
        },
        Annotation {
            text: format!("({:.2}, {:.2})", circle.center, circle.radius),
            anchor: circle.max_shear_point(),
            offset: (10.0, 10.0),
        },
        Annotation {
            text: format!("({:.2}, {:.2})", circle.center, -circle.radius),
            anchor: circle.min_shear_point(),
            offset: (10.0, -10.0),
        },
    ]
}

/// Full numeric summary of a stress state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MohrAnalysis {
    pub state: StressState,
    pub center: f64,
    pub radius: f64,
    pub sigma_1: f64,
    pub sigma_2: f64,
    /// Angle from the x axis to the σ1 direction (degrees, CCW)
    pub principal_angle_deg: f64,
    /// Maximum in-plane shear stress (equals the radius)
    pub max_shear: f64,
    /// Stresses on the element rotated by θ
    pub rotated: StressState,
}

impl MohrAnalysis {
    pub fn new(state: &StressState) -> Self {
        let circle = MohrCircle::from_state(state);
        let (sigma_1, sigma_2) = circle.principal_stresses();
        let principal_angle_deg =
            0.5 * (2.0 * state.tau_xy).atan2(state.sigma_x - state.sigma_y).to_degrees();

        Self {
            state: *state,
            center: circle.center,
            radius: circle.radius,
            sigma_1,
            sigma_2,
            principal_angle_deg,
            max_shear: circle.radius,
            rotated: state.rotated_by_theta(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn radius_of(sx: f64, sy: f64, txy: f64) -> f64 {
        (((sx - sy) / 2.0).powi(2) + txy.powi(2)).sqrt()
    }

    #[test]
    fn test_initial_state_scenario() {
        let circle = MohrCircle::from_state(&StressState::default());
        assert_eq!(circle.center, 5.0);
        assert!((circle.radius - 725f64.sqrt()).abs() < EPS);
        assert!((circle.radius - 26.93).abs() < 0.01);
    }

    #[test]
    fn test_degenerate_circle() {
        let circle = MohrCircle::from_state(&StressState::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(circle.center, 0.0);
        assert_eq!(circle.radius, 0.0);
        assert!(circle.is_degenerate());
        assert!(circle.points(100).all(|(x, y)| x == 0.0 && y == 0.0));
    }

    #[test]
    fn test_radius_and_center_over_slider_range() {
        let values = [-100.0, -55.5, -1.0, 0.0, 0.5, 37.0, 100.0];
        for &sx in &values {
            for &sy in &values {
                for &txy in &values {
                    let state = StressState::new(sx, sy, txy, 0.0);
                    let circle = MohrCircle::from_state(&state);
                    assert_eq!(circle.center, (sx + sy) / 2.0);
                    assert!(circle.radius >= 0.0);
                    assert!((circle.radius - radius_of(sx, sy, txy)).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn test_points_span_full_turn() {
        let circle = MohrCircle { center: 5.0, radius: 2.0 };
        let points: Vec<_> = circle.points(DEFAULT_CIRCLE_SAMPLES).collect();
        assert_eq!(points.len(), 100);

        let first = points[0];
        let last = points[99];
        assert!((first.0 - 7.0).abs() < EPS && first.1.abs() < EPS);
        assert!((last.0 - 7.0).abs() < EPS && last.1.abs() < EPS);

        for (x, y) in points {
            let r = ((x - 5.0).powi(2) + y.powi(2)).sqrt();
            assert!((r - 2.0).abs() < EPS);
        }
    }

    #[test]
    fn test_points_are_restartable() {
        let sampler = MohrCircle { center: -3.0, radius: 4.0 }.points(10);
        assert_eq!(sampler.len(), 10);
        let a: Vec<_> = sampler.clone().collect();
        let b: Vec<_> = sampler.collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stress_points_and_shear_points() {
        let state = StressState::new(30.0, -20.0, 10.0, 34.0);
        let points = StressPoints::from_state(&state);
        assert_eq!(points.x_face, (30.0, -10.0));
        assert_eq!(points.y_face, (-20.0, 10.0));

        let circle = MohrCircle::from_state(&state);
        // The stress points are mirror images through the center
        assert!((points.x_face.0 + points.y_face.0 - 2.0 * circle.center).abs() < EPS);
        assert_eq!(points.x_face.1, -points.y_face.1);

        assert_eq!(circle.max_shear_point(), (circle.center, circle.radius));
        assert_eq!(circle.min_shear_point(), (circle.center, -circle.radius));
    }

    #[test]
    fn test_stress_points_lie_on_circle() {
        let state = StressState::new(-70.0, 12.5, -33.0, 0.0);
        let circle = MohrCircle::from_state(&state);
        let points = StressPoints::from_state(&state);
        for (x, y) in [points.x_face, points.y_face] {
            let r = ((x - circle.center).powi(2) + y.powi(2)).sqrt();
            assert!((r - circle.radius).abs() < EPS);
        }
    }

    #[test]
    fn test_annotation_text() {
        let state = StressState::default();
        let circle = MohrCircle::from_state(&state);
        let labels = annotations(&state, &circle);
        assert_eq!(labels[0].text, "(30, -10.00)");
        assert_eq!(labels[1].text, "(-20, 10.00)");
        assert_eq!(labels[2].text, "(5.00, 26.93)");
        assert_eq!(labels[3].text, "(5.00, -26.93)");
        assert_eq!(labels[0].offset, (10.0, 10.0));
        assert_eq!(labels[3].offset, (10.0, -10.0));
    }

    #[test]
    fn test_analysis_principal_values() {
        let analysis = MohrAnalysis::new(&StressState::default());
        assert!((analysis.sigma_1 - (5.0 + 725f64.sqrt())).abs() < EPS);
        assert!((analysis.sigma_2 - (5.0 - 725f64.sqrt())).abs() < EPS);
        assert_eq!(analysis.max_shear, analysis.radius);

        // Rotating onto the principal direction removes the shear
        let on_principal = analysis.state.rotated(analysis.principal_angle_deg);
        assert!(on_principal.tau_xy.abs() < 1e-9);
        assert!((on_principal.sigma_x - analysis.sigma_1).abs() < 1e-9);
    }

    #[test]
    fn test_rotated_points_lie_on_circle() {
        let state = StressState::new(30.0, -20.0, 10.0, 0.0);
        let circle = MohrCircle::from_state(&state);
        for theta in [0.0, 17.0, 34.0, 90.0, -135.0] {
            let rotated = StressPoints::from_state(&state.rotated(theta));
            for (x, y) in [rotated.x_face, rotated.y_face] {
                let r = ((x - circle.center).powi(2) + y.powi(2)).sqrt();
                assert!((r - circle.radius).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_analysis_serialization() {
        let analysis = MohrAnalysis::new(&StressState::default());
        let json = serde_json::to_string(&analysis).unwrap();
        assert!(json.contains("\"center\":5.0"));
        assert!(json.contains("\"rotated\":{"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["state"]["sigma_x"], 30.0);
    }
}
