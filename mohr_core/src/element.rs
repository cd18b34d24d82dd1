//! # Stress Element Diagram
//!
//! Geometry for the stress-element view: a unit square centered at (1, 1)
//! inside a fixed [0, 2] × [0, 2] view, with arrows whose length is the
//! stress component times a fixed scale.
//!
//! Arrow direction encodes sign. Nothing is clamped, so a component larger
//! than roughly `0.25 / scale` pushes its arrows past the square.

use serde::{Deserialize, Serialize};

use crate::stress::{InputField, StressState};

/// Default arrow length per unit stress
pub const DEFAULT_ARROW_SCALE: f64 = 0.002;

/// Fixed view extent on both axes
pub const VIEW_MIN: f64 = 0.0;
pub const VIEW_MAX: f64 = 2.0;

/// Lower-left corner and side of the square element
pub const SQUARE_ORIGIN: (f64, f64) = (0.5, 0.5);
pub const SQUARE_SIDE: f64 = 1.0;

/// Which face family an arrow acts on. Drives the arrow color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    /// Left/right faces (normal to x)
    X,
    /// Top/bottom faces (normal to y)
    Y,
}

/// One arrow in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    /// Tail position
    pub origin: (f64, f64),
    /// Tail-to-tip vector
    pub delta: (f64, f64),
    pub face: Face,
    pub component: InputField,
}

impl Arrow {
    pub fn tip(&self) -> (f64, f64) {
        (self.origin.0 + self.delta.0, self.origin.1 + self.delta.1)
    }

    pub fn length(&self) -> f64 {
        self.delta.0.hypot(self.delta.1)
    }
}

/// The eight arrows of the element diagram: two for σx, two for σy and four
/// for τxy.
pub fn stress_arrows(state: &StressState, scale: f64) -> [Arrow; 8] {
    let sx = state.sigma_x * scale;
    let sy = state.sigma_y * scale;
    let txy = state.tau_xy * scale;

    let arrow = |origin, delta, face, component| Arrow {
        origin,
        delta,
        face,
        component,
    };

    [
        // σx on the left and right faces
        arrow((0.25 + sx, 1.0), (-2.0 * sx, 0.0), Face::X, InputField::SigmaX),
        arrow((1.75 - sx, 1.0), (2.0 * sx, 0.0), Face::X, InputField::SigmaX),
        // σy on the top and bottom faces
        arrow((1.0, 1.75 - sy), (0.0, 2.0 * sy), Face::Y, InputField::SigmaY),
        arrow((1.0, 0.25 + sy), (0.0, -2.0 * sy), Face::Y, InputField::SigmaY),
        // τxy along the top and bottom faces
        arrow((1.0 - txy, 1.75), (2.0 * txy, 0.0), Face::Y, InputField::TauXy),
        arrow((1.0 + txy, 0.25), (-2.0 * txy, 0.0), Face::Y, InputField::TauXy),
        // τxy along the left and right faces
        arrow((0.25, 1.0 + txy), (0.0, -2.0 * txy), Face::X, InputField::TauXy),
        arrow((1.75, 1.0 - txy), (0.0, 2.0 * txy), Face::X, InputField::TauXy),
    ]
}
