//! # Stress State
//!
//! The plane stress state (σx, σy, τxy) plus the element rotation angle θ,
//! and the input fields the user edits it through.
//!
//! ## Sign Convention
//!
//! Tension is positive. τxy is positive when it acts in +y on the +x face.
//! Rotation θ is counter-clockwise, in degrees.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::stress::StressState;
//!
//! let state = StressState::new(30.0, -20.0, 10.0, 34.0);
//! let unrotated = state.rotated(0.0);
//! assert!((unrotated.sigma_x - 30.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

/// Plane stress state at a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressState {
    /// Normal stress on the x face
    pub sigma_x: f64,
    /// Normal stress on the y face
    pub sigma_y: f64,
    /// In-plane shear stress
    pub tau_xy: f64,
    /// Element rotation angle (degrees)
    pub theta_deg: f64,
}

impl Default for StressState {
    fn default() -> Self {
        Self::new(30.0, -20.0, 10.0, 34.0)
    }
}

impl StressState {
    pub fn new(sigma_x: f64, sigma_y: f64, tau_xy: f64, theta_deg: f64) -> Self {
        Self {
            sigma_x,
            sigma_y,
            tau_xy,
            theta_deg,
        }
    }

    /// Read the value behind an input field
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::SigmaX => self.sigma_x,
            InputField::SigmaY => self.sigma_y,
            InputField::TauXy => self.tau_xy,
            InputField::Theta => self.theta_deg,
        }
    }

    /// Overwrite the value behind an input field
    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::SigmaX => self.sigma_x = value,
            InputField::SigmaY => self.sigma_y = value,
            InputField::TauXy => self.tau_xy = value,
            InputField::Theta => self.theta_deg = value,
        }
    }

    /// True when every component is a finite number
    pub fn is_finite(&self) -> bool {
        InputField::ALL.iter().all(|&f| self.get(f).is_finite())
    }

    /// Stress components on an element rotated counter-clockwise by `theta_deg`.
    ///
    /// The returned state keeps `theta_deg` set to the rotation applied.
    pub fn rotated(&self, theta_deg: f64) -> StressState {
        let two_theta = 2.0 * theta_deg.to_radians();
        let (sin2, cos2) = two_theta.sin_cos();
        let center = (self.sigma_x + self.sigma_y) / 2.0;
        let half_diff = (self.sigma_x - self.sigma_y) / 2.0;

        StressState {
            sigma_x: center + half_diff * cos2 + self.tau_xy * sin2,
            sigma_y: center - half_diff * cos2 - self.tau_xy * sin2,
            tau_xy: -half_diff * sin2 + self.tau_xy * cos2,
            theta_deg,
        }
    }

    /// Rotate by this state's own θ
    pub fn rotated_by_theta(&self) -> StressState {
        self.rotated(self.theta_deg)
    }
}

/// One user-editable quantity of the stress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    SigmaX,
    SigmaY,
    TauXy,
    Theta,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::SigmaX,
        InputField::SigmaY,
        InputField::TauXy,
        InputField::Theta,
    ];

    /// Fields that have a slider (θ is text-only)
    pub const SLIDERS: [InputField; 3] = [InputField::SigmaX, InputField::SigmaY, InputField::TauXy];

    pub fn has_slider(&self) -> bool {
        !matches!(self, InputField::Theta)
    }

    /// Label shown next to the slider
    pub fn slider_label(&self) -> &'static str {
        match self {
            InputField::SigmaX => "σ_x:",
            InputField::SigmaY => "σ_y:",
            InputField::TauXy => "τ_xy:",
            InputField::Theta => "θ:",
        }
    }

    /// Label shown next to the text box
    pub fn text_label(&self) -> &'static str {
        match self {
            InputField::SigmaX => "σ_x: ",
            InputField::SigmaY => "σ_y: ",
            InputField::TauXy => "τ_xy: ",
            InputField::Theta => "θ: ",
        }
    }

    /// Machine-friendly name, matches the serialized StressState field
    pub fn key(&self) -> &'static str {
        match self {
            InputField::SigmaX => "sigma_x",
            InputField::SigmaY => "sigma_y",
            InputField::TauXy => "tau_xy",
            InputField::Theta => "theta_deg",
        }
    }

    fn index(&self) -> usize {
        match self {
            InputField::SigmaX => 0,
            InputField::SigmaY => 1,
            InputField::TauXy => 2,
            InputField::Theta => 3,
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Per-field storage indexed by [`InputField`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap<T>([T; 4]);

impl<T> FieldMap<T> {
    pub fn from_fn(f: impl FnMut(InputField) -> T) -> Self {
        FieldMap(InputField::ALL.map(f))
    }
}

impl<T> std::ops::Index<InputField> for FieldMap<T> {
    type Output = T;

    fn index(&self, field: InputField) -> &T {
        &self.0[field.index()]
    }
}

impl<T> std::ops::IndexMut<InputField> for FieldMap<T> {
    fn index_mut(&mut self, field: InputField) -> &mut T {
        &mut self.0[field.index()]
    }
}

/// Format a value the way the text boxes show it: shortest form, no forced
/// decimal for whole numbers ("30", "-20", "12.5").
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    format!("{}", value)
}
