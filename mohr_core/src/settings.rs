//! # Settings
//!
//! Tunable parameters for the explorer. Built in code with [`Default`];
//! serializable so a host can show or persist them if it wants to.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::settings::MohrSettings;
//!
//! let settings = MohrSettings::default();
//! assert_eq!(settings.slider_min, -100.0);
//! assert!(settings.validate().is_ok());
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::circle::DEFAULT_CIRCLE_SAMPLES;
use crate::element::DEFAULT_ARROW_SCALE;
use crate::errors::{MohrError, MohrResult};
use crate::stress::StressState;

/// Explorer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MohrSettings {
    /// Stress state shown at startup
    pub initial: StressState,

    /// Lower slider bound for σx, σy, τxy
    pub slider_min: f64,

    /// Upper slider bound for σx, σy, τxy
    pub slider_max: f64,

    /// Slider increment. Fine enough that the sliders act as continuous.
    pub slider_step: f64,

    /// Element arrow length per unit stress
    pub arrow_scale: f64,

    /// Number of points sampled on the circle outline
    pub circle_samples: usize,

    /// Clamp values submitted through a text box into the slider range.
    ///
    /// When false, the state keeps the typed value while the slider shows it
    /// clamped.
    pub clamp_text_to_slider: bool,
}

impl Default for MohrSettings {
    fn default() -> Self {
        Self {
            initial: StressState::default(),
            slider_min: -100.0,
            slider_max: 100.0,
            slider_step: 0.01,
            arrow_scale: DEFAULT_ARROW_SCALE,
            circle_samples: DEFAULT_CIRCLE_SAMPLES,
            clamp_text_to_slider: true,
        }
    }
}

impl MohrSettings {
    pub fn slider_range(&self) -> RangeInclusive<f64> {
        self.slider_min..=self.slider_max
    }

    /// Clamp a value into the slider range
    pub fn clamp_to_slider(&self, value: f64) -> f64 {
        value.clamp(self.slider_min, self.slider_max)
    }

    /// Round a slider value to the decimals the step resolves, so a drag
    /// landing on 12.340000000000003 reads back as 12.34.
    pub fn snap_to_step(&self, value: f64) -> f64 {
        let decimals = (-self.slider_step.log10().floor()).clamp(0.0, 15.0) as i32;
        let factor = 10f64.powi(decimals);
        let snapped = (value * factor).round() / factor;
        if snapped.is_finite() {
            snapped
        } else {
            value
        }
    }

    /// Check the settings for values the explorer cannot work with.
    pub fn validate(&self) -> MohrResult<()> {
        if !self.slider_min.is_finite() || !self.slider_max.is_finite() || self.slider_min >= self.slider_max {
            return Err(MohrError::invalid_setting(
                "slider_range",
                format!("{}..={}", self.slider_min, self.slider_max),
                "Slider bounds must be finite with min < max",
            ));
        }

        if self.slider_step <= 0.0 || !self.slider_step.is_finite() {
            return Err(MohrError::invalid_setting(
                "slider_step",
                self.slider_step.to_string(),
                "Step must be positive",
            ));
        }

        if !self.arrow_scale.is_finite() {
            return Err(MohrError::invalid_setting(
                "arrow_scale",
                self.arrow_scale.to_string(),
                "Arrow scale must be finite",
            ));
        }

        if self.circle_samples < 2 {
            return Err(MohrError::invalid_setting(
                "circle_samples",
                self.circle_samples.to_string(),
                "At least 2 samples are needed to draw the outline",
            ));
        }

        if !self.initial.is_finite() {
            return Err(MohrError::invalid_setting(
                "initial",
                format!("{:?}", self.initial),
                "Initial stress state must be finite",
            ));
        }

        Ok(())
    }
}
