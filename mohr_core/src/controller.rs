//! # Stress Controller
//!
//! Owns the one shared [`StressState`] together with the text-box buffers,
//! and keeps every slider/text pair in agreement.
//!
//! ## Update Rules
//!
//! - Slider moved: the state takes the value, the paired text buffer is
//!   rewritten to show it.
//! - Text edited: only the buffer changes. Nothing is parsed until submit.
//! - Text submitted: the buffer is parsed. A non-numeric (or non-finite)
//!   entry is rejected with [`MohrError::InvalidNumericInput`] and nothing
//!   else changes, the buffer keeps what was typed. A valid entry updates the
//!   state and the slider, and the buffer is normalized to the applied value.
//!
//! With `clamp_text_to_slider` on, submitted σx/σy/τxy values are clamped to
//! the slider range so state, slider and text always agree.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::controller::StressController;
//! use mohr_core::settings::MohrSettings;
//! use mohr_core::stress::InputField;
//!
//! let mut controller = StressController::new(MohrSettings::default()).unwrap();
//!
//! controller.set_from_slider(InputField::SigmaX, 42.5);
//! assert_eq!(controller.text(InputField::SigmaX), "42.5");
//!
//! controller.edit_text(InputField::SigmaY, "abc");
//! assert!(controller.submit_text(InputField::SigmaY).is_err());
//! assert_eq!(controller.state().sigma_y, -20.0);
//! ```

use tracing::debug;

use crate::circle::MohrAnalysis;
use crate::errors::{MohrError, MohrResult};
use crate::settings::MohrSettings;
use crate::stress::{format_value, FieldMap, InputField, StressState};

/// Shared state plus the text shown in each text box.
#[derive(Debug, Clone)]
pub struct StressController {
    settings: MohrSettings,
    state: StressState,
    text: FieldMap<String>,
}

impl StressController {
    /// Create a controller seeded with `settings.initial`.
    pub fn new(settings: MohrSettings) -> MohrResult<Self> {
        settings.validate()?;
        Ok(Self::from_validated(settings))
    }

    fn from_validated(settings: MohrSettings) -> Self {
        let state = settings.initial;
        let text = FieldMap::from_fn(|field| format_value(state.get(field)));
        Self { settings, state, text }
    }

    /// Restore the initial state and rewrite every text box
    pub fn reset(&mut self) {
        let initial = self.settings.initial;
        for field in InputField::ALL {
            self.apply(field, initial.get(field));
        }
    }

    pub fn state(&self) -> &StressState {
        &self.state
    }

    pub fn settings(&self) -> &MohrSettings {
        &self.settings
    }

    /// Current content of a text box
    pub fn text(&self, field: InputField) -> &str {
        &self.text[field]
    }

    /// Position of a slider, `None` for θ which has no slider.
    ///
    /// A slider cannot leave its range, so an unclamped state value shows
    /// at the nearest bound.
    pub fn slider_value(&self, field: InputField) -> Option<f64> {
        field
            .has_slider()
            .then(|| self.settings.clamp_to_slider(self.state.get(field)))
    }

    /// Numeric summary of the current state
    pub fn analysis(&self) -> MohrAnalysis {
        MohrAnalysis::new(&self.state)
    }

    /// Replace a text buffer while the user types
    pub fn edit_text(&mut self, field: InputField, text: impl Into<String>) {
        self.text[field] = text.into();
    }

    /// Apply a slider movement and mirror it into the paired text box.
    ///
    /// The value is clamped to the slider range and rounded to the step's
    /// decimals. Returns the value written to the state.
    pub fn set_from_slider(&mut self, field: InputField, value: f64) -> f64 {
        let value = self.settings.snap_to_step(self.settings.clamp_to_slider(value));
        self.apply(field, value);
        value
    }

    /// Parse and apply the text currently in a text box.
    ///
    /// On success returns the value written to the state. On failure the
    /// state, slider and text buffer are left as they were.
    pub fn submit_text(&mut self, field: InputField) -> MohrResult<f64> {
        let raw = &self.text[field];
        let parsed = parse_stress(raw).ok_or_else(|| MohrError::invalid_numeric_input(field.key(), raw.as_str()))?;

        let value = if field.has_slider() && self.settings.clamp_text_to_slider {
            let clamped = self.settings.clamp_to_slider(parsed);
            if clamped != parsed {
                debug!(%field, parsed, clamped, "Clamped submitted value to slider range");
            }
            clamped
        } else {
            parsed
        };

        self.apply(field, value);
        Ok(value)
    }

    /// Type a complete string and press Enter in one step.
    ///
    /// Same outcome as [`edit_text`](Self::edit_text) followed by
    /// [`submit_text`](Self::submit_text): rejected text stays in the box.
    pub fn submit(&mut self, field: InputField, text: impl Into<String>) -> MohrResult<f64> {
        self.edit_text(field, text);
        self.submit_text(field)
    }

    /// True when the text box, slider and state agree for `field`
    pub fn is_in_sync(&self, field: InputField) -> bool {
        let value = self.state.get(field);
        let text_agrees = parse_stress(&self.text[field]) == Some(value);
        let slider_agrees = self.slider_value(field).map_or(true, |v| v == value);
        text_agrees && slider_agrees
    }

    fn apply(&mut self, field: InputField, value: f64) {
        self.state.set(field, value);
        self.text[field] = format_value(value);
        debug!(%field, value, "Stress state updated");
    }
}

impl Default for StressController {
    fn default() -> Self {
        Self::from_validated(MohrSettings::default())
    }
}

/// Parse text box content as a finite real number.
pub fn parse_stress(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> StressController {
        StressController::new(MohrSettings::default()).unwrap()
    }

    #[test]
    fn test_initial_text_values() {
        let c = controller();
        assert_eq!(c.text(InputField::SigmaX), "30");
        assert_eq!(c.text(InputField::SigmaY), "-20");
        assert_eq!(c.text(InputField::TauXy), "10");
        assert_eq!(c.text(InputField::Theta), "34");
        assert_eq!(c.slider_value(InputField::SigmaX), Some(30.0));
        assert_eq!(c.slider_value(InputField::Theta), None);
        assert!(InputField::ALL.iter().all(|&f| c.is_in_sync(f)));
    }

    #[test]
    fn test_slider_updates_state_and_text() {
        let mut c = controller();
        c.set_from_slider(InputField::TauXy, -35.5);
        assert_eq!(c.state().tau_xy, -35.5);
        assert_eq!(c.text(InputField::TauXy), "-35.5");
        assert_eq!(c.slider_value(InputField::TauXy), Some(-35.5));

        c.set_from_slider(InputField::SigmaY, 45.0);
        assert_eq!(c.text(InputField::SigmaY), "45");
        assert!(c.is_in_sync(InputField::SigmaY));
    }

    #[test]
    fn test_valid_text_updates_state_and_slider() {
        let mut c = controller();
        c.edit_text(InputField::SigmaX, " 12.25 ");
        assert_eq!(c.submit_text(InputField::SigmaX), Ok(12.25));
        assert_eq!(c.state().sigma_x, 12.25);
        assert_eq!(c.slider_value(InputField::SigmaX), Some(12.25));
        assert_eq!(c.text(InputField::SigmaX), "12.25");
        assert!(c.is_in_sync(InputField::SigmaX));
    }

    #[test]
    fn test_invalid_text_is_discarded() {
        let mut c = controller();
        c.edit_text(InputField::SigmaX, "abc");
        let err = c.submit_text(InputField::SigmaX).unwrap_err();
        assert_eq!(err, MohrError::invalid_numeric_input("sigma_x", "abc"));

        assert_eq!(c.state().sigma_x, 30.0);
        assert_eq!(c.slider_value(InputField::SigmaX), Some(30.0));
        // The typed text stays visible
        assert_eq!(c.text(InputField::SigmaX), "abc");
    }

    #[test]
    fn test_non_finite_text_is_rejected() {
        let mut c = controller();
        for text in ["nan", "inf", "-infinity", "", "1e400"] {
            c.edit_text(InputField::TauXy, text);
            assert!(c.submit_text(InputField::TauXy).is_err(), "{text} should be rejected");
            assert_eq!(c.state().tau_xy, 10.0);
            assert_eq!(c.slider_value(InputField::TauXy), Some(10.0));
            assert_eq!(c.text(InputField::TauXy), text);
        }
    }

    #[test]
    fn test_one_step_submit_keeps_rejected_text() {
        let mut c = controller();
        assert!(c.submit(InputField::SigmaY, "twelve").is_err());
        assert_eq!(c.state().sigma_y, -20.0);
        assert_eq!(c.text(InputField::SigmaY), "twelve");
    }

    #[test]
    fn test_fractional_slider_value_round_trips_to_text() {
        let mut c = controller();
        assert_eq!(c.set_from_slider(InputField::SigmaX, 12.34), 12.34);
        assert_eq!(c.text(InputField::SigmaX), "12.34");

        // Float noise from the slider's step arithmetic is rounded away
        assert_eq!(c.set_from_slider(InputField::TauXy, 12.340000000000003), 12.34);
        assert_eq!(c.text(InputField::TauXy), "12.34");
        assert!(c.is_in_sync(InputField::TauXy));

        assert_eq!(c.set_from_slider(InputField::SigmaY, 250.0), 100.0);
        assert_eq!(c.text(InputField::SigmaY), "100");
    }

    #[test]
    fn test_text_submission_is_clamped_to_slider_range() {
        let mut c = controller();
        assert_eq!(c.submit(InputField::SigmaY, "150"), Ok(100.0));
        assert_eq!(c.state().sigma_y, 100.0);
        assert_eq!(c.text(InputField::SigmaY), "100");
        assert!(c.is_in_sync(InputField::SigmaY));
    }

    #[test]
    fn test_unclamped_mode_keeps_typed_value() {
        let settings = MohrSettings {
            clamp_text_to_slider: false,
            ..MohrSettings::default()
        };
        let mut c = StressController::new(settings).unwrap();
        assert_eq!(c.submit(InputField::SigmaX, "-250"), Ok(-250.0));
        assert_eq!(c.state().sigma_x, -250.0);
        assert_eq!(c.slider_value(InputField::SigmaX), Some(-100.0));
        assert!(!c.is_in_sync(InputField::SigmaX));
    }

    #[test]
    fn test_theta_is_text_only_and_unclamped() {
        let mut c = controller();
        assert_eq!(c.submit(InputField::Theta, "270"), Ok(270.0));
        assert_eq!(c.state().theta_deg, 270.0);
        assert_eq!(c.slider_value(InputField::Theta), None);
        assert!(c.is_in_sync(InputField::Theta));
    }

    #[test]
    fn test_theta_does_not_change_circle() {
        let mut c = controller();
        let before = c.analysis();
        c.submit(InputField::Theta, "10").unwrap();
        let after = c.analysis();
        assert_eq!(before.center, after.center);
        assert_eq!(before.radius, after.radius);
        assert_ne!(before.rotated, after.rotated);
    }

    #[test]
    fn test_edit_without_submit_leaves_state() {
        let mut c = controller();
        c.edit_text(InputField::SigmaX, "77");
        assert_eq!(c.state().sigma_x, 30.0);
        assert_eq!(c.slider_value(InputField::SigmaX), Some(30.0));
    }

    #[test]
    fn test_slider_after_bad_text_resyncs() {
        let mut c = controller();
        c.edit_text(InputField::SigmaX, "oops");
        let _ = c.submit_text(InputField::SigmaX);
        c.set_from_slider(InputField::SigmaX, -5.0);
        assert_eq!(c.text(InputField::SigmaX), "-5");
        assert!(c.is_in_sync(InputField::SigmaX));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let settings = MohrSettings {
            circle_samples: 0,
            ..MohrSettings::default()
        };
        assert!(StressController::new(settings).is_err());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut c = controller();
        c.set_from_slider(InputField::SigmaX, -60.0);
        c.submit(InputField::Theta, "5").unwrap();
        c.edit_text(InputField::TauXy, "half-typed");
        c.reset();
        assert_eq!(*c.state(), StressState::default());
        assert_eq!(c.text(InputField::SigmaX), "30");
        assert_eq!(c.text(InputField::TauXy), "10");
        assert!(InputField::ALL.iter().all(|&f| c.is_in_sync(f)));
    }

    #[test]
    fn test_default_matches_default_settings() {
        let c = StressController::default();
        assert_eq!(*c.state(), *controller().state());
        assert_eq!(c.text(InputField::Theta), "34");
    }

    #[test]
    fn test_parse_stress() {
        assert_eq!(parse_stress("30"), Some(30.0));
        assert_eq!(parse_stress(" -2.5e1 "), Some(-25.0));
        assert_eq!(parse_stress("abc"), None);
        assert_eq!(parse_stress("NaN"), None);
    }
}
