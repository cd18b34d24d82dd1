//! # mohr_core - Mohr's Circle Engine
//!
//! `mohr_core` holds everything about the Mohr's circle explorer that does
//! not depend on a GUI toolkit: the stress state, circle geometry, the
//! stress-element arrows, plot axis math, and the controller that keeps
//! sliders and text boxes in agreement.
//!
//! ## Design Philosophy
//!
//! - **Toolkit-free**: renderers only consume plain data from this crate
//! - **Pure geometry**: every derived quantity is recomputed from the state
//! - **One owner**: the [`StressController`] is the only place state changes
//!
//! ## Quick Start
//!
//! ```rust
//! use mohr_core::{MohrCircle, StressState};
//!
//! let circle = MohrCircle::from_state(&StressState::default());
//! let (sigma_1, sigma_2) = circle.principal_stresses();
//! assert!(sigma_1 > sigma_2);
//! ```
//!
//! ## Modules
//!
//! - [`stress`] - Stress state, input fields, value formatting
//! - [`circle`] - Center/radius, outline sampling, annotations, analysis
//! - [`element`] - Stress-element arrows
//! - [`axes`] - Data bounds, equal-aspect transform, tick placement
//! - [`controller`] - State owner and slider/text synchronization
//! - [`settings`] - Tunable parameters
//! - [`errors`] - Structured error types

pub mod axes;
pub mod circle;
pub mod controller;
pub mod element;
pub mod errors;
pub mod settings;
pub mod stress;

// Re-export commonly used types at crate root for convenience
pub use circle::{MohrAnalysis, MohrCircle, StressPoints};
pub use controller::StressController;
pub use errors::{MohrError, MohrResult};
pub use settings::MohrSettings;
pub use stress::{InputField, StressState};
