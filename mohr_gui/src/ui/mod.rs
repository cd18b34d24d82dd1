//! UI module for the Mohr's circle explorer
//!
//! # Layout
//! - `toolbar` - Title and Reset button
//! - `shared` - Canvas programs: Mohr's circle (left) and stress element (right)
//! - `results_panel` - Numeric readout under the plots
//! - `control_panel` - Sliders and text boxes

pub mod control_panel;
pub mod results_panel;
pub mod toolbar;

// Shared components
pub mod shared;
