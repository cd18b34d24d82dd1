//! Shared UI components
//!
//! Contains:
//! - `plot` - Canvas helpers (axes, markers, arrows, labels)
//! - `mohr_diagram` - Mohr's circle canvas
//! - `element_diagram` - Stress element canvas

pub mod element_diagram;
pub mod mohr_diagram;
pub mod plot;
