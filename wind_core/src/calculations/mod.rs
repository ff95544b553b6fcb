//! # Wind Pressure Calculations
//!
//! This module contains the two calculation stages. Each stage follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input) -> *Result` - Pure, total calculation function
//!
//! Validation is deliberately separate: shells call `Input::validate()`
//! while gathering user input, and the calculations themselves never
//! fail on constructed values.
//!
//! ## Available Calculations
//!
//! - [`velocity_pressure`] - qz at a reference height (Eq. 26.10-1)
//! - [`design_pressure`] - surface/zone/story design pressures (Eq. 27.3-1)

pub mod design_pressure;
pub mod velocity_pressure;

// Re-export commonly used types
pub use design_pressure::{
    compose_pressure, BuildingInput, BuildingPressureResult, DesignPressure, StoryPressure,
    SurfacePressure,
};
pub use velocity_pressure::{VelocityPressureResult, WindInput};
