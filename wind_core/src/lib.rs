//! # wind_core - Wind Load Calculation Engine
//!
//! `wind_core` is the computational heart of WindCalc, providing preliminary
//! MWFRS wind pressures for rectangular buildings with a clean, LLM-friendly
//! API. It implements a simplified rendition of the ASCE 7-22 directional
//! procedure: velocity pressure at height, exposure coefficients, wall and
//! roof pressure coefficients by plan aspect ratio, and signed design
//! pressure pairs per surface, zone, and story.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Total**: validated inputs never fail; clamps and fallbacks are explicit
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured validation errors, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use wind_core::calculations::design_pressure::{calculate, BuildingInput};
//! use wind_core::calculations::velocity_pressure::WindInput;
//! use wind_core::coefficients::{PlanGeometry, RoofType};
//! use wind_core::factors::{EnclosureType, ExposureCategory, RiskCategory};
//!
//! let wind = WindInput::new(115.0, ExposureCategory::B, 30.0, RiskCategory::II);
//! let input = BuildingInput::new(
//!     "Office A",
//!     wind,
//!     PlanGeometry::new(100.0, 50.0),
//!     2,
//!     15.0,
//!     RoofType::Flat,
//!     EnclosureType::Enclosed,
//! );
//!
//! input.validate().unwrap();
//! let result = calculate(&input);
//! println!("{}", result.format_report());
//! ```
//!
//! ## Modules
//!
//! - [`factors`] - exposure, risk, enclosure, and gust factors (Kz, I, GCpi, G)
//! - [`coefficients`] - wall and roof Cp tables keyed by plan aspect ratio
//! - [`calculations`] - velocity pressure and design pressure evaluation
//! - [`errors`] - structured validation error types

pub mod calculations;
pub mod coefficients;
pub mod errors;
pub mod factors;

// Re-export commonly used types at crate root for convenience
pub use calculations::{BuildingInput, BuildingPressureResult, VelocityPressureResult, WindInput};
pub use errors::{WindError, WindResult};
