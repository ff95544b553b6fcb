//! # Velocity Pressure Calculation
//!
//! Computes the velocity pressure qz at a reference height per ASCE
//! 7-22 Eq. 26.10-1.
//!
//! ## Assumptions
//!
//! - Basic wind speed V is the 3-second gust map value in mph
//! - Kz follows the power-law form of Table 26.10-1, height clamped to 15-500 ft
//! - The importance factor multiplies qz directly
//! - Kd is NOT part of qz; it is applied at the design pressure step
//! - Rigid building (no natural-frequency gust refinement)
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use wind_core::calculations::velocity_pressure::{calculate, WindInput};
//! use wind_core::factors::{ExposureCategory, RiskCategory};
//!
//! let input = WindInput::new(115.0, ExposureCategory::B, 15.0, RiskCategory::II);
//! let result = calculate(&input);
//!
//! println!("qz: {:.3} psf", result.velocity_pressure_psf);
//! println!("Kz: {:.3}", result.kz_used);
//! for note in &result.pressure_notes {
//!     println!("  {}", note);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{WindError, WindResult};
use crate::factors::{asce_ref, round3, ExposureCategory, RiskCategory};

/// Air-density constant of Eq. 26.10-1 in US customary units
/// (psf per mph² of the 3-second gust speed)
pub const VELOCITY_PRESSURE_CONSTANT: f64 = 0.00256;

/// Directionality factor Kd for building MWFRS per ASCE 7-22 Table 26.6-1
pub const DEFAULT_DIRECTIONALITY_FACTOR: f64 = 0.85;

/// Input parameters for a velocity pressure calculation.
///
/// All inputs use US customary units. The factors default to the
/// common building case (Kd = 0.85, Kzt = 1.0, Kh = 1.0, no override)
/// and are adjusted through the `with_*` builders.
///
/// ## JSON Example
///
/// ```json
/// {
///   "wind_speed_mph": 115.0,
///   "exposure": "B",
///   "height_ft": 30.0,
///   "risk_category": "II",
///   "directionality_factor": 0.85,
///   "topographic_factor": 1.0,
///   "kh_factor": 1.0,
///   "override_kz": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindInput {
    /// Basic wind speed V in mph (3-second gust)
    pub wind_speed_mph: f64,

    /// Terrain exposure category
    pub exposure: ExposureCategory,

    /// Reference height z in feet. Heights outside 15-500 ft are
    /// silently clamped by the Kz table, not rejected.
    pub height_ft: f64,

    /// Risk category selecting the importance factor
    pub risk_category: RiskCategory,

    /// Directionality factor Kd. Recorded in the notes and applied at
    /// the design pressure step, never inside qz.
    pub directionality_factor: f64,

    /// Topographic factor Kzt (1.0 for flat sites)
    pub topographic_factor: f64,

    /// Auxiliary height multiplier Kh (1.0 unless a project-specific
    /// adjustment applies)
    pub kh_factor: f64,

    /// Manual Kz override. A finite value displaces the computed Kz;
    /// a non-finite value is silently ignored.
    pub override_kz: Option<f64>,
}

impl WindInput {
    /// Create an input with the default factors (Kd = 0.85, Kzt = 1.0,
    /// Kh = 1.0, no override)
    pub fn new(
        wind_speed_mph: f64,
        exposure: ExposureCategory,
        height_ft: f64,
        risk_category: RiskCategory,
    ) -> Self {
        Self {
            wind_speed_mph,
            exposure,
            height_ft,
            risk_category,
            directionality_factor: DEFAULT_DIRECTIONALITY_FACTOR,
            topographic_factor: 1.0,
            kh_factor: 1.0,
            override_kz: None,
        }
    }

    /// Set the directionality factor Kd
    pub fn with_directionality(mut self, kd: f64) -> Self {
        self.directionality_factor = kd;
        self
    }

    /// Set the topographic factor Kzt
    pub fn with_topographic(mut self, kzt: f64) -> Self {
        self.topographic_factor = kzt;
        self
    }

    /// Set the auxiliary height multiplier Kh
    pub fn with_kh(mut self, kh: f64) -> Self {
        self.kh_factor = kh;
        self
    }

    /// Set a manual Kz override
    pub fn with_override_kz(mut self, kz: f64) -> Self {
        self.override_kz = Some(kz);
        self
    }

    /// Same site and factors evaluated at a different reference height
    pub fn at_height(&self, height_ft: f64) -> Self {
        let mut input = self.clone();
        input.height_ft = height_ft;
        input
    }

    /// Validate input parameters.
    ///
    /// The calculation itself is total; shells call this before
    /// accepting user input. A non-finite override is not an error
    /// here because the calculation defines it as "ignored".
    pub fn validate(&self) -> WindResult<()> {
        if !self.wind_speed_mph.is_finite() || self.wind_speed_mph <= 0.0 {
            return Err(WindError::invalid_input(
                "wind_speed_mph",
                self.wind_speed_mph.to_string(),
                "Wind speed must be a positive number",
            ));
        }
        if self.wind_speed_mph >= 300.0 {
            return Err(WindError::invalid_input(
                "wind_speed_mph",
                self.wind_speed_mph.to_string(),
                "Wind speed exceeds 300 mph - outside the basic wind speed maps",
            ));
        }
        if !self.height_ft.is_finite() || self.height_ft <= 0.0 {
            return Err(WindError::invalid_input(
                "height_ft",
                self.height_ft.to_string(),
                "Height must be a positive number",
            ));
        }
        if !self.directionality_factor.is_finite()
            || self.directionality_factor <= 0.0
            || self.directionality_factor > 1.0
        {
            return Err(WindError::invalid_input(
                "directionality_factor",
                self.directionality_factor.to_string(),
                "Kd must be in (0, 1]",
            ));
        }
        if !self.topographic_factor.is_finite() || self.topographic_factor < 1.0 {
            return Err(WindError::invalid_input(
                "topographic_factor",
                self.topographic_factor.to_string(),
                "Kzt must be a finite number >= 1.0",
            ));
        }
        if !self.kh_factor.is_finite() || self.kh_factor <= 0.0 {
            return Err(WindError::invalid_input(
                "kh_factor",
                self.kh_factor.to_string(),
                "Kh must be a positive number",
            ));
        }
        if let Some(kz) = self.override_kz {
            if kz.is_finite() && !(kz > 0.3 && kz < 3.0) {
                return Err(WindError::invalid_input(
                    "override_kz",
                    kz.to_string(),
                    "Manual Kz must be between 0.3 and 3.0",
                ));
            }
        }
        Ok(())
    }
}

/// Result of a velocity pressure calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocityPressureResult {
    /// Velocity pressure qz in psf, rounded to 3 decimals
    pub velocity_pressure_psf: f64,

    /// The Kz that entered the formula (manual override when one was
    /// accepted, otherwise the computed value)
    pub kz_used: f64,

    /// The Kz the exposure/height table produces, reported even when
    /// an override displaced it
    pub kz_computed: f64,

    /// Importance factor I for the risk category
    pub importance_factor: f64,

    /// Whether a finite manual Kz override displaced the computed value
    pub override_applied: bool,

    /// Ordered human-readable notes: factor summary, override flag
    /// (only when an override is in use), formula citation
    pub pressure_notes: Vec<String>,
}

/// Calculate the velocity pressure qz for the given input.
///
/// Total function: every finite-or-not input produces a result. Range
/// validation is the caller's concern via [`WindInput::validate`]; the
/// only numeric anomaly handled here is a non-finite override, which
/// silently falls back to the computed Kz.
pub fn calculate(input: &WindInput) -> VelocityPressureResult {
    let kz_computed = input.exposure.kz(input.height_ft);
    let override_kz = input.override_kz.filter(|kz| kz.is_finite());
    let kz = override_kz.unwrap_or(kz_computed);
    let importance = input.risk_category.importance_factor();

    let qz_base = VELOCITY_PRESSURE_CONSTANT
        * kz
        * input.topographic_factor
        * input.kh_factor
        * input.wind_speed_mph.powi(2);
    let qz = round3(qz_base * importance);

    let mut notes = Vec::with_capacity(3);
    notes.push(format!(
        "Kd = {:.2}, Kzt = {:.2}, I = {:.2}, Kz = {:.3}, Kh = {:.2}",
        input.directionality_factor, input.topographic_factor, importance, kz, input.kh_factor
    ));
    if override_kz.is_some() {
        notes.push(format!(
            "Manual Kz override in use; computed Kz for exposure {} at {:.1} ft would be {:.3}",
            input.exposure.code(),
            input.height_ft,
            kz_computed
        ));
    }
    notes.push(format!(
        "qz = 0.00256 * Kz * Kzt * Kh * V^2 * I per {}; Kd applied at the design pressure step per {}",
        asce_ref::QZ_FORMULA,
        asce_ref::DESIGN_PRESSURE_FORMULA
    ));

    VelocityPressureResult {
        velocity_pressure_psf: qz,
        kz_used: kz,
        kz_computed,
        importance_factor: importance,
        override_applied: override_kz.is_some(),
        pressure_notes: notes,
    }
}
