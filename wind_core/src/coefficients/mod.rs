//! # Pressure Coefficient Tables
//!
//! External and internal pressure coefficients for rectangular
//! buildings per ASCE 7-22 Fig. 27.3-1, keyed by the plan aspect ratio
//! L/B and, for roofs, by roof type.
//!
//! ## Organization
//!
//! - `table` - the shared breakpoint-table primitive (step or linear)
//! - `walls` - windward, leeward, and side wall Cp
//! - `roof` - flat roof zone Cp, sloped roof Cp, and zone widths
//!
//! Internal pressure coefficients (GCpi) live with the other building
//! classification factors in [`crate::factors`].

pub mod roof;
pub mod table;
pub mod walls;

pub use roof::{flat_roof_cp, FlatRoofCp, RoofType, RoofZoneWidths};
pub use table::{BreakpointTable, Interpolation};
pub use walls::{leeward_wall_cp, wall_cp, WallCpSet};

use serde::{Deserialize, Serialize};

use crate::errors::{WindError, WindResult};

/// Rectangular plan dimensions relative to the wind direction.
///
/// L runs parallel to the wind; B is the windward edge. Their ratio
/// L/B selects or interpolates the pressure coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanGeometry {
    /// Dimension parallel to the wind, in feet
    pub length_ft: f64,
    /// Dimension perpendicular to the wind (windward edge), in feet
    pub width_ft: f64,
}

impl PlanGeometry {
    /// Create plan geometry from along-wind length and cross-wind width
    pub fn new(length_ft: f64, width_ft: f64) -> Self {
        Self {
            length_ft,
            width_ft,
        }
    }

    /// Plan aspect ratio L/B
    pub fn lb_ratio(&self) -> f64 {
        self.length_ft / self.width_ft
    }

    /// Validate that both dimensions are positive finite numbers
    pub fn validate(&self) -> WindResult<()> {
        if !self.length_ft.is_finite() || self.length_ft <= 0.0 {
            return Err(WindError::invalid_input(
                "length_ft",
                self.length_ft.to_string(),
                "Plan length must be a positive number",
            ));
        }
        if !self.width_ft.is_finite() || self.width_ft <= 0.0 {
            return Err(WindError::invalid_input(
                "width_ft",
                self.width_ft.to_string(),
                "Plan width must be a positive number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lb_ratio() {
        let plan = PlanGeometry::new(100.0, 50.0);
        assert_eq!(plan.lb_ratio(), 2.0);

        let square = PlanGeometry::new(40.0, 40.0);
        assert_eq!(square.lb_ratio(), 1.0);
    }

    #[test]
    fn test_plan_validation() {
        assert!(PlanGeometry::new(100.0, 50.0).validate().is_ok());
        assert!(PlanGeometry::new(0.0, 50.0).validate().is_err());
        assert!(PlanGeometry::new(100.0, -1.0).validate().is_err());
        assert!(PlanGeometry::new(f64::NAN, 50.0).validate().is_err());
        assert!(PlanGeometry::new(100.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_plan_serialization() {
        let plan = PlanGeometry::new(80.0, 30.0);
        let json = serde_json::to_string(&plan).unwrap();
        let roundtrip: PlanGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, roundtrip);
    }
}
