//! # Roof Pressure Coefficients
//!
//! External pressure coefficients Cp and zone widths for flat and
//! sloped roofs per ASCE 7-22 Fig. 27.3-1.
//!
//! Flat roofs split into three strips: a windward edge zone, a middle
//! zone, and a leeward edge zone. The edge zone coefficients step by
//! plan aspect ratio band; the middle zone is fixed. Sloped roofs use
//! a single fixed coefficient per face (slope angle is not modeled in
//! this simplified procedure).

use serde::{Deserialize, Serialize};

use crate::errors::{WindError, WindResult};

use super::table::BreakpointTable;
use super::PlanGeometry;

/// Roof geometry classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoofType {
    /// Flat roof, evaluated as three zones
    #[default]
    Flat,

    /// Sloped roof, evaluated as windward and leeward faces
    Sloped,
}

impl RoofType {
    /// All roof type variants for UI selection
    pub const ALL: [RoofType; 2] = [RoofType::Flat, RoofType::Sloped];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            RoofType::Flat => "Flat",
            RoofType::Sloped => "Sloped",
        }
    }

    /// Snake-case code matching the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            RoofType::Flat => "flat",
            RoofType::Sloped => "sloped",
        }
    }

    /// Parse from flexible string input
    pub fn from_str_flexible(s: &str) -> WindResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "FLAT" | "F" => Ok(RoofType::Flat),
            "SLOPED" | "SLOPE" | "S" => Ok(RoofType::Sloped),
            _ => Err(WindError::unrecognized("roof type", s)),
        }
    }
}

impl std::fmt::Display for RoofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Middle zone (zone 2) Cp for flat roofs, fixed for all aspect ratios
pub const FLAT_ROOF_ZONE2_CP: f64 = 0.5;

/// Windward face Cp for sloped roofs
pub const SLOPED_ROOF_WINDWARD_CP: f64 = 0.3;

/// Leeward face Cp for sloped roofs (suction)
pub const SLOPED_ROOF_LEEWARD_CP: f64 = -0.7;

/// Windward edge (zone 1) Cp by L/B band, first matching band wins
static FLAT_ROOF_ZONE1_CP: BreakpointTable = BreakpointTable::step(&[
    (0.5, 0.8),
    (1.0, 0.7),
    (2.0, 0.6),
    (f64::INFINITY, 0.5),
]);

/// Leeward edge (zone 3) Cp by L/B band, first matching band wins
static FLAT_ROOF_ZONE3_CP: BreakpointTable = BreakpointTable::step(&[
    (0.5, -0.7),
    (1.0, -0.6),
    (2.0, -0.5),
    (f64::INFINITY, -0.4),
]);

/// Flat roof Cp values resolved for one plan aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatRoofCp {
    /// Windward edge strip
    pub zone1: f64,
    /// Middle strip
    pub zone2: f64,
    /// Leeward edge strip
    pub zone3: f64,
}

/// Resolve flat roof zone coefficients for a plan aspect ratio L/B.
pub fn flat_roof_cp(lb_ratio: f64) -> FlatRoofCp {
    FlatRoofCp {
        zone1: FLAT_ROOF_ZONE1_CP.lookup(lb_ratio),
        zone2: FLAT_ROOF_ZONE2_CP,
        zone3: FLAT_ROOF_ZONE3_CP.lookup(lb_ratio),
    }
}

/// Physical strip widths of the three flat roof zones, in feet.
///
/// The edge strip width is the ASCE rule "lesser of 10% of L or 20% of
/// B". No minimum width is enforced, so a very long narrow plan can
/// produce a degenerate near-zero edge strip; the values are reported
/// as computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoofZoneWidths {
    /// Windward edge strip width
    pub zone1_ft: f64,
    /// Middle strip width
    pub zone2_ft: f64,
    /// Leeward edge strip width (same rule as zone 1)
    pub zone3_ft: f64,
}

impl RoofZoneWidths {
    /// Compute zone widths from the plan dimensions.
    pub fn for_plan(plan: &PlanGeometry) -> Self {
        let edge = (0.2 * plan.width_ft).min(0.1 * plan.length_ft);
        Self {
            zone1_ft: edge,
            zone2_ft: plan.width_ft - edge,
            zone3_ft: edge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_roof_zone_bands() {
        let square = flat_roof_cp(1.0);
        assert_eq!(square.zone1, 0.7);
        assert_eq!(square.zone2, 0.5);
        assert_eq!(square.zone3, -0.6);

        let wide = flat_roof_cp(0.4);
        assert_eq!(wide.zone1, 0.8);
        assert_eq!(wide.zone3, -0.7);

        let long = flat_roof_cp(2.0);
        assert_eq!(long.zone1, 0.6);
        assert_eq!(long.zone3, -0.5);

        let very_long = flat_roof_cp(3.5);
        assert_eq!(very_long.zone1, 0.5);
        assert_eq!(very_long.zone3, -0.4);
    }

    #[test]
    fn test_flat_roof_zone2_fixed() {
        for ratio in [0.1, 0.5, 1.0, 2.0, 8.0] {
            assert_eq!(flat_roof_cp(ratio).zone2, 0.5);
        }
    }

    #[test]
    fn test_flat_roof_band_boundaries_inclusive() {
        // Ties resolve to the lower band
        assert_eq!(flat_roof_cp(0.5).zone1, 0.8);
        assert_eq!(flat_roof_cp(1.0).zone1, 0.7);
        assert_eq!(flat_roof_cp(2.0).zone1, 0.6);
        assert_eq!(flat_roof_cp(2.0000001).zone1, 0.5);
    }

    #[test]
    fn test_sloped_roof_constants() {
        assert_eq!(SLOPED_ROOF_WINDWARD_CP, 0.3);
        assert_eq!(SLOPED_ROOF_LEEWARD_CP, -0.7);
    }

    #[test]
    fn test_zone_widths_published_scenario() {
        // L=100 ft, B=50 ft: edge = min(0.2*50, 0.1*100) = 10 ft
        let plan = PlanGeometry::new(100.0, 50.0);
        let widths = RoofZoneWidths::for_plan(&plan);
        assert_eq!(widths.zone1_ft, 10.0);
        assert_eq!(widths.zone2_ft, 40.0);
        assert_eq!(widths.zone3_ft, 10.0);
    }

    #[test]
    fn test_zone_widths_governed_by_length() {
        // Short plan: 10% of L governs the edge strip
        let plan = PlanGeometry::new(20.0, 50.0);
        let widths = RoofZoneWidths::for_plan(&plan);
        assert_eq!(widths.zone1_ft, 2.0);
        assert_eq!(widths.zone2_ft, 48.0);
    }

    #[test]
    fn test_zone_widths_degenerate_not_floored() {
        // No minimum strip width is imposed
        let plan = PlanGeometry::new(0.5, 100.0);
        let widths = RoofZoneWidths::for_plan(&plan);
        assert!((widths.zone1_ft - 0.05).abs() < 1e-12);
        assert_eq!(widths.zone3_ft, widths.zone1_ft);
    }

    #[test]
    fn test_roof_type_parsing() {
        assert_eq!(RoofType::from_str_flexible("flat").unwrap(), RoofType::Flat);
        assert_eq!(RoofType::from_str_flexible("  Sloped ").unwrap(), RoofType::Sloped);
        assert!(RoofType::from_str_flexible("gable").is_err());

        // Codes parse back to themselves
        for roof in RoofType::ALL {
            assert_eq!(RoofType::from_str_flexible(roof.code()).unwrap(), roof);
        }
    }

    #[test]
    fn test_roof_type_serialization() {
        let json = serde_json::to_string(&RoofType::Sloped).unwrap();
        assert_eq!(json, "\"sloped\"");
        let roundtrip: RoofType = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, RoofType::Sloped);
    }
}
