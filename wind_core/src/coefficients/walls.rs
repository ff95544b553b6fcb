//! # Wall Pressure Coefficients
//!
//! External pressure coefficients Cp for the walls of rectangular
//! buildings per ASCE 7-22 Fig. 27.3-1.
//!
//! Windward and side wall coefficients are constants. The leeward wall
//! coefficient weakens as the building gets longer in the wind
//! direction, interpolated over the published L/B points.

use serde::{Deserialize, Serialize};

use super::table::BreakpointTable;

/// Windward wall Cp, independent of geometry
pub const WINDWARD_WALL_CP: f64 = 0.8;

/// Side wall Cp (suction), independent of geometry
pub const SIDE_WALL_CP: f64 = -0.7;

/// Leeward wall Cp over L/B per ASCE 7-22 Fig. 27.3-1.
/// Clamped to the end values outside 1.0 <= L/B <= 4.0.
static LEEWARD_WALL_CP: BreakpointTable = BreakpointTable::linear(&[
    (1.0, -0.5),
    (2.0, -0.3),
    (4.0, -0.2),
]);

/// Wall Cp values resolved for one plan aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallCpSet {
    /// Windward wall (positive, toward the wall)
    pub windward: f64,
    /// Side walls (suction)
    pub sidewall: f64,
    /// Leeward wall (suction, magnitude depends on L/B)
    pub leeward: f64,
}

/// Resolve all three wall coefficients for a plan aspect ratio L/B.
pub fn wall_cp(lb_ratio: f64) -> WallCpSet {
    WallCpSet {
        windward: WINDWARD_WALL_CP,
        sidewall: SIDE_WALL_CP,
        leeward: leeward_wall_cp(lb_ratio),
    }
}

/// Leeward wall Cp alone, piecewise linear in L/B.
pub fn leeward_wall_cp(lb_ratio: f64) -> f64 {
    LEEWARD_WALL_CP.lookup(lb_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windward_and_side_are_fixed() {
        for ratio in [0.5, 1.0, 2.0, 10.0] {
            let cp = wall_cp(ratio);
            assert_eq!(cp.windward, 0.8);
            assert_eq!(cp.sidewall, -0.7);
        }
    }

    #[test]
    fn test_leeward_at_published_points() {
        assert_eq!(leeward_wall_cp(1.0), -0.5);
        assert_eq!(leeward_wall_cp(2.0), -0.3);
        assert_eq!(leeward_wall_cp(4.0), -0.2);
    }

    #[test]
    fn test_leeward_interpolates() {
        assert!((leeward_wall_cp(1.5) - (-0.4)).abs() < 1e-12);
        assert!((leeward_wall_cp(3.0) - (-0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_leeward_clamps_outside_published_range() {
        assert_eq!(leeward_wall_cp(0.3), -0.5);
        assert_eq!(leeward_wall_cp(0.999), -0.5);
        assert_eq!(leeward_wall_cp(4.001), -0.2);
        assert_eq!(leeward_wall_cp(50.0), -0.2);
    }

    #[test]
    fn test_leeward_magnitude_never_grows_with_ratio() {
        let mut prev = leeward_wall_cp(0.5);
        let mut ratio = 0.5;
        while ratio <= 6.0 {
            let cp = leeward_wall_cp(ratio);
            assert!(cp >= prev, "leeward Cp should weaken (rise toward 0) with L/B");
            prev = cp;
            ratio += 0.1;
        }
    }

    #[test]
    fn test_wall_cp_set_serialization() {
        let cp = wall_cp(2.0);
        let json = serde_json::to_string(&cp).unwrap();
        let roundtrip: WallCpSet = serde_json::from_str(&json).unwrap();
        assert_eq!(cp, roundtrip);
    }
}
