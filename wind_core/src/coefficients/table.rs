//! # Breakpoint Tables
//!
//! Pressure coefficient tables in ASCE 7 are small piecewise functions
//! of the plan aspect ratio: some step between bands, some interpolate
//! linearly between published points. Both kinds reduce to an ordered
//! list of (upper boundary, value) breakpoints plus an interpolation
//! policy, which is what [`BreakpointTable`] captures.
//!
//! ## Example
//!
//! ```rust
//! use wind_core::coefficients::table::BreakpointTable;
//!
//! static LEEWARD: BreakpointTable = BreakpointTable::linear(&[
//!     (1.0, -0.5),
//!     (2.0, -0.3),
//!     (4.0, -0.2),
//! ]);
//!
//! assert_eq!(LEEWARD.lookup(2.0), -0.3);
//! assert_eq!(LEEWARD.lookup(10.0), -0.2); // clamped past the last point
//! ```

/// How values between breakpoints are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    /// The value of the first band whose upper boundary contains the key
    Step,
    /// Linear interpolation between adjacent breakpoints
    Linear,
}

/// An ordered piecewise lookup over `(upper boundary, value)` pairs.
///
/// Boundaries must be strictly ascending. Keys at a boundary belong to
/// the band that ends there (inclusive upper bounds). Keys outside the
/// table clamp to the first or last value, so the lookup is total over
/// finite keys.
///
/// Step tables that extend to arbitrarily large keys encode the open
/// last band with an `f64::INFINITY` boundary. Linear tables must use
/// finite boundaries.
#[derive(Debug, Clone, Copy)]
pub struct BreakpointTable {
    points: &'static [(f64, f64)],
    policy: Interpolation,
}

impl BreakpointTable {
    /// Build a step table. Panics at construction if `points` is empty.
    pub const fn step(points: &'static [(f64, f64)]) -> Self {
        assert!(!points.is_empty());
        Self {
            points,
            policy: Interpolation::Step,
        }
    }

    /// Build a linearly interpolated table. Panics at construction if
    /// `points` is empty.
    pub const fn linear(points: &'static [(f64, f64)]) -> Self {
        assert!(!points.is_empty());
        Self {
            points,
            policy: Interpolation::Linear,
        }
    }

    /// Resolve the value for `key`.
    ///
    /// Scans bands in ascending order and returns the first whose upper
    /// boundary is >= `key`. Below the first boundary the first value
    /// is returned; past the last boundary the last value is returned.
    pub fn lookup(&self, key: f64) -> f64 {
        let (first_bound, first_value) = self.points[0];
        if key <= first_bound {
            return first_value;
        }
        for i in 1..self.points.len() {
            let (bound, value) = self.points[i];
            if key <= bound {
                return match self.policy {
                    Interpolation::Step => value,
                    Interpolation::Linear => {
                        let (lo_bound, lo_value) = self.points[i - 1];
                        lo_value + (key - lo_bound) * (value - lo_value) / (bound - lo_bound)
                    }
                };
            }
        }
        self.points[self.points.len() - 1].1
    }

    /// The interpolation policy of this table
    pub fn policy(&self) -> Interpolation {
        self.policy
    }

    /// The raw breakpoints backing this table
    pub fn breakpoints(&self) -> &'static [(f64, f64)] {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static STEP: BreakpointTable = BreakpointTable::step(&[
        (0.5, 10.0),
        (1.0, 20.0),
        (2.0, 30.0),
        (f64::INFINITY, 40.0),
    ]);

    static LINEAR: BreakpointTable = BreakpointTable::linear(&[
        (1.0, -0.5),
        (2.0, -0.3),
        (4.0, -0.2),
    ]);

    #[test]
    fn test_step_bands_inclusive_upper() {
        assert_eq!(STEP.lookup(0.25), 10.0);
        assert_eq!(STEP.lookup(0.5), 10.0);
        assert_eq!(STEP.lookup(0.500001), 20.0);
        assert_eq!(STEP.lookup(1.0), 20.0);
        assert_eq!(STEP.lookup(2.0), 30.0);
        assert_eq!(STEP.lookup(2.000001), 40.0);
        assert_eq!(STEP.lookup(1_000_000.0), 40.0);
    }

    #[test]
    fn test_step_clamps_below_first_band() {
        assert_eq!(STEP.lookup(0.0), 10.0);
        assert_eq!(STEP.lookup(-5.0), 10.0);
    }

    #[test]
    fn test_linear_hits_breakpoints_exactly() {
        assert_eq!(LINEAR.lookup(1.0), -0.5);
        assert_eq!(LINEAR.lookup(2.0), -0.3);
        assert_eq!(LINEAR.lookup(4.0), -0.2);
    }

    #[test]
    fn test_linear_interpolates_between_points() {
        assert!((LINEAR.lookup(1.5) - (-0.4)).abs() < 1e-12);
        assert!((LINEAR.lookup(3.0) - (-0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_linear_clamps_outside_range() {
        assert_eq!(LINEAR.lookup(0.5), -0.5);
        assert_eq!(LINEAR.lookup(100.0), -0.2);
    }

    #[test]
    fn test_linear_continuous_at_interior_breakpoints() {
        for bound in [2.0, 4.0] {
            let just_below = LINEAR.lookup(bound - 1e-9);
            let at = LINEAR.lookup(bound);
            assert!((just_below - at).abs() < 1e-6);
        }
    }
}
