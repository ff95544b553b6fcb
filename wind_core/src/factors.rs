//! # ASCE 7 Wind Factors
//!
//! Terrain, occupancy, and enclosure factors for the simplified MWFRS
//! wind procedure per ASCE 7-22.
//!
//! ## Overview
//!
//! Velocity pressure combines the site factors with the basic wind speed:
//!
//! ```text
//! qz = 0.00256 × Kz × Kzt × Kh × V² × I
//! Kz = 2.01 × (z / zg)^(2/α)
//! ```
//!
//! The directionality factor Kd is deliberately absent from qz; it is
//! applied when qz is combined into a design pressure (Eq. 27.3-1).
//!
//! ## Factor Summary
//!
//! | Factor | Description              | Typical Values    |
//! |--------|--------------------------|-------------------|
//! | Kz     | Exposure / height        | 0.57 - 1.90       |
//! | Kzt    | Topographic              | ≥ 1.0             |
//! | Kd     | Directionality           | 0.85 (buildings)  |
//! | I      | Importance (risk cat.)   | 0.87 - 1.15       |
//! | G      | Gust effect (rigid)      | 0.85              |
//! | GCpi   | Internal pressure        | ±0.18 / ±0.55     |
//!
//! ## Reference
//!
//! ASCE 7-22, Chapters 26 and 27 (directional procedure, MWFRS)

use serde::{Deserialize, Serialize};

use crate::errors::{WindError, WindResult};

// ============================================================================
// ASCE 7 Code Section References
// ============================================================================

/// ASCE 7 code section references for wind pressure factors and formulas.
///
/// These constants provide traceable references to Minimum Design Loads
/// and Associated Criteria for Buildings (ASCE 7-22).
pub mod asce_ref {
    // Factors
    /// Velocity pressure exposure coefficient Kz
    pub const KZ_TABLE: &str = "ASCE 7-22 Table 26.10-1";
    /// Terrain exposure constants (alpha, zg)
    pub const TERRAIN_CONSTANTS: &str = "ASCE 7-22 Table 26.11-1";
    /// Wind directionality factor Kd
    pub const DIRECTIONALITY: &str = "ASCE 7-22 Table 26.6-1";
    /// Topographic factor Kzt
    pub const TOPOGRAPHIC: &str = "ASCE 7-22 Sec. 26.8";
    /// Importance factor by risk category
    pub const IMPORTANCE_FACTOR: &str = "ASCE 7 Table 1.5-2";
    /// Risk category assignment
    pub const RISK_CATEGORY: &str = "ASCE 7-22 Table 1.5-1";
    /// Gust effect factor for rigid buildings
    pub const GUST_EFFECT: &str = "ASCE 7-22 Sec. 26.11.1";
    /// Internal pressure coefficient GCpi
    pub const GCPI_TABLE: &str = "ASCE 7-22 Table 26.13-1";

    // Coefficients
    /// Wall external pressure coefficients Cp
    pub const WALL_CP_FIGURE: &str = "ASCE 7-22 Fig. 27.3-1";
    /// Roof external pressure coefficients Cp
    pub const ROOF_CP_FIGURE: &str = "ASCE 7-22 Fig. 27.3-1";

    // Formulas
    /// Velocity pressure formula
    pub const QZ_FORMULA: &str = "ASCE 7-22 Eq. 26.10-1";
    /// Design pressure formula (external + internal)
    pub const DESIGN_PRESSURE_FORMULA: &str = "ASCE 7-22 Eq. 27.3-1";
}

// ============================================================================
// Numeric Conventions
// ============================================================================

/// Heights below this are evaluated at 15 ft when computing Kz.
pub const KZ_MIN_HEIGHT_FT: f64 = 15.0;

/// Heights above this are evaluated at 500 ft when computing Kz.
pub const KZ_MAX_HEIGHT_FT: f64 = 500.0;

/// Round to the 3-decimal resolution used for published Kz and qz values.
///
/// Rounding happens at each stage: Kz is rounded before it enters the
/// velocity pressure formula, and qz is rounded again after.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

// ============================================================================
// Exposure Category
// ============================================================================

/// Terrain exposure category per ASCE 7-22 Sec. 26.7.3
///
/// The category sets the power-law constants (alpha, zg) used to grow
/// the velocity pressure exposure coefficient Kz with height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExposureCategory {
    /// Urban and suburban areas, wooded terrain: alpha = 7.0, zg = 1200 ft
    B,

    /// Open terrain with scattered obstructions: alpha = 9.5, zg = 900 ft
    #[default]
    C,

    /// Flat, unobstructed areas and water surfaces: alpha = 11.5, zg = 700 ft
    D,
}

impl ExposureCategory {
    /// All exposure variants for UI selection
    pub const ALL: [ExposureCategory; 3] = [
        ExposureCategory::B,
        ExposureCategory::C,
        ExposureCategory::D,
    ];

    /// Power-law exponent alpha per ASCE 7-22 Table 26.11-1
    pub fn alpha(&self) -> f64 {
        match self {
            ExposureCategory::B => 7.0,
            ExposureCategory::C => 9.5,
            ExposureCategory::D => 11.5,
        }
    }

    /// Gradient height zg in feet per ASCE 7-22 Table 26.11-1
    pub fn gradient_height_ft(&self) -> f64 {
        match self {
            ExposureCategory::B => 1200.0,
            ExposureCategory::C => 900.0,
            ExposureCategory::D => 700.0,
        }
    }

    /// Velocity pressure exposure coefficient Kz per ASCE 7-22 Table 26.10-1
    ///
    /// Kz = 2.01 × (z / zg)^(2/alpha), with the height clamped to the
    /// 15-500 ft band the table covers. The result is rounded to 3
    /// decimals, matching the published table resolution.
    ///
    /// A non-finite height propagates through as NaN; callers that
    /// accept external input validate the height first.
    pub fn kz(&self, height_ft: f64) -> f64 {
        let z = height_ft.clamp(KZ_MIN_HEIGHT_FT, KZ_MAX_HEIGHT_FT);
        round3(2.01 * (z / self.gradient_height_ft()).powf(2.0 / self.alpha()))
    }

    /// Single-letter code as it appears on drawings
    pub fn code(&self) -> &'static str {
        match self {
            ExposureCategory::B => "B",
            ExposureCategory::C => "C",
            ExposureCategory::D => "D",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ExposureCategory::B => "B - Urban/suburban, wooded",
            ExposureCategory::C => "C - Open terrain, scattered obstructions",
            ExposureCategory::D => "D - Flat unobstructed, water surfaces",
        }
    }

    /// Parse from flexible string input (case-insensitive, accepts
    /// "B", "exposure b", etc.)
    pub fn from_str_flexible(s: &str) -> WindResult<Self> {
        match s.trim().to_uppercase().replace("EXPOSURE", "").trim() {
            "B" => Ok(ExposureCategory::B),
            "C" => Ok(ExposureCategory::C),
            "D" => Ok(ExposureCategory::D),
            _ => Err(WindError::unrecognized("exposure category", s)),
        }
    }
}

impl std::fmt::Display for ExposureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Risk Category
// ============================================================================

/// Building risk category per ASCE 7-22 Table 1.5-1
///
/// Selects the importance factor I applied to velocity pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiskCategory {
    /// Low hazard to human life (agricultural, minor storage): I = 0.87
    I,

    /// All buildings not listed in other categories: I = 1.00
    #[default]
    II,

    /// Substantial hazard to human life (assembly, schools): I = 1.15
    III,

    /// Essential facilities (hospitals, fire stations): I = 1.15
    IV,
}

impl RiskCategory {
    /// All risk category variants for UI selection
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::I,
        RiskCategory::II,
        RiskCategory::III,
        RiskCategory::IV,
    ];

    /// Importance factor I per ASCE 7 Table 1.5-2
    pub fn importance_factor(&self) -> f64 {
        match self {
            RiskCategory::I => 0.87,
            RiskCategory::II => 1.0,
            RiskCategory::III => 1.15,
            RiskCategory::IV => 1.15,
        }
    }

    /// Roman-numeral code as it appears in the standard
    pub fn code(&self) -> &'static str {
        match self {
            RiskCategory::I => "I",
            RiskCategory::II => "II",
            RiskCategory::III => "III",
            RiskCategory::IV => "IV",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskCategory::I => "I - Low hazard (0.87)",
            RiskCategory::II => "II - Standard occupancy (1.00)",
            RiskCategory::III => "III - Substantial hazard (1.15)",
            RiskCategory::IV => "IV - Essential facilities (1.15)",
        }
    }

    /// Parse from flexible string input (accepts roman numerals or digits)
    pub fn from_str_flexible(s: &str) -> WindResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "I" | "1" => Ok(RiskCategory::I),
            "II" | "2" => Ok(RiskCategory::II),
            "III" | "3" => Ok(RiskCategory::III),
            "IV" | "4" => Ok(RiskCategory::IV),
            _ => Err(WindError::unrecognized("risk category", s)),
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Enclosure Classification
// ============================================================================

/// Internal pressure coefficient pair GCpi per ASCE 7-22 Table 26.13-1
///
/// Internal pressure can push outward or pull inward, so every design
/// pressure is evaluated at both signs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GcpiPair {
    /// Positive internal pressure (acting outward on walls)
    pub positive: f64,
    /// Negative internal pressure (suction)
    pub negative: f64,
}

/// Building enclosure classification per ASCE 7-22 Sec. 26.2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnclosureType {
    /// Openings do not qualify the building as open or partially
    /// enclosed: GCpi = ±0.18
    #[default]
    Enclosed,

    /// Dominant opening on one wall: GCpi = ±0.55
    PartiallyEnclosed,
}

impl EnclosureType {
    /// All enclosure variants for UI selection
    pub const ALL: [EnclosureType; 2] = [EnclosureType::Enclosed, EnclosureType::PartiallyEnclosed];

    /// Snake-case code matching the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            EnclosureType::Enclosed => "enclosed",
            EnclosureType::PartiallyEnclosed => "partially_enclosed",
        }
    }

    /// Internal pressure coefficient pair per ASCE 7-22 Table 26.13-1
    pub fn gcpi(&self) -> GcpiPair {
        match self {
            EnclosureType::Enclosed => GcpiPair {
                positive: 0.18,
                negative: -0.18,
            },
            EnclosureType::PartiallyEnclosed => GcpiPair {
                positive: 0.55,
                negative: -0.55,
            },
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            EnclosureType::Enclosed => "Enclosed (GCpi ±0.18)",
            EnclosureType::PartiallyEnclosed => "Partially Enclosed (GCpi ±0.55)",
        }
    }

    /// Parse from flexible string input
    pub fn from_str_flexible(s: &str) -> WindResult<Self> {
        match s.trim().to_uppercase().replace([' ', '-'], "_").as_str() {
            "ENCLOSED" | "E" => Ok(EnclosureType::Enclosed),
            "PARTIALLY_ENCLOSED" | "PARTIAL" | "P" => Ok(EnclosureType::PartiallyEnclosed),
            _ => Err(WindError::unrecognized("enclosure type", s)),
        }
    }
}

impl std::fmt::Display for EnclosureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Gust Effect Factor
// ============================================================================

/// Gust effect factor G for rigid buildings per ASCE 7-22 Sec. 26.11.1
pub const GUST_EFFECT_FACTOR_RIGID: f64 = 0.85;

/// Gust effect factor G.
///
/// The simplified procedure treats every building as rigid, so G is
/// the constant 0.85. Exposure and mean roof height are accepted so
/// the signature already fits a flexible-structure refinement.
pub fn gust_effect_factor(_exposure: ExposureCategory, _mean_roof_height_ft: f64) -> f64 {
    GUST_EFFECT_FACTOR_RIGID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_constants() {
        assert_eq!(ExposureCategory::B.alpha(), 7.0);
        assert_eq!(ExposureCategory::B.gradient_height_ft(), 1200.0);
        assert_eq!(ExposureCategory::C.alpha(), 9.5);
        assert_eq!(ExposureCategory::C.gradient_height_ft(), 900.0);
        assert_eq!(ExposureCategory::D.alpha(), 11.5);
        assert_eq!(ExposureCategory::D.gradient_height_ft(), 700.0);
    }

    #[test]
    fn test_kz_matches_published_table() {
        // Spot checks against ASCE 7-22 Table 26.10-1
        assert_eq!(ExposureCategory::B.kz(15.0), 0.575);
        assert_eq!(ExposureCategory::B.kz(30.0), 0.701);
        assert_eq!(ExposureCategory::C.kz(15.0), 0.849);
        assert_eq!(ExposureCategory::C.kz(30.0), 0.982);
        assert_eq!(ExposureCategory::D.kz(15.0), 1.030);
    }

    #[test]
    fn test_kz_clamps_below_15_ft() {
        for exposure in ExposureCategory::ALL {
            assert_eq!(exposure.kz(0.0), exposure.kz(15.0));
            assert_eq!(exposure.kz(7.5), exposure.kz(15.0));
            assert_eq!(exposure.kz(14.999), exposure.kz(15.0));
        }
    }

    #[test]
    fn test_kz_clamps_above_500_ft() {
        for exposure in ExposureCategory::ALL {
            assert_eq!(exposure.kz(600.0), exposure.kz(500.0));
            assert_eq!(exposure.kz(10_000.0), exposure.kz(500.0));
        }
        assert_eq!(ExposureCategory::B.kz(500.0), 1.565);
        assert_eq!(ExposureCategory::C.kz(500.0), 1.776);
    }

    #[test]
    fn test_kz_monotonic_in_height() {
        for exposure in ExposureCategory::ALL {
            let mut prev = exposure.kz(0.0);
            let mut h = 15.0;
            while h <= 500.0 {
                let kz = exposure.kz(h);
                assert!(
                    kz >= prev,
                    "Kz decreased for exposure {} between heights near {} ft",
                    exposure.code(),
                    h
                );
                prev = kz;
                h += 5.0;
            }
        }
    }

    #[test]
    fn test_kz_rounded_to_3_decimals() {
        for exposure in ExposureCategory::ALL {
            for h in [15.0, 33.0, 77.7, 250.0, 499.0] {
                let kz = exposure.kz(h);
                assert_eq!(kz, round3(kz));
            }
        }
    }

    #[test]
    fn test_importance_factors() {
        assert_eq!(RiskCategory::I.importance_factor(), 0.87);
        assert_eq!(RiskCategory::II.importance_factor(), 1.0);
        assert_eq!(RiskCategory::III.importance_factor(), 1.15);
        assert_eq!(RiskCategory::IV.importance_factor(), 1.15);
        // Closed enum: every variant has a factor
        for risk in RiskCategory::ALL {
            assert!(risk.importance_factor() > 0.0);
        }
    }

    #[test]
    fn test_gcpi_pairs() {
        let enclosed = EnclosureType::Enclosed.gcpi();
        assert_eq!(enclosed.positive, 0.18);
        assert_eq!(enclosed.negative, -0.18);

        let partial = EnclosureType::PartiallyEnclosed.gcpi();
        assert_eq!(partial.positive, 0.55);
        assert_eq!(partial.negative, -0.55);
    }

    #[test]
    fn test_gust_effect_is_constant() {
        assert_eq!(gust_effect_factor(ExposureCategory::B, 15.0), 0.85);
        assert_eq!(gust_effect_factor(ExposureCategory::D, 500.0), 0.85);
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(ExposureCategory::from_str_flexible("b").unwrap(), ExposureCategory::B);
        assert_eq!(
            ExposureCategory::from_str_flexible("Exposure C").unwrap(),
            ExposureCategory::C
        );
        assert!(ExposureCategory::from_str_flexible("A").is_err());

        assert_eq!(RiskCategory::from_str_flexible("2").unwrap(), RiskCategory::II);
        assert_eq!(RiskCategory::from_str_flexible("iv").unwrap(), RiskCategory::IV);
        assert!(RiskCategory::from_str_flexible("V").is_err());

        assert_eq!(
            EnclosureType::from_str_flexible("partially enclosed").unwrap(),
            EnclosureType::PartiallyEnclosed
        );
        assert_eq!(
            EnclosureType::from_str_flexible("Enclosed").unwrap(),
            EnclosureType::Enclosed
        );
        assert!(EnclosureType::from_str_flexible("open").is_err());
    }

    #[test]
    fn test_all_arrays_cover_every_variant() {
        assert_eq!(ExposureCategory::ALL.len(), 3);
        assert_eq!(RiskCategory::ALL.len(), 4);
        assert_eq!(EnclosureType::ALL.len(), 2);

        // Each entry parses back to itself through its own code
        for exposure in ExposureCategory::ALL {
            assert_eq!(ExposureCategory::from_str_flexible(exposure.code()).unwrap(), exposure);
        }
        for risk in RiskCategory::ALL {
            assert_eq!(RiskCategory::from_str_flexible(risk.code()).unwrap(), risk);
        }
        for enclosure in EnclosureType::ALL {
            assert_eq!(
                EnclosureType::from_str_flexible(enclosure.code()).unwrap(),
                enclosure
            );
        }
    }

    #[test]
    fn test_enum_serialization() {
        let json = serde_json::to_string(&EnclosureType::PartiallyEnclosed).unwrap();
        assert_eq!(json, "\"partially_enclosed\"");

        let exposure: ExposureCategory = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(exposure, ExposureCategory::D);

        let risk: RiskCategory = serde_json::from_str("\"III\"").unwrap();
        assert_eq!(risk, RiskCategory::III);
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.5747196698), 0.575);
        assert_eq!(round3(19.4672), 19.467);
        assert_eq!(round3(1.0), 1.0);
        assert_eq!(round3(-0.0005001), -0.001);
    }
}
