//! # Design Pressure Composition
//!
//! Combines velocity pressures with gust, external, and internal
//! pressure coefficients into signed design pressures per ASCE 7-22
//! Eq. 27.3-1:
//!
//! ```text
//! p = q × G × Cp − q_i × GCpi
//! ```
//!
//! Every surface is evaluated twice, once per internal pressure sign,
//! and reported as a (pMax, pMin) pair. The internal term q_i is
//! always the velocity pressure at mean roof height, regardless of the
//! surface being evaluated. The directionality factor Kd, which is
//! excluded from qz, scales both velocity pressures here.
//!
//! ## Example (LLM-friendly)
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
//! let result = calculate(&input);
//! for wall in &result.walls {
//!     println!("{:<16} {}", wall.label, wall.pressure);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::coefficients::roof::{
    flat_roof_cp, RoofType, RoofZoneWidths, SLOPED_ROOF_LEEWARD_CP, SLOPED_ROOF_WINDWARD_CP,
};
use crate::coefficients::walls::wall_cp;
use crate::coefficients::PlanGeometry;
use crate::errors::{WindError, WindResult};
use crate::factors::{gust_effect_factor, EnclosureType, GcpiPair};

use super::velocity_pressure::{self, VelocityPressureResult, WindInput};

// ============================================================================
// Pressure Pair
// ============================================================================

/// A signed design pressure pair in psf.
///
/// pMax is the least favorable pressure toward the surface, pMin the
/// least favorable away from it. With a non-negative internal velocity
/// pressure the max always comes from the negative-GCpi case and the
/// min from the positive-GCpi case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignPressure {
    /// Governing pressure for the positive direction
    pub p_max_psf: f64,
    /// Governing pressure for the negative direction (suction)
    pub p_min_psf: f64,
}

impl DesignPressure {
    /// Render as the standard "pMax, pMin psf" pair with 2 decimals
    pub fn format_psf(&self) -> String {
        format!("{:.2}, {:.2} psf", self.p_max_psf, self.p_min_psf)
    }
}

impl std::fmt::Display for DesignPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_psf())
    }
}

/// Compose a design pressure pair per ASCE 7-22 Eq. 27.3-1.
///
/// `q_psf` is the velocity pressure at the surface's own reference
/// height and `q_i_psf` the velocity pressure at mean roof height for
/// the internal term. Both are expected with Kd already applied; the
/// composition itself only evaluates the two internal pressure signs
/// and orders the results.
pub fn compose_pressure(
    q_psf: f64,
    q_i_psf: f64,
    cp: f64,
    gcpi: GcpiPair,
    gust: f64,
) -> DesignPressure {
    let external = q_psf * gust * cp;
    let positive_internal = external - q_i_psf * gcpi.positive;
    let negative_internal = external - q_i_psf * gcpi.negative;
    DesignPressure {
        p_max_psf: positive_internal.max(negative_internal),
        p_min_psf: positive_internal.min(negative_internal),
    }
}

// ============================================================================
// Building Input
// ============================================================================

/// Input for a whole-building pressure evaluation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Office A",
///   "wind": {
///     "wind_speed_mph": 115.0,
///     "exposure": "B",
///     "height_ft": 30.0,
///     "risk_category": "II",
///     "directionality_factor": 0.85,
///     "topographic_factor": 1.0,
///     "kh_factor": 1.0,
///     "override_kz": null
///   },
///   "plan": { "length_ft": 100.0, "width_ft": 50.0 },
///   "num_stories": 2,
///   "story_height_ft": 15.0,
///   "roof_type": "flat",
///   "enclosure": "enclosed"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingInput {
    /// User label for this building or load case
    pub label: String,

    /// Site wind parameters. The reference height is kept equal to the
    /// mean roof height; per-story evaluations re-derive from it.
    pub wind: WindInput,

    /// Plan dimensions relative to the wind direction
    pub plan: PlanGeometry,

    /// Number of stories (uniform height)
    pub num_stories: usize,

    /// Story height in feet
    pub story_height_ft: f64,

    /// Roof geometry classification
    pub roof_type: RoofType,

    /// Enclosure classification selecting GCpi
    pub enclosure: EnclosureType,
}

impl BuildingInput {
    /// Create a building input. The wind input's reference height is
    /// set to the mean roof height implied by the story data.
    pub fn new(
        label: impl Into<String>,
        wind: WindInput,
        plan: PlanGeometry,
        num_stories: usize,
        story_height_ft: f64,
        roof_type: RoofType,
        enclosure: EnclosureType,
    ) -> Self {
        let mut wind = wind;
        wind.height_ft = num_stories as f64 * story_height_ft;
        Self {
            label: label.into(),
            wind,
            plan,
            num_stories,
            story_height_ft,
            roof_type,
            enclosure,
        }
    }

    /// Mean roof height in feet
    pub fn roof_height_ft(&self) -> f64 {
        self.num_stories as f64 * self.story_height_ft
    }

    /// Validate input parameters.
    pub fn validate(&self) -> WindResult<()> {
        self.wind.validate()?;
        self.plan.validate()?;
        if self.num_stories == 0 {
            return Err(WindError::invalid_input(
                "num_stories",
                self.num_stories.to_string(),
                "At least one story is required",
            ));
        }
        if !self.story_height_ft.is_finite() || self.story_height_ft <= 0.0 {
            return Err(WindError::invalid_input(
                "story_height_ft",
                self.story_height_ft.to_string(),
                "Story height must be a positive number",
            ));
        }
        if self.story_height_ft > 30.0 {
            return Err(WindError::invalid_input(
                "story_height_ft",
                self.story_height_ft.to_string(),
                "Story height exceeds 30 ft - verify story data",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Results
// ============================================================================

/// Design pressure for one named surface or roof zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfacePressure {
    /// Surface or zone name, including the physical zone width where
    /// applicable (e.g. "Zone 1 - windward edge (10.0 ft)")
    pub label: String,
    /// External pressure coefficient used for this surface
    pub cp: f64,
    /// Signed design pressure pair
    pub pressure: DesignPressure,
}

/// Windward pressure at one story's mid-height.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryPressure {
    /// Story number, 1-based from grade
    pub story: usize,
    /// Story mid-height in feet, (story - 0.5) x story height
    pub mid_height_ft: f64,
    /// Velocity pressure qz at the mid-height, Kd not included
    pub qz_psf: f64,
    /// Windward wall design pressure at this story
    pub windward: DesignPressure,
}

/// Complete pressure evaluation for one building.
///
/// Carries enough echo of the inputs to render a standalone report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingPressureResult {
    /// Label echoed from the input
    pub label: String,
    /// Plan dimensions echoed from the input
    pub plan: PlanGeometry,
    /// Mean roof height in feet
    pub roof_height_ft: f64,
    /// Roof geometry classification used
    pub roof_type: RoofType,
    /// Internal pressure coefficient pair used
    pub gcpi: GcpiPair,
    /// Gust effect factor used
    pub gust_effect: f64,
    /// Directionality factor applied to the design pressures
    pub directionality_factor: f64,
    /// Velocity pressure at mean roof height with its notes
    pub roof_velocity: VelocityPressureResult,
    /// Wall pressures: windward, leeward, side walls
    pub walls: Vec<SurfacePressure>,
    /// Roof pressures: three zones (flat) or two faces (sloped)
    pub roof: Vec<SurfacePressure>,
    /// Per-story windward pressure profile, story 1 first
    pub stories: Vec<StoryPressure>,
}

impl BuildingPressureResult {
    /// Most positive design pressure across all surfaces and stories
    pub fn governing_pressure_psf(&self) -> f64 {
        self.walls
            .iter()
            .chain(self.roof.iter())
            .map(|s| s.pressure.p_max_psf)
            .chain(self.stories.iter().map(|s| s.windward.p_max_psf))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Most negative design pressure (suction) across all surfaces and
    /// stories
    pub fn governing_suction_psf(&self) -> f64 {
        self.walls
            .iter()
            .chain(self.roof.iter())
            .map(|s| s.pressure.p_min_psf)
            .chain(self.stories.iter().map(|s| s.windward.p_min_psf))
            .fold(f64::INFINITY, f64::min)
    }

    /// Format as a multi-line string for reports
    pub fn format_report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Wind Pressures - {}\n", self.label));
        out.push_str("================================================\n");
        out.push_str(&format!("Roof height        = {:.1} ft\n", self.roof_height_ft));
        out.push_str(&format!(
            "Plan L x B         = {:.1} ft x {:.1} ft  (L/B = {:.2})\n",
            self.plan.length_ft,
            self.plan.width_ft,
            self.plan.lb_ratio()
        ));
        out.push_str(&format!(
            "qh at roof height  = {:.3} psf\n",
            self.roof_velocity.velocity_pressure_psf
        ));
        out.push_str(&format!(
            "G = {:.2}   Kd = {:.2}   GCpi = +/-{:.2}\n",
            self.gust_effect, self.directionality_factor, self.gcpi.positive
        ));

        out.push_str("\nWalls (q at roof height)\n");
        out.push_str("------------------------------------------------\n");
        for wall in &self.walls {
            out.push_str(&format!(
                "{:<28} Cp = {:>5.2}   {}\n",
                wall.label,
                wall.cp,
                wall.pressure.format_psf()
            ));
        }

        out.push_str(&format!("\nRoof ({})\n", self.roof_type.display_name()));
        out.push_str("------------------------------------------------\n");
        for zone in &self.roof {
            out.push_str(&format!(
                "{:<28} Cp = {:>5.2}   {}\n",
                zone.label,
                zone.cp,
                zone.pressure.format_psf()
            ));
        }

        out.push_str("\nStory windward profile\n");
        out.push_str("------------------------------------------------\n");
        for story in &self.stories {
            out.push_str(&format!(
                "Story {:>2} @ {:>6.1} ft   qz = {:>7.3} psf   {}\n",
                story.story,
                story.mid_height_ft,
                story.qz_psf,
                story.windward.format_psf()
            ));
        }

        out.push_str("\nNotes\n");
        out.push_str("------------------------------------------------\n");
        for note in &self.roof_velocity.pressure_notes {
            out.push_str(&format!("- {}\n", note));
        }

        out
    }
}

// ============================================================================
// Building Evaluation
// ============================================================================

/// Evaluate all MWFRS design pressures for a building.
///
/// Total function over constructed inputs, like the velocity pressure
/// calculation it builds on; range checking belongs to
/// [`BuildingInput::validate`]. Produces the wall sequence, the roof
/// zone sequence, and the per-story windward profile.
pub fn calculate(input: &BuildingInput) -> BuildingPressureResult {
    let roof_height = input.roof_height_ft();
    let roof_velocity = velocity_pressure::calculate(&input.wind.at_height(roof_height));

    let kd = input.wind.directionality_factor;
    let gust = gust_effect_factor(input.wind.exposure, roof_height);
    let gcpi = input.enclosure.gcpi();
    let lb_ratio = input.plan.lb_ratio();

    // Kd is excluded from qz, so it scales the design-side pressures here
    let q_roof = roof_velocity.velocity_pressure_psf * kd;

    let cp = wall_cp(lb_ratio);
    let walls = vec![
        SurfacePressure {
            label: "Windward wall".to_string(),
            cp: cp.windward,
            pressure: compose_pressure(q_roof, q_roof, cp.windward, gcpi, gust),
        },
        SurfacePressure {
            label: "Leeward wall".to_string(),
            cp: cp.leeward,
            pressure: compose_pressure(q_roof, q_roof, cp.leeward, gcpi, gust),
        },
        SurfacePressure {
            label: "Side walls".to_string(),
            cp: cp.sidewall,
            pressure: compose_pressure(q_roof, q_roof, cp.sidewall, gcpi, gust),
        },
    ];

    let roof = match input.roof_type {
        RoofType::Flat => {
            let zones = flat_roof_cp(lb_ratio);
            let widths = RoofZoneWidths::for_plan(&input.plan);
            vec![
                SurfacePressure {
                    label: format!("Zone 1 - windward edge ({:.1} ft)", widths.zone1_ft),
                    cp: zones.zone1,
                    pressure: compose_pressure(q_roof, q_roof, zones.zone1, gcpi, gust),
                },
                SurfacePressure {
                    label: format!("Zone 2 - middle ({:.1} ft)", widths.zone2_ft),
                    cp: zones.zone2,
                    pressure: compose_pressure(q_roof, q_roof, zones.zone2, gcpi, gust),
                },
                SurfacePressure {
                    label: format!("Zone 3 - leeward edge ({:.1} ft)", widths.zone3_ft),
                    cp: zones.zone3,
                    pressure: compose_pressure(q_roof, q_roof, zones.zone3, gcpi, gust),
                },
            ]
        }
        RoofType::Sloped => vec![
            SurfacePressure {
                label: "Windward roof".to_string(),
                cp: SLOPED_ROOF_WINDWARD_CP,
                pressure: compose_pressure(q_roof, q_roof, SLOPED_ROOF_WINDWARD_CP, gcpi, gust),
            },
            SurfacePressure {
                label: "Leeward roof".to_string(),
                cp: SLOPED_ROOF_LEEWARD_CP,
                pressure: compose_pressure(q_roof, q_roof, SLOPED_ROOF_LEEWARD_CP, gcpi, gust),
            },
        ],
    };

    let stories = (1..=input.num_stories)
        .map(|story| {
            let mid_height_ft = (story as f64 - 0.5) * input.story_height_ft;
            let story_velocity = velocity_pressure::calculate(&input.wind.at_height(mid_height_ft));
            let q_story = story_velocity.velocity_pressure_psf * kd;
            StoryPressure {
                story,
                mid_height_ft,
                qz_psf: story_velocity.velocity_pressure_psf,
                windward: compose_pressure(q_story, q_roof, cp.windward, gcpi, gust),
            }
        })
        .collect();

    BuildingPressureResult {
        label: input.label.clone(),
        plan: input.plan,
        roof_height_ft: roof_height,
        roof_type: input.roof_type,
        gcpi,
        gust_effect: gust,
        directionality_factor: kd,
        roof_velocity,
        walls,
        roof,
        stories,
    }
}
