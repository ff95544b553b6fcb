//! # WindCalc CLI Application
//!
//! Terminal front end for the wind pressure engine. Prompts for the
//! site and building parameters, validates them, and prints the full
//! pressure report plus a JSON dump of the result.

use std::io::{self, BufRead, Write};

use wind_core::calculations::design_pressure::{calculate, BuildingInput};
use wind_core::calculations::velocity_pressure::WindInput;
use wind_core::coefficients::{PlanGeometry, RoofType};
use wind_core::factors::{EnclosureType, ExposureCategory, RiskCategory};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_usize(prompt: &str, default: usize) -> usize {
    prompt_line(prompt).parse().unwrap_or(default)
}

fn prompt_optional_f64(prompt: &str) -> Option<f64> {
    let input = prompt_line(prompt);
    if input.is_empty() {
        None
    } else {
        input.parse().ok()
    }
}

fn main() {
    println!("WindCalc CLI - ASCE 7-22 MWFRS Wind Pressures");
    println!("================================================");
    println!();

    let wind_speed_mph = prompt_f64("Basic wind speed (mph) [115.0]: ", 115.0);
    let exposure = ExposureCategory::from_str_flexible(&prompt_line("Exposure category (B/C/D) [C]: "))
        .unwrap_or(ExposureCategory::C);
    let risk_category = RiskCategory::from_str_flexible(&prompt_line("Risk category (I-IV) [II]: "))
        .unwrap_or(RiskCategory::II);
    let num_stories = prompt_usize("Number of stories [2]: ", 2);
    let story_height_ft = prompt_f64("Story height (ft) [12.0]: ", 12.0);
    let length_ft = prompt_f64("Plan length along wind L (ft) [100.0]: ", 100.0);
    let width_ft = prompt_f64("Plan width across wind B (ft) [50.0]: ", 50.0);
    let roof_type = RoofType::from_str_flexible(&prompt_line("Roof type (flat/sloped) [flat]: "))
        .unwrap_or(RoofType::Flat);
    let enclosure =
        EnclosureType::from_str_flexible(&prompt_line("Enclosure (enclosed/partial) [enclosed]: "))
            .unwrap_or(EnclosureType::Enclosed);
    let kzt = prompt_f64("Topographic factor Kzt [1.0]: ", 1.0);
    let kd = prompt_f64("Directionality factor Kd [0.85]: ", 0.85);
    let override_kz = prompt_optional_f64("Manual Kz override (blank = automatic): ");

    let mut wind = WindInput::new(
        wind_speed_mph,
        exposure,
        num_stories as f64 * story_height_ft,
        risk_category,
    )
    .with_topographic(kzt)
    .with_directionality(kd);
    if let Some(kz) = override_kz {
        wind = wind.with_override_kz(kz);
    }

    let building = BuildingInput::new(
        "CLI-Demo",
        wind,
        PlanGeometry::new(length_ft, width_ft),
        num_stories,
        story_height_ft,
        roof_type,
        enclosure,
    );

    println!();
    match building.validate() {
        Ok(()) => {
            let result = calculate(&building);

            println!("═══════════════════════════════════════");
            println!("  WIND PRESSURE RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  V:         {:.0} mph", wind_speed_mph);
            println!("  Exposure:  {}", exposure.code());
            println!("  Risk:      {}", risk_category.code());
            println!("  Stories:   {} @ {:.1} ft", num_stories, story_height_ft);
            println!("  Plan:      {:.1} ft x {:.1} ft", length_ft, width_ft);
            println!("  Roof:      {}", roof_type.display_name());
            println!("  Enclosure: {}", enclosure.display_name());
            println!();
            println!("{}", result.format_report());
            println!("═══════════════════════════════════════");
            println!(
                "  GOVERNING: {:+.2} psf pressure / {:+.2} psf suction",
                result.governing_pressure_psf(),
                result.governing_suction_psf()
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
