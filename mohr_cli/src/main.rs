//! # Mohr's Circle CLI
//!
//! Terminal companion to the GUI. Prompts for a stress state and prints the
//! circle, principal stresses and the θ-rotated element, followed by the
//! analysis as JSON.

use std::io::{self, BufRead, Write};

use mohr_core::controller::parse_stress;
use mohr_core::stress::format_value;
use mohr_core::{InputField, MohrAnalysis, MohrSettings};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{} [{}]: ", prompt, format_value(default));
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    parse_stress(&input).unwrap_or(default)
}

fn main() {
    println!("Mohr's Circle Calculator");
    println!("========================");
    println!();

    let mut state = MohrSettings::default().initial;
    for field in InputField::ALL {
        let value = prompt_f64(field.text_label().trim_end(), state.get(field));
        state.set(field, value);
    }

    let analysis = MohrAnalysis::new(&state);
    let rotated = analysis.rotated;

    println!();
    println!("Circle:");
    println!("  Center: {:.2}", analysis.center);
    println!("  Radius: {:.2}", analysis.radius);
    println!();
    println!("Principal stresses:");
    println!("  σ_1 = {:.2}", analysis.sigma_1);
    println!("  σ_2 = {:.2}", analysis.sigma_2);
    println!("  θ_p = {:.2}°", analysis.principal_angle_deg);
    println!("  τ_max = {:.2}", analysis.max_shear);
    println!();
    println!("Element rotated by θ = {}°:", format_value(rotated.theta_deg));
    println!("  σ_x' = {:.2}", rotated.sigma_x);
    println!("  σ_y' = {:.2}", rotated.sigma_y);
    println!("  τ_x'y' = {:.2}", rotated.tau_xy);
    println!();

    match serde_json::to_string_pretty(&analysis) {
        Ok(json) => {
            println!("Analysis JSON:");
            println!("{}", json);
        }
        Err(e) => eprintln!("Failed to serialize analysis: {}", e),
    }
}
