//! # Plyforge CLI Application
//!
//! Terminal front-end for the composite micromechanics engine. Collects
//! constituent properties and volume fractions, runs the homogenization,
//! and renders the registry, results, and composition breakdown.

use std::io::{self, BufRead, Write};

use composite_core::calculations::HomogenizationInput;
use composite_core::constituents::ConstituentProperties;
use composite_core::equations::PlyProperty;
use composite_core::fractions::VolumeFractions;
use composite_core::session::Session;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

/// Numeric prompt clamped to the physical bounds of the field.
fn prompt_f64_bounded(prompt: &str, default: f64, min: f64, max: f64) -> f64 {
    prompt_f64(prompt, default).clamp(min, max)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_constituent(kind: &str, defaults: &ConstituentProperties) -> ConstituentProperties {
    println!("{} properties:", kind);
    let name = prompt_string(
        &format!("  Name [{}]: ", defaults.name),
        &defaults.name,
    );
    let e = prompt_f64_bounded(
        &format!("  Young's modulus (GPa) [{}]: ", defaults.youngs_modulus_gpa),
        defaults.youngs_modulus_gpa,
        0.1,
        f64::MAX,
    );
    let nu = prompt_f64_bounded(
        &format!("  Poisson's ratio [{}]: ", defaults.poissons_ratio),
        defaults.poissons_ratio,
        0.0,
        0.5,
    );
    let g = prompt_f64_bounded(
        &format!("  Shear modulus (GPa) [{}]: ", defaults.shear_modulus_gpa),
        defaults.shear_modulus_gpa,
        0.1,
        f64::MAX,
    );
    let rho = prompt_f64_bounded(
        &format!("  Density (g/cm3) [{}]: ", defaults.density_g_cm3),
        defaults.density_g_cm3,
        0.1,
        f64::MAX,
    );
    ConstituentProperties::new(name, e, nu, g, rho)
}

fn print_registry(session: &Session) {
    println!("Registry:");
    println!(
        "  {:<12} {:>8} {:>6} {:>8} {:>8}",
        "Name", "E (GPa)", "nu", "G (GPa)", "rho"
    );
    for props in session.registry.fibers() {
        println!(
            "  {:<12} {:>8.2} {:>6.2} {:>8.2} {:>8.2}  (fiber)",
            props.name,
            props.youngs_modulus_gpa,
            props.poissons_ratio,
            props.shear_modulus_gpa,
            props.density_g_cm3
        );
    }
    for props in session.registry.matrices() {
        println!(
            "  {:<12} {:>8.2} {:>6.2} {:>8.2} {:>8.2}  (matrix)",
            props.name,
            props.youngs_modulus_gpa,
            props.poissons_ratio,
            props.shear_modulus_gpa,
            props.density_g_cm3
        );
    }
}

fn print_composition(label: &str, fractions: &VolumeFractions) {
    let positive: Vec<(&str, f64)> = fractions.positive().collect();
    if positive.is_empty() {
        return;
    }
    println!("  {}:", label);
    for (name, vf) in positive {
        println!("    {:<12} {:>5.1}%", name, vf * 100.0);
    }
}

fn main() {
    println!("Plyforge CLI - Composite Micromechanics Calculator");
    println!("==================================================");
    println!();

    let mut session = Session::new("CLI User");

    let fiber = prompt_constituent(
        "Fiber",
        &ConstituentProperties::new("Carbon", 230.0, 0.2, 90.0, 1.8),
    );
    println!();
    let matrix = prompt_constituent(
        "Matrix",
        &ConstituentProperties::new("Epoxy", 3.5, 0.35, 1.3, 1.2),
    );
    println!();

    let fiber_name = fiber.name.clone();
    let matrix_name = matrix.name.clone();

    if let Err(error) = session.add_fiber(fiber) {
        eprintln!("ERROR: {}", error);
        std::process::exit(1);
    }
    if let Err(error) = session.add_matrix(matrix) {
        eprintln!("ERROR: {}", error);
        std::process::exit(1);
    }

    let fiber_vf = prompt_f64_bounded(
        &format!("{} volume fraction [0.6]: ", fiber_name),
        0.6,
        0.0,
        1.0,
    );
    let matrix_vf = prompt_f64_bounded(
        &format!("{} volume fraction [0.4]: ", matrix_name),
        0.4,
        0.0,
        1.0,
    );
    let composite_name = prompt_string(
        &format!("Composite name [{}/{}]: ", fiber_name, matrix_name),
        &format!("{}/{}", fiber_name, matrix_name),
    );
    println!();

    print_registry(&session);
    println!();

    let input = HomogenizationInput {
        name: composite_name,
        fiber_fractions: VolumeFractions::new().with_fraction(fiber_name, fiber_vf),
        matrix_fractions: VolumeFractions::new().with_fraction(matrix_name, matrix_vf),
    };

    match session.define_composite(&input) {
        Ok(ply) => {
            println!("═══════════════════════════════════════════════════");
            println!("  COMPOSITE PROPERTIES: {}", ply.name);
            println!("═══════════════════════════════════════════════════");
            println!();
            println!(
                "  {:<26} {:>12}   {}",
                "Property", "Value", "Formula"
            );
            for property in PlyProperty::ALL {
                let meta = property.metadata();
                let value = ply.property(property);
                let rendered = if meta.units == "-" {
                    format!("{:.4}", value)
                } else {
                    format!("{:.2} {}", value, meta.units)
                };
                println!(
                    "  {:<26} {:>12}   {}",
                    format!("{} ({})", meta.name, meta.symbol),
                    rendered,
                    meta.formula_plain
                );
            }
            println!();
            println!("Composition Breakdown:");
            print_composition("Fiber constituents", &ply.fiber_constituents);
            print_composition("Matrix constituents", &ply.matrix_constituents);
            println!();
            println!("Stored record (JSON):");
            match serde_json::to_string_pretty(&ply) {
                Ok(json) => println!("{}", json),
                Err(error) => eprintln!("ERROR: {}", error),
            }
        }
        Err(error) => {
            eprintln!("ERROR: {}", error);
            std::process::exit(1);
        }
    }
}
