//! Beam Vibration Example
//!
//! Usage: `beam-example [--json] [--aluminum] [request.json]`
//!
//! Without a request file a damped steel cantilever is analyzed, or an
//! aluminum one with `--aluminum`. Set `RUST_LOG=debug` to see the solver's
//! progress.

use std::fs;

use anyhow::{Context, Result};
use beam_vibration::prelude::*;

fn default_request(material: Material) -> AnalysisRequest {
    // 2 m cantilever, 100 mm wide, 300 mm deep, 2% damping
    let section = Section::rectangular(0.1, 0.3);
    let properties = BeamProperties::from_parts(2.0, section, material).with_damping(0.02);
    AnalysisRequest::new(BeamType::Cantilever, properties, MAX_MODES)
}

fn print_report(request: &AnalysisRequest, results: &BeamResults) {
    let p = &request.properties;
    println!("=== Beam Vibration: {} ===\n", request.beam_type);
    println!(
        "L = {:.3} m, b = {:.1} mm, d = {:.1} mm, E = {:.1} GPa, rho = {:.0} kg/m³",
        p.length,
        p.width * 1000.0,
        p.depth * 1000.0,
        p.youngs_modulus / 1e9,
        p.density
    );
    println!(
        "EI = {:.4e} N·m², rhoA = {:.3} kg/m, c = {:.0} m/s\n",
        results.flexural_rigidity,
        results.mass_per_length,
        p.material().wave_speed()
    );

    println!("Natural Frequencies:");
    for ((root, f), shape) in results
        .roots
        .iter()
        .zip(&results.natural_frequencies)
        .zip(&results.mode_shapes)
    {
        println!(
            "  Mode {}: bL = {:.6}, f = {:.3} Hz, {} nodes, {} samples",
            root.mode,
            root.bl,
            f,
            shape.node_count(),
            shape.positions.len()
        );
    }

    if let Some(deflection) = &results.static_deflection {
        println!(
            "\nStatic deflection under {:.0} N: {:.4} mm at x = {:.3} m",
            request.options.static_load,
            deflection.max_deflection * 1000.0,
            deflection.max_position
        );
    }

    if let Some(c) = results.damping_coefficient {
        println!("\nDamping coefficient: {:.3} N·s/m²", c);
    }
    if let Some(response) = &results.damped_response {
        println!(
            "Damped response: zeta = {}, fn = {:.3} Hz, fd = {:.3} Hz over {:.2} s",
            response.damping_ratio,
            response.natural_frequency,
            response.damped_frequency,
            response.times.last().copied().unwrap_or_default()
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut json_output = false;
    let mut material = Material::steel();
    let mut request_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json_output = true,
            "--aluminum" => material = Material::aluminum(),
            _ => request_path = Some(arg),
        }
    }

    let request = match &request_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read request file '{}'", path))?;
            AnalysisRequest::from_json(&text)
                .with_context(|| format!("failed to parse request file '{}'", path))?
        }
        None => default_request(material),
    };

    let results = request.run().context("analysis rejected the request")?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_report(&request, &results);
    }

    Ok(())
}
