use clap::Args;

use crate::cli::{CatalogSourceArgs, OutputFormat};
use crate::matching::engine::{GeometryMatcher, MatchResult, MatchingConfig, DEFAULT_TOLERANCE_MM};
use crate::utils::validation::{parse_measurement, validate_tolerance};

#[derive(Args)]
pub struct SearchArgs {
    /// Target stack in millimetres
    #[arg(long, required = true, allow_hyphen_values = true)]
    pub stack: String,

    /// Target reach in millimetres
    #[arg(long, required = true, allow_hyphen_values = true)]
    pub reach: String,

    /// Distance (mm) within which a match is reported as precise
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE_MM)]
    pub tolerance: f64,

    /// Number of matches to show (all by default)
    #[arg(short = 'n', long)]
    pub max_matches: Option<usize>,

    /// Only show precise matches
    #[arg(long)]
    pub precise_only: bool,

    #[command(flatten)]
    pub source: CatalogSourceArgs,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the measurements are invalid or the catalog cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Validate before touching the catalog so bad input never triggers a fetch
    let stack = parse_measurement("stack", &args.stack)?;
    let reach = parse_measurement("reach", &args.reach)?;
    let tolerance = validate_tolerance(args.tolerance)?;

    let loaded = args.source.load(verbose)?;
    if loaded.catalog.is_empty() {
        eprintln!("Warning: Catalog is empty, no bikes to match against.");
        return Ok(());
    }

    let config = MatchingConfig {
        tolerance,
        limit: args.max_matches,
        precise_only: args.precise_only,
    };
    let matcher = GeometryMatcher::with_config(&loaded.catalog, config);
    let matches = matcher.find_matches(stack, reach);

    if matches.is_empty() {
        eprintln!("No matching bikes found.");
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&matches, stack, reach, tolerance),
        OutputFormat::Json => print_json_results(&matches, tolerance)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn print_text_results(matches: &[MatchResult], stack: f64, reach: f64, tolerance: f64) {
    println!(
        "Best fits for stack {stack:.0} mm / reach {reach:.0} mm (tolerance {tolerance:.1} mm)"
    );

    for (i, result) in matches.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!(
            "\n#{} {} ({})",
            i + 1,
            result.bike.display_name(),
            result.quality
        );
        println!("   ID: {}", result.bike.id);
        println!("   Price: €{:.0}", result.bike.price);
        println!(
            "   Best size: {} (stack {:.0} mm, reach {:.0} mm)",
            result.geometry.size_label, result.geometry.stack, result.geometry.reach
        );

        let deviation = result.deviation();
        println!(
            "   Distance: {:.1} mm (stack {:+.1}, reach {:+.1})",
            result.distance, deviation.stack, deviation.reach
        );
    }
}

fn print_json_results(matches: &[MatchResult], tolerance: f64) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = matches
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let deviation = m.deviation();
            serde_json::json!({
                "rank": i + 1,
                "bike_id": m.bike.id,
                "brand": m.bike.brand,
                "model_name": m.bike.model_name,
                "price": m.bike.price,
                "image_url": m.bike.image_url,
                "size_label": m.geometry.size_label,
                "stack": m.geometry.stack,
                "reach": m.geometry.reach,
                "target_stack": m.target_stack,
                "target_reach": m.target_reach,
                "distance": m.distance,
                "stack_deviation": deviation.stack,
                "reach_deviation": deviation.reach,
                "quality": m.quality,
                "precise": m.is_precise(),
                "tolerance": tolerance,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[MatchResult]) {
    println!("rank\tbike_id\tbrand\tmodel_name\tsize_label\tstack\treach\tdistance\tquality");
    for (i, m) in matches.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.3}\t{}",
            i + 1,
            m.bike.id,
            m.bike.brand,
            m.bike.model_name,
            m.geometry.size_label,
            m.geometry.stack,
            m.geometry.reach,
            m.distance,
            m.quality,
        );
    }
}
