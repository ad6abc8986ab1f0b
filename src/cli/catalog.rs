use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::{truncate, CatalogSourceArgs, OutputFormat};
use crate::core::bike::Bike;
use crate::core::types::BikeId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all bikes in the catalog
    List {
        /// Filter by brand (case-insensitive substring)
        #[arg(long)]
        brand: Option<String>,

        #[command(flatten)]
        source: CatalogSourceArgs,
    },

    /// Show a bike and its full size table
    Show {
        /// Bike ID
        #[arg(required = true)]
        id: String,

        #[command(flatten)]
        source: CatalogSourceArgs,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        #[command(flatten)]
        source: CatalogSourceArgs,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the bike is unknown, or the
/// export cannot be written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { brand, source } => {
            run_list(&source, brand.as_deref(), format, verbose)
        }
        CatalogCommands::Show { id, source } => run_show(&source, &id, format, verbose),
        CatalogCommands::Export { output, source } => run_export(&source, output, verbose),
    }
}

fn run_list(
    source: &CatalogSourceArgs,
    brand_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let loaded = source.load(verbose)?;

    let filtered: Vec<&Bike> = loaded
        .catalog
        .bikes()
        .iter()
        .filter(|b| {
            brand_filter.map_or(true, |brand| {
                b.brand.to_lowercase().contains(&brand.to_lowercase())
            })
        })
        .collect();

    print_bike_list(&filtered, "Bike Catalog", format)
}

/// Render a list of bikes; shared with `favorites list`
pub(crate) fn print_bike_list(
    bikes: &[&Bike],
    title: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            // Calculate column widths dynamically
            let id_width = bikes.iter().map(|b| b.id.0.len()).max().unwrap_or(2).max(2);
            let name_width = bikes
                .iter()
                .map(|b| b.display_name().len().min(35))
                .max()
                .unwrap_or(4)
                .max(4);

            let total_width = id_width + name_width + 10 + 20 + 3;

            println!("{title} ({} bikes)\n", bikes.len());
            println!(
                "{:<id_w$} {:<name_w$} {:>10} {:<20}",
                "ID",
                "Name",
                "Price",
                "Sizes",
                id_w = id_width,
                name_w = name_width,
            );
            println!("{}", "-".repeat(total_width));

            for b in bikes {
                println!(
                    "{:<id_w$} {:<name_w$} {:>10} {:<20}",
                    b.id.0,
                    truncate(&b.display_name(), name_width),
                    format!("€{:.0}", b.price),
                    size_range(b),
                    id_w = id_width,
                    name_w = name_width,
                );
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = bikes
                .iter()
                .map(|b| {
                    serde_json::json!({
                        "id": b.id,
                        "brand": b.brand,
                        "model_name": b.model_name,
                        "price": b.price,
                        "image_url": b.image_url,
                        "size_count": b.geometries.len(),
                        "sizes": b.geometries.iter().map(|g| &g.size_label).collect::<Vec<_>>(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\tbrand\tmodel_name\tprice\tsize_count\timage_url");
            for b in bikes {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    b.id,
                    b.brand,
                    b.model_name,
                    b.price,
                    b.geometries.len(),
                    b.image_url.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

fn run_show(
    source: &CatalogSourceArgs,
    id: &str,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let loaded = source.load(verbose)?;
    let bike = loaded
        .catalog
        .get(&BikeId::new(id))
        .ok_or_else(|| anyhow::anyhow!("Bike '{id}' not found in catalog"))?;

    match format {
        OutputFormat::Text => {
            println!("{}", bike.display_name());
            println!("   ID: {}", bike.id);
            println!("   Price: €{:.0}", bike.price);
            if let Some(url) = &bike.image_url {
                println!("   Image: {url}");
            }

            println!("\n   Geometry ({} sizes):", bike.geometries.len());
            println!(
                "   {:<6} {:>7} {:>7} {:>9} {:>6} {:>6}",
                "Size", "Stack", "Reach", "Top tube", "STA", "HTA"
            );
            for g in &bike.geometries {
                println!(
                    "   {:<6} {:>7.0} {:>7.0} {:>9} {:>6} {:>6}",
                    g.size_label,
                    g.stack,
                    g.reach,
                    optional(g.top_tube_length, 0),
                    optional(g.seat_tube_angle, 2),
                    optional(g.head_tube_angle, 2),
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(bike)?);
        }
        OutputFormat::Tsv => {
            println!("size_label\tstack\treach\ttop_tube_length\tseat_tube_angle\thead_tube_angle");
            for g in &bike.geometries {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    g.size_label,
                    g.stack,
                    g.reach,
                    g.top_tube_length.map(|v| v.to_string()).unwrap_or_default(),
                    g.seat_tube_angle.map(|v| v.to_string()).unwrap_or_default(),
                    g.head_tube_angle.map(|v| v.to_string()).unwrap_or_default(),
                );
            }
        }
    }

    Ok(())
}

#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
fn run_export(source: &CatalogSourceArgs, output: PathBuf, verbose: bool) -> anyhow::Result<()> {
    let loaded = source.load(verbose)?;
    let json = loaded.catalog.to_json()?;
    std::fs::write(&output, json)?;
    println!(
        "Exported {} bikes to {}",
        loaded.catalog.len(),
        output.display()
    );
    Ok(())
}

/// "2XS-2XL", or "-" for a bike with no sizes
fn size_range(bike: &Bike) -> String {
    match (bike.geometries.first(), bike.geometries.last()) {
        (Some(first), Some(last)) if first.size_label != last.size_label => {
            format!("{}-{}", first.size_label, last.size_label)
        }
        (Some(only), _) => only.size_label.clone(),
        _ => "-".to_string(),
    }
}

fn optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.precision$}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Geometry;

    #[test]
    fn test_size_range() {
        let bike = Bike::new("b", "B", "M", 1.0).with_geometries(vec![
            Geometry::new("47", 506.0, 368.0),
            Geometry::new("60", 615.0, 408.0),
        ]);
        assert_eq!(size_range(&bike), "47-60");

        let single = Bike::new("s", "B", "M", 1.0)
            .with_geometries(vec![Geometry::new("OS", 550.0, 390.0)]);
        assert_eq!(size_range(&single), "OS");

        assert_eq!(size_range(&Bike::new("e", "B", "M", 1.0)), "-");
    }

    #[test]
    fn test_optional_formatting() {
        assert_eq!(optional(Some(73.25), 2), "73.25");
        assert_eq!(optional(Some(560.0), 0), "560");
        assert_eq!(optional(None, 2), "-");
    }
}
