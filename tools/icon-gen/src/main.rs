use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use types::icon_sizes;

/// Write the SVG placeholder icons for the web app next to this executable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let out = io::generator_dir()?;
    let icons = generator::generate_icons_with(&out, icon_sizes(), |icon| {
        println!("✓ Generated icon: {}", icon.file_name());
    })
    .with_context(|| format!("icon generation aborted in {}", out.display()))?;

    info!(count = icons.len(), dir = %out.display(), "icons written");
    println!("\n{} SVG icons generated successfully!", icons.len());
    print_raster_hint();
    Ok(())
}

fn print_raster_hint() {
    let sizes = icon_sizes()
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("\nNote: the .svg files can be used directly.");
    println!("For real PNG icons, use a tool such as ImageMagick or Inkscape.");
    println!("\nExample with ImageMagick:");
    println!("  for size in {sizes}; do");
    println!("    convert icon-${{size}}.png.svg -resize ${{size}}x${{size}} icon-${{size}}.png");
    println!("  done");
}
