use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use polarmap::config::MapConfig;
use polarmap::geometry::{Geodesy, Projector};
use polarmap::layers::{compose_scene, fence_outline};
use polarmap::output::{FirmwareHeader, PackedBitmap, write_png};
use polarmap::raster::Canvas;

/// Render the city map for the receiver firmware
///
/// Draws the built-in survey onto a 1-bit canvas, saves it as a PNG and
/// prints the C constants and byte array to paste into the firmware.
/// Progress goes to stderr so stdout can be redirected straight into a
/// header file.
///
/// Examples:
///   # Built-in survey, writes map.png
///   polarmap
///
///   # Keep the header next to the firmware sources
///   polarmap -o receiver/map.png > receiver/map.h
///
///   # Override layout constants from a file
///   polarmap --config polarmap.toml
#[derive(Parser, Debug)]
#[command(name = "polarmap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches polarmap.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path (defaults to map.png)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Print the effective configuration and derived scale
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let config = MapConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| config.output.image_path.clone());

    let projector = Projector::from_config(&config);
    let geodesy = Geodesy::new(config.earth_radius_ft);

    if args.verbose {
        print_configuration(&config, &projector, &geodesy, &output_path);
    }

    let spinner = create_spinner("Composing scene...");
    let start = Instant::now();
    let commands = compose_scene(&config, &projector);
    let mut canvas = Canvas::new(config.canvas_width(), config.canvas_height);
    canvas.apply(&commands);
    spinner.finish_with_message(format!(
        "Drew {} commands, {} pixels lit on {}x{} [{:.1}ms]",
        commands.len(),
        canvas.count_set(),
        canvas.width(),
        canvas.height(),
        start.elapsed().as_secs_f64() * 1000.0
    ));

    let spinner = create_spinner("Packing bitmap...");
    let bitmap = PackedBitmap::from_canvas(&canvas);
    spinner.finish_with_message(format!(
        "Packed {}x{} ({} rows trimmed from top, {} bytes)",
        bitmap.width(),
        bitmap.height(),
        bitmap.trimmed_top(),
        bitmap.data().len()
    ));

    let spinner = create_spinner("Writing image...");
    write_png(&output_path, &bitmap).context("Failed to write map image")?;
    spinner.finish_with_message(format!("Wrote {}", output_path.display()));

    let header = FirmwareHeader::new(&config, &projector, &geodesy, &bitmap);
    println!("{}", header);

    eprintln!(
        "Done! Total time: {:.1}ms",
        total_start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}

fn print_configuration(
    config: &MapConfig,
    projector: &Projector,
    geodesy: &Geodesy,
    output_path: &std::path::Path,
) {
    eprintln!("Configuration:");
    eprintln!("  Origin: {}", config.origin);
    eprintln!(
        "  Map: {}px scale width, {}x{} canvas",
        config.map_width,
        config.canvas_width(),
        config.canvas_height
    );
    eprintln!(
        "  Scale: {:.3} ft/px ({} at {} ft spans the width)",
        projector.feet_per_pixel(),
        config.outermost_ring().name,
        config.outermost_ring().radius
    );
    eprintln!("  Origin pixel: {:?}", projector.center());
    eprintln!("  Rings:");
    for ring in &config.rings {
        eprintln!(
            "    {:<10} {:>6} ft -> {:>3} px",
            ring.name,
            ring.radius,
            projector.to_pixels(ring.radius)
        );
    }

    eprintln!(
        "  Fence: {} ft ({} px), {} sides",
        config.fence_distance,
        projector.to_pixels(config.fence_distance),
        config.layout.fence_sides
    );
    if let Some(avg) = geodesy.average_distance(config.origin, &config.fence_posts) {
        eprintln!(
            "  Fence posts: {} surveyed, {:.0} ft average from origin",
            config.fence_posts.len(),
            avg
        );
    }
    for (i, &post) in config.fence_posts.iter().enumerate() {
        let offset = geodesy.offset(config.origin, post);
        eprintln!(
            "    #{} {} -> {:.0} ft at {:.4} rad{}",
            i,
            post,
            offset.distance,
            offset.bearing,
            if i == config.reference_post {
                " (reference)"
            } else {
                ""
            }
        );
    }
    let outline = fence_outline(config, projector);
    let vertices: Vec<String> = outline
        .0
        .iter()
        .skip(1)
        .map(|c| format!("({}, {})", c.x, c.y))
        .collect();
    eprintln!("  Fence vertices (px): {}", vertices.join(" "));
    eprintln!("  Output: {}", output_path.display());
    eprintln!();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
