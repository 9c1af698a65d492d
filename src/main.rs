use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use planar_brush::{Palette, PaletteKind, Rgb, PALETTE_SIZE};
use vgadither::ingest::open_ppm;
use vgadither::models::{AppConfig, BrushReport, OutputMode};
use vgadither::rendering;
use vgadither::services::DisplayPipeline;

/// Environment variable naming the default config file
const CONFIG_ENV: &str = "VGADITHER_CONFIG";

#[derive(Parser)]
#[command(name = "vgadither")]
#[command(about = "Ordered dithering of true-color images onto 16-color EGA/VGA planar displays")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a PPM image onto the display and write a PNG preview
    Render {
        /// Input PPM/PNM file, or "-" for stdin
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Also write the raw bit planes (blue, green, red, intensity) to this file
        #[arg(long)]
        planes: Option<PathBuf>,

        /// Gamma exponent applied before dithering (e.g. 2.2)
        #[arg(short, long)]
        gamma: Option<f32>,

        /// Write the nearest solid color instead of the dither pattern
        #[arg(long)]
        best_match: bool,

        /// Palette layout: "additive" or "standard"
        #[arg(short, long)]
        palette: Option<PaletteKind>,

        /// YAML config file (defaults to $VGADITHER_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show the dither brush for one color
    Brush {
        /// Color as #RRGGBB or R,G,B
        color: Rgb,

        /// Palette layout used to show the best match
        #[arg(short, long, default_value = "additive")]
        palette: PaletteKind,

        /// Print the brush as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the 16 palette entries
    Palette {
        /// Palette layout: "additive" or "standard"
        #[arg(short, long, default_value = "additive")]
        palette: PaletteKind,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            planes,
            gamma,
            best_match,
            palette,
            config,
        }) => {
            init_logging();
            let overrides = RenderOverrides {
                gamma,
                best_match,
                palette,
            };
            run_render_command(&input, &output, planes.as_deref(), overrides, config)
        }
        Some(Commands::Brush {
            color,
            palette,
            json,
        }) => run_brush_command(color, palette, json),
        Some(Commands::Palette { palette }) => {
            run_palette_command(palette);
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vgadither=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Command-line values that take precedence over the config file
struct RenderOverrides {
    gamma: Option<f32>,
    best_match: bool,
    palette: Option<PaletteKind>,
}

impl RenderOverrides {
    fn apply(self, config: &mut AppConfig) {
        if let Some(gamma) = self.gamma {
            config.gamma = Some(gamma);
        }
        if self.best_match {
            config.output = OutputMode::BestMatch;
        }
        if let Some(kind) = self.palette {
            config.palette = kind.into();
        }
    }
}

/// Config path from the flag, falling back to the environment
fn config_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
}

/// Decode, dither and export one image
fn run_render_command(
    input: &Path,
    output: &Path,
    planes: Option<&Path>,
    overrides: RenderOverrides,
    config: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut config = AppConfig::load_or_default(config_path(config).as_deref())?;
    overrides.apply(&mut config);
    config.validate()?;

    let image =
        open_ppm(input).with_context(|| format!("Failed to read {}", input.display()))?;
    tracing::info!(
        input = %input.display(),
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );

    let pipeline = DisplayPipeline::new(&config);
    let framebuffer = pipeline
        .render(&image)
        .with_context(|| format!("Failed to render {}", input.display()))?;

    let png_bytes = pipeline.preview_png(&framebuffer)?;
    std::fs::write(output, &png_bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Rendered {} ({} bytes)", output.display(), png_bytes.len());

    if let Some(path) = planes {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let written = rendering::write_planes(&framebuffer, BufWriter::new(file))?;
        println!("Wrote planes to {} ({written} bytes)", path.display());
    }

    Ok(())
}

/// Print the brush, tile and best match for one color
fn run_brush_command(color: Rgb, kind: PaletteKind, json: bool) -> anyhow::Result<()> {
    let report = BrushReport::new(color, &Palette::new(kind));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Color {} (value {}, {} branch)\n",
        report.color, report.value, report.branch
    );
    println!("Planes:");
    for plane in &report.planes {
        println!("  {:<10} {}  {:>2}/16", plane.plane, plane.mask, plane.cells);
    }
    println!("\nTile:");
    for row in &report.tile {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:X}")).collect();
        println!("  {}", cells.join(" "));
    }
    println!(
        "\nBest match: 0x{:02X} {} ({kind} palette)",
        report.best_match, report.best_match_color
    );
    Ok(())
}

/// List palette registers and their colors
fn run_palette_command(kind: PaletteKind) {
    let palette = Palette::new(kind);

    println!("{kind} palette:\n");
    println!("  Index  Register  Color");
    for index in 0..PALETTE_SIZE as u8 {
        println!(
            "  0x{index:X}    0x{:02X}      {}",
            palette.register(index),
            palette.color(index)
        );
    }
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV).ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("vgadither v{VERSION}");
    println!("Ordered dithering onto 16-color planar displays\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG         = {}",
        rust_log.as_deref().unwrap_or("vgadither=warn (default)")
    );

    println!("\nConfiguration:");
    match AppConfig::load_or_default(config_file.as_deref().map(Path::new)) {
        Ok(config) => {
            let display = config.display_spec();
            println!("  Display: {}x{}", display.width, display.height);
            println!("  Palette: {}", config.palette_kind());
            println!("  Output:  {:?}", config.pixel_source());
            match config.gamma {
                Some(gamma) => println!("  Gamma:   {gamma}"),
                None => println!("  Gamma:   (none)"),
            }
        }
        Err(e) => println!("  Error: {e}"),
    }

    println!("\nCommands:");
    println!("  vgadither render   Dither a PPM image to a PNG preview");
    println!("  vgadither brush    Show the dither brush for a color");
    println!("  vgadither palette  List the palette entries");
    println!("\nRun 'vgadither --help' for more details.");
}
