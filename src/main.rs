use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_pipeline::Rgba32;
use deltae::config::{AppConfig, ConfigSource, CONFIG_ENV, DEFAULT_CONFIG_FILE};
use deltae::diff::{diff_images, heatmap, DiffOptions};
use deltae::image::{read_png, write_png};
use deltae::metric::{compare_colors, MetricKind};
use deltae::space::{convert, Space, Standard};

#[derive(Parser)]
#[command(name = "deltae")]
#[command(about = "Perceptual color difference for colors and PNG images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two colors
    Compare {
        /// First color as hex (#RGB, #RGBA, #RRGGBB or #RRGGBBAA)
        a: String,

        /// Second color as hex
        b: String,

        /// Difference formula (defaults to the configured metric)
        #[arg(short, long)]
        metric: Option<MetricKind>,

        /// Video standard for the yuv metric
        #[arg(short, long)]
        standard: Option<Standard>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show a color's coordinates in a key space
    Convert {
        /// Color as hex
        color: String,

        /// Target space
        #[arg(long, default_value = "lab")]
        space: Space,

        /// Video standard for yuv and ycbcr
        #[arg(short, long)]
        standard: Option<Standard>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Compare two PNG images pixel by pixel
    Diff {
        /// Reference image
        a: PathBuf,

        /// Image to check
        b: PathBuf,

        /// Difference formula (defaults to the configured metric)
        #[arg(short, long)]
        metric: Option<MetricKind>,

        /// Normalized distance (0..1) above which a pixel differs
        #[arg(short, long)]
        threshold: Option<f32>,

        /// Write a heatmap PNG of the per-pixel distances
        #[arg(long)]
        heatmap: Option<PathBuf>,

        /// Compare on a single thread
        #[arg(long)]
        sequential: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deltae=warn,color_pipeline=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let (config, source) = AppConfig::load();

    match cli.command {
        Some(Commands::Compare {
            a,
            b,
            metric,
            standard,
            json,
        }) => run_compare_command(&config, &a, &b, metric, standard, json),
        Some(Commands::Convert {
            color,
            space,
            standard,
            json,
        }) => run_convert_command(&config, &color, space, standard, json),
        Some(Commands::Diff {
            a,
            b,
            metric,
            threshold,
            heatmap,
            sequential,
            json,
        }) => {
            let options = DiffOptions {
                metric: metric.unwrap_or(config.metric),
                standard: config.standard,
                threshold: threshold.unwrap_or(config.threshold),
                parallel: config.parallel && !sequential,
            };
            let passed = run_diff_command(&a, &b, &options, heatmap.as_deref(), json)?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            run_status_command(&config, &source);
            Ok(())
        }
    }
}

/// Compare two hex colors and print the difference
fn run_compare_command(
    config: &AppConfig,
    a: &str,
    b: &str,
    metric: Option<MetricKind>,
    standard: Option<Standard>,
    json: bool,
) -> anyhow::Result<()> {
    let a: Rgba32 = a.parse()?;
    let b: Rgba32 = b.parse()?;
    let metric = metric.unwrap_or(config.metric);
    let cmp = compare_colors(metric, standard.unwrap_or(config.standard), a, b);

    if json {
        println!("{}", serde_json::to_string_pretty(&cmp)?);
    } else {
        println!("{a} vs {b}");
        println!("  {metric}: {:.4} (normalized {:.4})", cmp.raw, cmp.distance);
    }
    Ok(())
}

/// Convert a hex color into a key space and print its coordinates
fn run_convert_command(
    config: &AppConfig,
    color: &str,
    space: Space,
    standard: Option<Standard>,
    json: bool,
) -> anyhow::Result<()> {
    let color: Rgba32 = color.parse()?;
    let coords = convert(color, space, standard.unwrap_or(config.standard));

    if json {
        println!("{}", serde_json::to_string_pretty(&coords)?);
    } else {
        println!("{color}: {coords}");
    }
    Ok(())
}

/// Compare two PNG files. Returns whether every pixel was within the threshold.
fn run_diff_command(
    a: &Path,
    b: &Path,
    options: &DiffOptions,
    heatmap_path: Option<&Path>,
    json: bool,
) -> anyhow::Result<bool> {
    let left = read_png(a)?;
    let right = read_png(b)?;
    let (report, distances) = diff_images(&left, &right, options)?;

    if let Some(path) = heatmap_path {
        let map = heatmap(&distances, report.width, report.height, options.threshold);
        write_png(path, &map)?;
        tracing::info!(path = %path.display(), "Wrote heatmap");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(report.passed)
}

/// Display status and configuration information
fn run_status_command(config: &AppConfig, source: &ConfigSource) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_env = std::env::var(CONFIG_ENV).ok();

    // Header
    println!("deltae v{VERSION} - perceptual color difference\n");

    // Environment variables section
    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_env
            .as_deref()
            .unwrap_or(&format!("{DEFAULT_CONFIG_FILE} (default)"))
    );

    // Configuration section
    println!("\nConfiguration ({source}):");
    println!("  metric    = {}", config.metric);
    println!("  standard  = {}", config.standard.name());
    println!("  threshold = {}", config.threshold);
    println!("  parallel  = {}", config.parallel);

    println!("\nMetrics:");
    let names: Vec<&str> = MetricKind::all().iter().map(|m| m.name()).collect();
    println!("  {}", names.join(", "));

    // Commands section
    println!("\nCommands:");
    println!("  deltae compare   Compare two colors");
    println!("  deltae convert   Show a color in Lab, DIN99, Oklab, YUV or YCbCr");
    println!("  deltae diff      Compare two PNG images");
    println!("\nRun 'deltae --help' for more details.");
}
