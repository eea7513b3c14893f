use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timestamp_color::assets::{AssetLoader, ConfigSource};
use timestamp_color::{ColorConfig, ColorSample, Interpolator};

#[derive(Parser)]
#[command(name = "timestamp-color")]
#[command(about = "Map time durations to colors along a configurable gradient")]
struct Cli {
    /// Config file (overrides CONFIG_FILE)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the color for one or more durations in seconds
    Color {
        /// Durations in seconds
        #[arg(required = true, allow_negative_numbers = true)]
        seconds: Vec<f64>,

        /// Also print the interpolated RGB values
        #[arg(long)]
        rgb: bool,

        /// Print samples as JSON
        #[arg(long, conflicts_with = "rgb")]
        json: bool,
    },
    /// Print the color for the age of a timestamp
    Age {
        /// RFC 3339 timestamp (e.g. 2024-05-01T12:00:00Z) or Unix seconds
        timestamp: String,
    },
    /// Print every configured breakpoint with its position and color
    Scale {
        /// Print samples as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract the embedded default config.yaml
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timestamp_color=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let loader = match cli.config {
        Some(ref path) => AssetLoader::new(Some(path.clone())),
        None => AssetLoader::from_env(),
    };

    match cli.command {
        Some(Commands::Color { seconds, rgb, json }) => {
            let interpolator = build_interpolator(&loader, cli.config.is_some())?;
            run_color_command(&mut std::io::stdout().lock(), &interpolator, &seconds, rgb, json)
        }
        Some(Commands::Age { timestamp }) => {
            let interpolator = build_interpolator(&loader, cli.config.is_some())?;
            let timestamp = parse_timestamp(&timestamp)?;
            println!("{}", interpolator.color_for_age(timestamp, Utc::now()));
            Ok(())
        }
        Some(Commands::Scale { json }) => {
            let interpolator = build_interpolator(&loader, cli.config.is_some())?;
            write_samples(&mut std::io::stdout().lock(), &interpolator.scale(), json, true)
        }
        Some(Commands::Init { force }) => run_init_command(&loader, force),
        None => run_status_command(&loader, cli.config.is_some()),
    }
}

/// Build the interpolator from the active config.
///
/// An explicit --config file that exists must load cleanly; a missing one, or
/// a file from CONFIG_FILE, falls back to the embedded defaults with a warning.
fn build_interpolator(loader: &AssetLoader, strict: bool) -> anyhow::Result<Interpolator> {
    let config = load_config(loader, strict)?;
    Interpolator::from_config(&config).context("Invalid color configuration")
}

fn load_config(loader: &AssetLoader, strict: bool) -> anyhow::Result<ColorConfig> {
    match loader.config_source() {
        ConfigSource::File(path) if strict => ColorConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        _ => Ok(ColorConfig::load_from_assets(loader)),
    }
}

fn run_color_command(
    out: &mut impl Write,
    interpolator: &Interpolator,
    seconds: &[f64],
    rgb: bool,
    json: bool,
) -> anyhow::Result<()> {
    let samples: Vec<ColorSample> = seconds.iter().map(|&s| interpolator.sample(s)).collect();
    if json || rgb {
        return write_samples(out, &samples, json, false);
    }
    for sample in &samples {
        writeln!(out, "{}", sample.color)?;
    }
    Ok(())
}

fn write_samples(
    out: &mut impl Write,
    samples: &[ColorSample],
    json: bool,
    with_position: bool,
) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(samples)?)?;
        return Ok(());
    }

    for sample in samples {
        if with_position {
            writeln!(
                out,
                "{:>12}  {:.4}  {}",
                sample.seconds, sample.position, sample.color
            )?;
        } else {
            writeln!(
                out,
                "{}  {}  ({:.2}, {:.2}, {:.2})",
                sample.seconds, sample.color, sample.rgb.r, sample.rgb.g, sample.rgb.b
            )?;
        }
    }
    Ok(())
}

/// Parse an RFC 3339 timestamp or integer Unix seconds
fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(secs) = s.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0)
            .with_context(|| format!("Unix timestamp out of range: {s}"));
    }
    let parsed = DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("Invalid timestamp: {s}"))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Extract the embedded config to the filesystem
fn run_init_command(loader: &AssetLoader, force: bool) -> anyhow::Result<()> {
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    for f in &report.skipped {
        println!("  - {f} (exists, use --force to overwrite)");
    }
    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(loader: &AssetLoader, strict: bool) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("timestamp-color v{VERSION}");
    println!("Map time durations to colors along a configurable gradient\n");

    let config_source = match loader.config_source() {
        ConfigSource::Embedded => "embedded".to_string(),
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Missing(path) => {
            format!("embedded ({} not found)", path.display())
        }
    };
    println!("Config: {config_source}");

    let config = load_config(loader, strict)?;
    let interpolator = Interpolator::from_config(&config).context("Invalid color configuration")?;
    let breakpoints = interpolator.breakpoints();
    println!(
        "  Breakpoints: {} ({}s .. {}s)",
        breakpoints.len(),
        breakpoints.min(),
        breakpoints.max()
    );
    for group in &config.intervals {
        println!("    {:<10} {:?}", group.name, group.seconds);
    }
    println!("  Gradient stops: {}", interpolator.gradient().stops().len());
    for stop in interpolator.gradient().stops() {
        println!("    {:.3}  {}", stop.position, stop.color);
    }

    println!("\nRun 'timestamp-color --help' for commands.");
    Ok(())
}
