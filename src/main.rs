//! Command-line front end for orrery
//!
//! ```bash
//! orrery check solar_system.txt
//! orrery convert solar_system.txt normalized.txt
//! orrery reset
//! orrery record solar_system.txt --time 0
//! orrery summary
//! orrery plot
//! ```
//!
//! Every statistics command works on the file named by `--stats`, falling
//! back to `$ORRERY_STATS` and then `statistic_of_the_last_launch.txt`.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use orrery::config::{ViewerConfig, ARTIFACT_ENV_VAR, DEFAULT_ARTIFACT_NAME};
use orrery::loader::{self, DiagnosticKind};
use orrery::statistics::{self, ReferencePolicy, StatisticsArtifact};
use orrery::visualization::{self, PlotBounds};
use orrery::PlotViewer;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "Body files, run statistics and statistics plots for star/planet simulations")]
struct Cli {
    /// Statistics artifact to operate on
    #[arg(long, global = true, env = ARTIFACT_ENV_VAR, default_value = DEFAULT_ARTIFACT_NAME)]
    stats: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a body file and report every problem line
    Check {
        /// Initial-condition file
        input: PathBuf,
    },

    /// Load a body file and write it back in normalized form
    Convert {
        input: PathBuf,
        output: PathBuf,
    },

    /// Append one statistics sample per planet in a body file
    Record {
        /// Body file holding the current state
        input: PathBuf,

        /// Simulation time stamped on the samples
        #[arg(short, long)]
        time: f64,

        /// Reference body: single, last, or a body index
        #[arg(short, long, default_value = "single")]
        reference: ReferencePolicy,
    },

    /// Delete the statistics artifact before a fresh run
    Reset,

    /// Print sample count and per-panel ranges without opening a window
    Summary,

    /// Open the statistics plot window
    Plot {
        #[arg(long, default_value = "1200")]
        width: u32,

        #[arg(long, default_value = "800")]
        height: u32,

        #[arg(long)]
        title: Option<String>,

        /// Leave the time-vs-time cell empty
        #[arg(long)]
        hide_time_vs_time: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let artifact = StatisticsArtifact::new(&cli.stats);

    match cli.command {
        Commands::Check { input } => {
            let report = loader::load_lenient(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;

            println!("{}: {} bodies", input.display(), report.bodies.len());
            for diagnostic in &report.diagnostics {
                match &diagnostic.kind {
                    DiagnosticKind::UnknownKind { tag } => {
                        println!("  line {}: unknown space object `{}`", diagnostic.line, tag)
                    }
                    DiagnosticKind::Parse(err) => println!("  line {}: {}", diagnostic.line, err),
                }
            }

            if report.parse_failures() > 0 {
                bail!("{} malformed lines", report.parse_failures());
            }
        }

        Commands::Convert { input, output } => {
            let bodies = loader::load(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;
            loader::save(&output, &bodies)
                .with_context(|| format!("failed to save {}", output.display()))?;
        }

        Commands::Record {
            input,
            time,
            reference,
        } => {
            let bodies = loader::load(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;
            let written = statistics::record_sample(&artifact, &bodies, time, reference)
                .context("failed to record statistics")?;
            info!("Appended {} samples at t={}", written, time);
        }

        Commands::Reset => {
            let removed = artifact
                .reset()
                .with_context(|| format!("failed to remove {}", cli.stats.display()))?;
            if !removed {
                info!("No statistics file at {}", cli.stats.display());
            }
        }

        Commands::Summary => {
            let plots = visualization::compose(&artifact)
                .with_context(|| format!("failed to read {}", cli.stats.display()))?;

            println!("{}: {} samples", cli.stats.display(), plots.sample_count);
            for panel in &plots.panels {
                match panel.bounds() {
                    Some(PlotBounds {
                        min_x,
                        max_x,
                        min_y,
                        max_y,
                    }) => println!(
                        "  {:<28} {} [{}, {}]  {} [{}, {}]",
                        panel.title,
                        panel.x_axis.label(),
                        min_x,
                        max_x,
                        panel.y_axis.label(),
                        min_y,
                        max_y
                    ),
                    None => println!("  {:<28} no finite points", panel.title),
                }
            }
        }

        Commands::Plot {
            width,
            height,
            title,
            hide_time_vs_time,
        } => {
            let mut config = ViewerConfig::default()
                .with_size(width, height)
                .with_time_vs_time(!hide_time_vs_time);
            if let Some(title) = title {
                config = config.with_title(title);
            }

            let mut viewer = PlotViewer::new(config);
            visualization::render(&artifact, &mut viewer)
                .with_context(|| format!("failed to plot {}", cli.stats.display()))?;
        }
    }

    Ok(())
}
