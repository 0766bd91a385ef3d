use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use std::path::PathBuf;

use job_balance::batch::{evaluate_rows, read_rows};
use job_balance::export::export_report;
use job_balance::{Config, Dimension, PerDimension, RenderOptions, ViewState, save_svg};

#[derive(Debug, Parser)]
#[command(name = "job_balance", version, about = "X-test job balance diagram")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one set of values and print the result
    Eval {
        #[command(flatten)]
        values: ValueArgs,
        /// Also write the diagram to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Evaluate every row of a CSV file and export a report
    Batch {
        input: PathBuf,
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Render the diagram to SVG
    Render {
        #[command(flatten)]
        values: ValueArgs,
        /// Output file (defaults to a timestamped file in the output directory)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Container width in px, overriding the configured layout
        #[arg(long)]
        width: Option<f64>,
    },
}

#[derive(Debug, Args)]
struct ValueArgs {
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(0..=10))]
    control: i32,
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(0..=10))]
    accountability: i32,
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(0..=10))]
    influence: i32,
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(i32).range(0..=10))]
    support: i32,
}

impl ValueArgs {
    fn values(&self) -> PerDimension<i32> {
        PerDimension::from_fn(|dim| match dim {
            Dimension::Control => self.control,
            Dimension::Accountability => self.accountability,
            Dimension::Influence => self.influence,
            Dimension::Support => self.support,
        })
    }
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    debug!("{config:#?}");
    let ranges = config.ranges()?;

    match cli.command {
        Command::Eval { values, svg } => {
            let view = ViewState::new(ranges, config.layout).with_values(values.values());
            let eval = view.evaluate();
            for (dim, v) in eval.values.iter() {
                let raw = view.raw_value(dim);
                if raw != *v {
                    info!("{dim}: {v} (snapped from {raw})");
                } else {
                    info!("{dim}: {v}");
                }
            }
            info!(
                "gap: {:.0}% -> {:.0}% ({:+} steps)",
                eval.gap.left * 100.0,
                eval.gap.right * 100.0,
                eval.gap.signed_steps()
            );
            println!("{} {}", eval.status_icon(), eval.status_text());

            if let Some(path) = svg {
                save_svg(&view, &RenderOptions::default(), &path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
        }
        Command::Batch { input, output_dir } => {
            let rows = read_rows(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let results = evaluate_rows(&rows, &ranges, &config.layout);
            let balanced = results.iter().filter(|e| e.balanced).count();
            info!("{balanced}/{} rows balanced", results.len());

            let dir = output_dir.unwrap_or_else(|| config.output_dir());
            let path = export_report(&results, Some(&dir))?;
            info!("Report saved to: {}", path.display());
        }
        Command::Render { values, out, width } => {
            let mut view = ViewState::new(ranges, config.layout).with_values(values.values());
            if let Some(width) = width {
                view.resize(width);
                view.layout().validate()?;
            }
            let opt = RenderOptions::default();
            let path = match out {
                Some(path) => {
                    save_svg(&view, &opt, &path)?;
                    path
                }
                None => job_balance::save_svg_to_dir(&view, &opt, &config.output_dir())?,
            };
            println!("{}", path.display());
        }
    }

    Ok(())
}
