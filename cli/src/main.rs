//! votelens: entry point for driving the delegation dashboard from a snapshot file.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use votelens_dashboard::{Dashboard, DashboardConfig, Snapshot};
use votelens_hierarchy::{ChartView, Slice};
use votelens_roster::{RosterView, SortField};
use votelens_utils::LogFormat;

#[derive(Parser)]
#[command(name = "votelens", about = "Governance delegation dashboard")]
struct Cli {
    /// Log level: "trace", "debug", "info", "warn", "error".
    /// Defaults to the config file's value.
    #[arg(long, env = "VOTELENS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "VOTELENS_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "VOTELENS_CONFIG")]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the vote-weight hierarchy as JSON.
    Chart {
        /// Snapshot JSON file.
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the delegate roster, applying header clicks in order.
    Roster {
        /// Snapshot JSON file.
        #[arg(long)]
        input: PathBuf,

        /// Sort request ("lockTotal" or "delegatorCount"); repeat to click again.
        #[arg(long = "sort")]
        sorts: Vec<SortField>,
    },
    /// Resolve a click and print the resulting selection.
    Select {
        /// Snapshot JSON file.
        #[arg(long)]
        input: PathBuf,

        /// Chart leaf as "Branch label/leaf id", e.g. "Recognized delegates/Alice".
        #[arg(long, conflicts_with = "row")]
        path: Option<String>,

        /// Roster row index (after any --sort requests).
        #[arg(long)]
        row: Option<usize>,

        /// Sort requests applied before a row click.
        #[arg(long = "sort")]
        sorts: Vec<SortField>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    votelens_utils::init_logging(config.log_format, &config.log_level);
    tracing::debug!(
        format = config.log_format.as_str(),
        level = %config.log_level,
        "logging initialised"
    );
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let mut dashboard = Dashboard::new(config);

    match cli.command {
        Command::Chart { input } => {
            load(&mut dashboard, &input)?;
            print_chart(&dashboard)?;
        }
        Command::Roster { input, sorts } => {
            load(&mut dashboard, &input)?;
            for field in sorts {
                dashboard.request_sort(field);
            }
            print_roster(&dashboard);
        }
        Command::Select {
            input,
            path,
            row,
            sorts,
        } => {
            load(&mut dashboard, &input)?;
            for field in sorts {
                dashboard.request_sort(field);
            }
            match (path, row) {
                (Some(path), _) => {
                    let Some(slice) = Slice::parse_leaf(&path) else {
                        bail!("cannot parse chart path {path:?}: expected \"<branch label>/<leaf id>\"");
                    };
                    if !dashboard.click_slice(&slice) {
                        tracing::info!("click on {path:?} selected nothing");
                    }
                }
                (None, Some(index)) => dashboard.click_row(index)?,
                (None, None) => bail!("select needs either --path or --row"),
            }
            println!("{}", serde_json::to_string_pretty(dashboard.selection())?);
        }
    }

    Ok(())
}

fn load(dashboard: &mut Dashboard, input: &Path) -> anyhow::Result<()> {
    let snapshot = Snapshot::from_json_file(input)
        .with_context(|| format!("reading snapshot {}", input.display()))?;
    dashboard.load_snapshot(snapshot)?;
    Ok(())
}

fn print_chart(dashboard: &Dashboard) -> anyhow::Result<()> {
    let view = dashboard.chart_view();
    if let ChartView::Placeholder { title } = &view {
        tracing::info!("{title}: balances not loaded yet");
    }
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn print_roster(dashboard: &Dashboard) {
    let headers: Vec<String> = dashboard
        .roster_headers()
        .into_iter()
        .map(|h| {
            if h.active {
                format!("{} {}", h.label, h.direction.arrow())
            } else {
                h.label.to_string()
            }
        })
        .collect();

    println!("{}", dashboard.config().roster_title);
    println!("{:>4} {:<24} {:>14} {:>16}", "#", "Delegate", headers[0], headers[1]);
    match dashboard.roster_view() {
        RosterView::Placeholder { rows, columns } => {
            let cells = vec!["..."; columns].join(" ");
            for _ in 0..rows {
                println!("{:>4} {cells}", "");
            }
        }
        RosterView::Rows { lines } => {
            for (i, line) in lines.iter().enumerate() {
                println!(
                    "{:>4} {:<24} {:>14} {:>16}  {}",
                    i, line.delegate, line.delegators, line.lock_total, line.link
                );
            }
        }
    }
}
