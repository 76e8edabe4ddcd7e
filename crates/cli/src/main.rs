mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stepline_tui::LabelAlign;
use stepline_types::Direction;

use crate::{
    config::CliOverrides,
    logging::{LogTarget, init_tracing},
};

#[derive(Debug, Parser)]
#[command(name = "stepline", version, about = "Step progress indicator for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Configuration file (.yaml, .yml or .json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of steps
    #[arg(long, global = true)]
    steps: Option<usize>,

    /// Current step, zero-based; clamped to the last step
    #[arg(long, global = true)]
    position: Option<usize>,

    /// Layout axis: horizontal or vertical
    #[arg(long, global = true)]
    direction: Option<Direction>,

    /// Comma-separated step labels
    #[arg(long, global = true, value_delimiter = ',')]
    labels: Option<Vec<String>>,

    /// Label placement within each step slot: start, center or end
    #[arg(long, global = true, value_name = "ALIGN")]
    label_align: Option<LabelAlign>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Interactive demo (default)
    Run,
    /// Print the settled indicator as plain text
    Snapshot {
        #[arg(long, default_value_t = 60)]
        width: u16,
        #[arg(long, default_value_t = 6)]
        height: u16,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            steps: self.steps,
            position: self.position,
            direction: self.direction,
            labels: self.labels.clone(),
            label_align: self.label_align,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Run);
    let target = match command {
        Command::Run => LogTarget::File,
        Command::Snapshot { .. } => LogTarget::Stderr,
    };
    init_tracing(target)?;

    let (indicator, style) = config::load(cli.config.as_deref(), cli.overrides()).context("load configuration")?;
    match command {
        Command::Run => stepline_tui::run(indicator, style).await,
        Command::Snapshot { width, height } => {
            for line in stepline_tui::snapshot(indicator, style, width, height) {
                println!("{line}");
            }
            Ok(())
        }
    }
}
