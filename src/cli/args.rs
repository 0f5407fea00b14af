//! Command-line argument definitions shared by the CLI tools.

use clap::{Args, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `OID = TYPE: value` lines.
    #[default]
    Human,
    /// A JSON document.
    Json,
}

/// Table source arguments.
#[derive(Debug, Args)]
pub struct TableArgs {
    /// JSON file holding the table entries.
    #[arg(short = 't', long = "table", value_name = "FILE")]
    pub table: std::path::PathBuf,
}

/// Output and logging arguments.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format.
    #[arg(short = 'O', long = "output", value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Print each lookup's range and timing to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Log filter used when RUST_LOG is not set (e.g. `agentx_oidlist=trace`).
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log: String,
}

impl OutputArgs {
    /// Install a tracing subscriber writing to stderr.
    ///
    /// `RUST_LOG` takes precedence over `--log`.
    pub fn init_tracing(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}
