use clap::Parser;
use std::path::PathBuf;

/// Show a recipient list that fits the terminal, with a badge for the rest 📨
#[derive(Parser, Debug, Default)]
#[command(name = "recipients", version, about)]
pub struct Args {
    /// Recipient display names or addresses
    pub recipients: Vec<String>,

    /// Read recipients from a file (one per line); the file is watched for changes
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Cells reserved after the names for the overflow marker
    #[arg(long)]
    pub reserve: Option<u16>,

    /// Container width as a percentage of the terminal (20-100)
    #[arg(long, short = 'w', value_parser = clap::value_parser!(u16).range(20..=100))]
    pub width_percent: Option<u16>,

    /// Quiet period before a terminal resize is applied, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Print the layout for a container of WIDTH cells as JSON and exit
    #[arg(long, value_name = "WIDTH")]
    pub measure: Option<u16>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}
