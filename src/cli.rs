use clap::Parser;
use std::path::PathBuf;

use fw_compare::application::dto::OutputFormat;

/// Compare firewall appliance specifications across vendors
#[derive(Parser, Debug)]
#[command(name = "fw-compare")]
#[command(version)]
#[command(
    about = "Filter, sort and annotate a catalog of firewall appliances, then render or export it",
    long_about = None
)]
pub struct Args {
    /// Output format: table, csv or markdown [default: table]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// JSON catalog fixture to use instead of the built-in catalog
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Config file path (defaults to fw-compare.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only show these vendors (key or name). Can be specified multiple times
    #[arg(short, long = "vendor", value_name = "VENDOR")]
    pub vendors: Vec<String>,

    /// Only show these tiers: soho, smb, midmarket, enterprise, datacenter
    #[arg(short, long = "tier", value_name = "TIER")]
    pub tiers: Vec<String>,

    /// Only show these form factors: desktop, 1u, 2u
    #[arg(long = "form-factor", value_name = "FORM")]
    pub form_factors: Vec<String>,

    /// Case-insensitive search over model and vendor name
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Column key to sort by, e.g. fwThroughput, maxSessions, model
    #[arg(long, value_name = "KEY")]
    pub sort: Option<String>,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub ascending: bool,

    /// Custom benchmark as ID:FIELD=VALUE, e.g. xgs-88:fwThroughput=9500.
    /// Can be specified multiple times
    #[arg(short = 'b', long = "override", value_name = "ID:FIELD=VALUE")]
    pub overrides: Vec<String>,

    /// Expand the notes of this appliance in the table
    #[arg(long, value_name = "ID")]
    pub notes: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write firewall-comparison.csv into this directory
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
