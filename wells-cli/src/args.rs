//! Command-line arguments.

use std::path::PathBuf;
use std::time::Duration;

use clap::ArgAction;
use clap::Parser;
use log::LevelFilter;
use wells_lib::DEFAULT_BASE_URL;
use wells_lib::WellsClient;
use wells_lib::api::query::DEFAULT_BATCH_SIZE;
use wells_lib::api::query::DEFAULT_LIMIT;
use wells_lib::api::query::RecordPath;
use wells_lib::model::Format;

/// Status of Wells API client.
///
/// Fetches well counts from data.gov.in, optionally filtered by state,
/// status or offshore/onshore, and prints or saves them as JSON, CSV or XML.
#[derive(Debug, Parser)]
#[command(name = "wells", version)]
pub struct Args {
    /// API key for authentication
    #[arg(long, env = "WELLS_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Resource endpoint
    #[arg(long, env = "WELLS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format: json, csv or xml
    #[arg(long, default_value_t = Format::Json)]
    pub format: Format,

    /// Number of records to skip
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Maximum number of records to return
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Filter by state name (e.g. gujarat, assam, west_bengal)
    #[arg(long)]
    pub state: Option<String>,

    /// Filter by status, evaluated by the API
    #[arg(long)]
    pub status: Option<String>,

    /// Filter for offshore wells
    #[arg(long, conflicts_with = "onshore")]
    pub offshore: bool,

    /// Filter for onshore wells
    #[arg(long)]
    pub onshore: bool,

    /// Get all records, page by page (may take time)
    #[arg(long)]
    pub all: bool,

    /// Records per page with --all
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Where --all finds records in each response: records or result.records
    #[arg(long, default_value_t = RecordPath::Nested)]
    pub record_path: RecordPath,

    /// Print per-state totals from the "Total Flowing Wells" row
    #[arg(long)]
    pub totals: bool,

    /// Save output to file instead of printing it
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// No logging at all
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Which retrieval the flags ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    State(String),
    Status(String),
    Offshore(bool),
    All,
    Totals,
    Page,
}

impl Args {
    /// Resolves the selection flags; the first one set wins, in the order
    /// state, status, offshore, onshore, all, totals.
    pub fn selection(&self) -> Selection {
        if let Some(state) = &self.state {
            Selection::State(state.clone())
        } else if let Some(status) = &self.status {
            Selection::Status(status.clone())
        } else if self.offshore {
            Selection::Offshore(true)
        } else if self.onshore {
            Selection::Offshore(false)
        } else if self.all {
            Selection::All
        } else if self.totals {
            Selection::Totals
        } else {
            Selection::Page
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn client(&self) -> Result<WellsClient, wells_lib::error::Error> {
        WellsClient::builder()
            .api_key(self.api_key.clone())
            .url(self.base_url.clone())
            .timeout(Duration::from_secs(self.timeout))
            .paged_record_path(self.record_path)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Args {
        let mut argv = vec!["wells", "--api-key", "k"];
        argv.extend_from_slice(args);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);

        assert_eq!(args.format, Format::Json);
        assert_eq!(args.limit, DEFAULT_LIMIT);
        assert_eq!(args.record_path, RecordPath::Nested);
        assert_eq!(args.selection(), Selection::Page);
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_selection_precedence() {
        let args = parse(&["--state", "gujarat", "--status", "Active", "--all"]);
        assert_eq!(args.selection(), Selection::State("gujarat".into()));

        let args = parse(&["--status", "Active", "--offshore"]);
        assert_eq!(args.selection(), Selection::Status("Active".into()));

        let args = parse(&["--onshore", "--all"]);
        assert_eq!(args.selection(), Selection::Offshore(false));

        let args = parse(&["--all", "--totals"]);
        assert_eq!(args.selection(), Selection::All);
    }

    #[test]
    fn test_format_and_record_path() {
        let args = parse(&["--format", "CSV", "--record-path", "records"]);
        assert_eq!(args.format, Format::Csv);
        assert_eq!(args.record_path, RecordPath::TopLevel);

        let argv = ["wells", "--api-key", "k", "--format", "yaml"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_offshore_conflicts_with_onshore() {
        let argv = ["wells", "--api-key", "k", "--offshore", "--onshore"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&["-vv"]).log_level(), LevelFilter::Debug);
        assert_eq!(parse(&["--quiet"]).log_level(), LevelFilter::Off);
    }
}
