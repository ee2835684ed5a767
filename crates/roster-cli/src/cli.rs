//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use roster_model::{GenderFilter, ModelError, PageSize, SortDirection, SortKey, SortSpec};
use roster_output::ExportFormat;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Browse, filter, edit, and export a list of users",
    long_about = "Browse, filter, edit, and export a list of users.\n\n\
                  The list is loaded once from a CSV source and kept in a local\n\
                  data directory; later runs work on the saved copy."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include names, emails, and IP addresses in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved user list.
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the user list from its CSV source if nothing is saved yet.
    Load(LoadArgs),

    /// Show one page of users.
    List(ViewArgs),

    /// Add a user.
    Add(RecordArgs),

    /// Change fields of an existing user.
    Update(UpdateArgs),

    /// Delete one user.
    Delete {
        /// Id of the user to delete.
        id: String,
    },

    /// Delete several users at once.
    DeleteMany(DeleteManyArgs),

    /// Write all users to a dated CSV or JSON file.
    Export(ExportArgs),

    /// Show totals and the gender breakdown.
    Stats,

    /// Show or set the number of rows per page.
    PageSize {
        /// New page size: 10, 20, 50, or 100.
        #[arg(value_parser = parse_page_size)]
        size: Option<PageSize>,
    },
}

#[derive(Args)]
pub struct LoadArgs {
    /// CSV location: a file path or an http(s) URL (default: from settings).
    #[arg(long = "source", value_name = "LOCATION")]
    pub source: Option<String>,
}

/// Search, filter, sort, and page selection shared by `list` and
/// `delete-many --visible`.
#[derive(Args)]
pub struct ViewArgs {
    /// Case-insensitive text matched against name, email, and gender.
    #[arg(long = "search", short = 's')]
    pub search: Option<String>,

    /// Exact gender to keep, or "all".
    #[arg(long = "gender", short = 'g')]
    pub gender: Option<String>,

    /// Column to sort by.
    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortKeyArg>,

    /// Sort descending.
    #[arg(long = "desc", requires = "sort")]
    pub desc: bool,

    /// 1-based page number.
    #[arg(long = "page", short = 'p', default_value_t = 1)]
    pub page: usize,
}

impl ViewArgs {
    pub fn gender_filter(&self) -> GenderFilter {
        self.gender
            .as_deref()
            .map_or(GenderFilter::All, GenderFilter::parse)
    }

    pub fn sort_spec(&self) -> SortSpec {
        let direction = if self.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortSpec {
            key: self.sort.map(SortKey::from),
            direction,
        }
    }
}

#[derive(Args)]
pub struct RecordArgs {
    #[arg(long = "first-name")]
    pub first_name: String,

    #[arg(long = "last-name")]
    pub last_name: String,

    #[arg(long = "email")]
    pub email: String,

    /// Male, Female, Non-binary, or any other value.
    #[arg(long = "gender")]
    pub gender: String,

    /// IPv4 or IPv6 address.
    #[arg(long = "ip")]
    pub ip_address: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Id of the user to change.
    pub id: String,

    #[arg(long = "first-name")]
    pub first_name: Option<String>,

    #[arg(long = "last-name")]
    pub last_name: Option<String>,

    #[arg(long = "email")]
    pub email: Option<String>,

    #[arg(long = "gender")]
    pub gender: Option<String>,

    #[arg(long = "ip")]
    pub ip_address: Option<String>,
}

#[derive(Args)]
pub struct DeleteManyArgs {
    /// Ids to delete.
    #[arg(required_unless_present = "visible")]
    pub ids: Vec<String>,

    /// Delete every user on the page selected by the view flags.
    #[arg(long = "visible", conflicts_with = "ids")]
    pub visible: bool,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Args)]
pub struct ExportArgs {
    #[arg(long = "format", short = 'f', value_enum, default_value = "csv")]
    pub format: ExportFormatArg,

    /// Output directory (default: from settings, else the working directory).
    #[arg(long = "output-dir", short = 'o', value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

fn parse_page_size(value: &str) -> Result<PageSize, ModelError> {
    value.parse()
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortKeyArg {
    Id,
    FirstName,
    LastName,
    Email,
    Gender,
    IpAddress,
}

impl From<SortKeyArg> for SortKey {
    fn from(arg: SortKeyArg) -> Self {
        match arg {
            SortKeyArg::Id => Self::Id,
            SortKeyArg::FirstName => Self::FirstName,
            SortKeyArg::LastName => Self::LastName,
            SortKeyArg::Email => Self::Email,
            SortKeyArg::Gender => Self::Gender,
            SortKeyArg::IpAddress => Self::IpAddress,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Csv => Self::Csv,
            ExportFormatArg::Json => Self::Json,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
