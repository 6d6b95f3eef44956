//! CLI argument definitions for app-profiles.

use std::path::PathBuf;

use apps_model::Marketplace;
use apps_transform::CleaningStage;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "app-profiles",
    version,
    about = "Find app categories that attract users on Google Play and the App Store",
    long_about = "Clean the Google Play and App Store catalog exports down to free,\n\
                  English-language apps, then report category shares, average\n\
                  popularity per category and per-market category profiles."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Google Play export (13 columns).
    #[arg(
        long = "google-play",
        value_name = "PATH",
        default_value = "googleplaystore.csv",
        global = true
    )]
    pub google_play: PathBuf,

    /// App Store export (16 columns).
    #[arg(
        long = "app-store",
        value_name = "PATH",
        default_value = "AppleStore.csv",
        global = true
    )]
    pub app_store: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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
}

impl Cli {
    pub fn path_for(&self, marketplace: Marketplace) -> &PathBuf {
        match marketplace {
            Marketplace::GooglePlay => &self.google_play,
            Marketplace::AppStore => &self.app_store,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a window of raw rows, header included, plus the column names.
    Explore(ExploreArgs),

    /// Clean both exports and report what each stage removed.
    Clean,

    /// Clean both exports and print frequency tables, averages and profiles.
    Analyze(AnalyzeArgs),

    /// List the cleaned apps of one category with their popularity.
    List(ListArgs),

    /// Print every raw row carrying one app name, e.g. its duplicates.
    Rows(RowsArgs),
}

#[derive(Args)]
pub struct ExploreArgs {
    /// Only explore one marketplace (default: both).
    #[arg(long = "market", value_enum)]
    pub market: Option<MarketArg>,

    /// First row of the window (the header is row 0).
    #[arg(long = "start", default_value_t = 0)]
    pub start: usize,

    /// End of the window, exclusive.
    #[arg(long = "end", default_value_t = 5)]
    pub end: usize,

    /// Also print the number of rows and columns.
    #[arg(long = "counts")]
    pub counts: bool,

    /// Explore the table as it stands after this cleaning stage.
    #[arg(long = "stage", value_enum)]
    pub stage: Option<StageArg>,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Number of categories shown in each market profile.
    #[arg(long = "top", default_value_t = 10)]
    pub top: usize,
}

#[derive(Args)]
pub struct ListArgs {
    /// Marketplace to list from.
    #[arg(long = "market", value_enum)]
    pub market: MarketArg,

    /// Category (Google Play) or prime genre (App Store) to list.
    #[arg(long = "group", value_name = "NAME")]
    pub group: String,

    /// Only list apps whose popularity field is exactly this value (repeatable).
    ///
    /// Useful for install brackets such as `1,000,000,000+`.
    #[arg(long = "only", value_name = "VALUE")]
    pub only: Vec<String>,

    /// Also print the average popularity of apps strictly below this value.
    #[arg(long = "below", value_name = "NUMBER")]
    pub below: Option<f64>,
}

#[derive(Args)]
pub struct RowsArgs {
    /// Marketplace to search.
    #[arg(long = "market", value_enum)]
    pub market: MarketArg,

    /// Exact app name.
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StageArg {
    Loaded,
    Validated,
    Deduplicated,
    English,
    Free,
}

impl From<StageArg> for CleaningStage {
    fn from(value: StageArg) -> Self {
        match value {
            StageArg::Loaded => CleaningStage::Loaded,
            StageArg::Validated => CleaningStage::Validated,
            StageArg::Deduplicated => CleaningStage::Deduplicated,
            StageArg::English => CleaningStage::English,
            StageArg::Free => CleaningStage::Free,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MarketArg {
    GooglePlay,
    AppStore,
}

impl From<MarketArg> for Marketplace {
    fn from(value: MarketArg) -> Self {
        match value {
            MarketArg::GooglePlay => Marketplace::GooglePlay,
            MarketArg::AppStore => Marketplace::AppStore,
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
