//! CLI argument definitions for `newsletter-studio`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use nlg_cli::inspect::TypeOverride;
use nlg_cli::state::{DEFAULT_STATE_FILE, STATE_ENV_VAR};
use nlg_model::{ChartType, ExportFormat, SubscriptionTier, TemplateId};

#[derive(Parser)]
#[command(
    name = "newsletter-studio",
    version,
    about = "Newsletter Studio - check business data and subscription entitlements",
    long_about = "Inspect uploaded business data before it goes into a newsletter.\n\n\
                  Infers a type for every column, maps headers onto the known business\n\
                  fields and reports data quality problems. Also tracks the local\n\
                  subscription tier and its generation quota."
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

    /// Allow cell contents from uploaded files in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map and validate a data file.
    Inspect(InspectArgs),

    /// List the subscription plans.
    Plans,

    /// Show every gated chart, export, template and feature for a tier.
    Entitlements(EntitlementsArgs),

    /// Record one newsletter generation against the quota.
    Generate(GenerateArgs),

    /// Change the subscription tier.
    Upgrade(UpgradeArgs),

    /// Show the current tier and usage.
    Status(StateArgs),
}

#[derive(Args)]
pub struct StateArgs {
    /// Subscription state file.
    #[arg(
        long = "state",
        value_name = "PATH",
        env = STATE_ENV_VAR,
        default_value = DEFAULT_STATE_FILE
    )]
    pub state: PathBuf,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Data file to inspect (.csv, .tsv or .txt).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print mapping and report as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Force the type of a column, e.g. `--type Revenue=currency`.
    #[arg(long = "type", value_name = "HEADER=TYPE")]
    pub overrides: Vec<TypeOverride>,

    /// Field delimiter, overriding the one implied by the file extension.
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Write the rows that are mostly populated to this CSV file.
    #[arg(long = "cleaned-out", value_name = "PATH")]
    pub cleaned_out: Option<PathBuf>,
}

#[derive(Args)]
pub struct EntitlementsArgs {
    /// Tier to show; defaults to the tier in the state file.
    #[arg(long = "tier", value_name = "TIER")]
    pub tier: Option<SubscriptionTier>,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Template the newsletter uses.
    #[arg(long = "template", value_name = "TEMPLATE")]
    pub template: Option<TemplateId>,

    /// Chart types the newsletter contains.
    #[arg(long = "chart", value_name = "CHART")]
    pub charts: Vec<ChartType>,

    /// Export format requested.
    #[arg(long = "export", value_name = "FORMAT")]
    pub export: Option<ExportFormat>,

    #[command(flatten)]
    pub state: StateArgs,
}

#[derive(Args)]
pub struct UpgradeArgs {
    /// Target tier (free, basic or pro).
    #[arg(value_name = "TIER")]
    pub tier: SubscriptionTier,

    #[command(flatten)]
    pub state: StateArgs,
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
