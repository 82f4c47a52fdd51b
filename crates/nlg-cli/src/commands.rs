use anyhow::{Context, Result};
use tracing::info;

use nlg_cli::generate::{GenerateOutcome, GenerateRequest, generate};
use nlg_cli::inspect::inspect_file;
use nlg_cli::state::{load_state, save_state};
use nlg_entitlement::{apply_upgrade, gate_table, plans};
use nlg_ingest::{IngestOptions, write_csv_table};
use nlg_validate::clean_table;

use crate::cli::{EntitlementsArgs, GenerateArgs, InspectArgs, StateArgs, UpgradeArgs};
use crate::summary::{print_gates, print_inspection, print_plans, print_refusals, print_status};

/// Exit status of a command that ran to completion.
pub enum Outcome {
    Success,
    /// The command ran but the answer was "no" (invalid data, quota, gate).
    Refused,
}

pub fn run_inspect(args: &InspectArgs) -> Result<Outcome> {
    let mut options = IngestOptions::default();
    if let Some(delimiter) = args.delimiter {
        let byte = u8::try_from(delimiter)
            .ok()
            .filter(u8::is_ascii)
            .with_context(|| format!("delimiter '{delimiter}' is not a single ASCII character"))?;
        options = options.with_delimiter(byte);
    }

    let inspection = inspect_file(&args.file, &options, &args.overrides)?;
    if args.json {
        let json = serde_json::to_string_pretty(&inspection).context("encode inspection")?;
        println!("{json}");
    } else {
        print_inspection(&inspection);
    }

    if let Some(path) = &args.cleaned_out {
        let cleaned = clean_table(&inspection.table);
        write_csv_table(path, &cleaned)
            .with_context(|| format!("write cleaned data to {}", path.display()))?;
        info!(
            path = %path.display(),
            kept = cleaned.row_count(),
            dropped = inspection.rows - cleaned.row_count(),
            "wrote cleaned data"
        );
    }

    Ok(if inspection.report.is_valid {
        Outcome::Success
    } else {
        Outcome::Refused
    })
}

pub fn run_plans() -> Outcome {
    print_plans(&plans());
    Outcome::Success
}

pub fn run_entitlements(args: &EntitlementsArgs) -> Result<Outcome> {
    let tier = match args.tier {
        Some(tier) => tier,
        None => load_state(&args.state.state)?.subscription.tier,
    };
    print_gates(tier, &gate_table());
    Ok(Outcome::Success)
}

pub fn run_generate(args: &GenerateArgs) -> Result<Outcome> {
    let request = GenerateRequest {
        template: args.template,
        charts: args.charts.clone(),
        export: args.export,
    };
    match generate(&args.state.state, &request)? {
        GenerateOutcome::Gated { tier, refusals } => {
            print_refusals(&refusals, tier);
            Ok(Outcome::Refused)
        }
        GenerateOutcome::QuotaExhausted(subscription) => {
            eprintln!(
                "Generation limit reached. Upgrade to a paid plan for unlimited generations."
            );
            print_status(&subscription);
            Ok(Outcome::Refused)
        }
        GenerateOutcome::Recorded {
            subscription,
            watermarked,
        } => {
            if watermarked {
                println!("Output is watermarked on the {} tier.", subscription.tier);
            }
            print_status(&subscription);
            Ok(Outcome::Success)
        }
    }
}

pub fn run_upgrade(args: &UpgradeArgs) -> Result<Outcome> {
    let mut state = load_state(&args.state.state)?;
    let from = state.subscription.tier;
    state.subscription = apply_upgrade(state.subscription, args.tier);
    save_state(&args.state.state, &state)?;
    info!(%from, to = %args.tier, "changed tier");
    print_status(&state.subscription);
    Ok(Outcome::Success)
}

pub fn run_status(args: &StateArgs) -> Result<Outcome> {
    let state = load_state(&args.state)?;
    print_status(&state.subscription);
    Ok(Outcome::Success)
}
