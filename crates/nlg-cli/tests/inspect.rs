//! Integration tests for the inspect workflow and the state file.

use std::fs;
use std::path::Path;

use nlg_cli::inspect::{TypeOverride, inspect_file, inspect_table};
use nlg_cli::logging::{LogConfig, LogFormat, default_directives};
use nlg_cli::state::{StudioState, load_state, save_state};
use nlg_entitlement::{apply_upgrade, can_generate, record_generation};
use nlg_ingest::IngestOptions;
use nlg_model::{RawTable, SemanticType, SubscriptionTier};
use tracing::level_filters::LevelFilter;

fn revenue_table() -> RawTable {
    RawTable::from_rows(
        ["Revenue", "Date"],
        [["$1,000", "2024-01-01"], ["oops", "2024-02-01"]],
    )
}

#[test]
fn inspect_reads_and_validates_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sales.csv");
    fs::write(
        &path,
        "Company,Revenue,Growth\nAcme,\"$1,000\",12%\nGlobex,\"$2,000\",\nAcme,\"$1,000\",12%\n",
    )
    .expect("write csv");

    let inspection =
        inspect_file(&path, &IngestOptions::default(), &[]).expect("inspect succeeds");
    assert_eq!(inspection.rows, 3);
    assert_eq!(inspection.columns, 3);
    assert_eq!(inspection.mapping.matched_count(), 3);
    assert_eq!(inspection.report.metrics.duplicates, 1);
    assert_eq!(inspection.report.metrics.missing_values, 1);
    assert_eq!(
        inspection.report.warnings,
        vec!["Row 3: Duplicate row detected".to_string()]
    );
}

#[test]
fn empty_field_line_is_reported_as_mostly_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("gaps.csv");
    fs::write(&path, "A,B,C\n1,2,3\n,,\n").expect("write csv");

    let inspection =
        inspect_file(&path, &IngestOptions::default(), &[]).expect("inspect succeeds");
    assert_eq!(inspection.rows, 2);
    assert_eq!(inspection.report.metrics.total_rows, 2);
    assert_eq!(inspection.report.metrics.valid_rows, 1);
    assert_eq!(inspection.report.metrics.missing_values, 3);
    assert_eq!(
        inspection.report.warnings,
        vec!["Row 2: More than 50% of values are missing".to_string()]
    );
}

#[test]
fn override_by_header_changes_report() {
    let overrides = vec![TypeOverride {
        header: "Revenue".to_string(),
        semantic_type: SemanticType::Currency,
    }];
    let inspection = inspect_table(Path::new("upload.csv"), revenue_table(), &overrides)
        .expect("inspect succeeds");
    insta::assert_json_snapshot!(inspection, @r#"
    {
      "file": "upload.csv",
      "columns": 2,
      "rows": 2,
      "mapping": {
        "columns": [
          {
            "header": "Revenue",
            "index": 0,
            "descriptor": {
              "key": "revenue",
              "label": "Revenue",
              "semantic_type": "currency",
              "format": "USD"
            },
            "origin": "user_override"
          },
          {
            "header": "Date",
            "index": 1,
            "descriptor": {
              "key": "date",
              "label": "Date",
              "semantic_type": "date",
              "format": "YYYY-MM-DD"
            },
            "origin": "canonical"
          }
        ]
      },
      "report": {
        "is_valid": false,
        "warnings": [
          "Row 2, Revenue: \"oops\" is not a valid currency"
        ],
        "omitted_warnings": 0,
        "suggestions": [
          "Consider reviewing data quality - less than 80% of rows are valid"
        ],
        "metrics": {
          "total_rows": 2,
          "valid_rows": 1,
          "missing_values": 0,
          "duplicates": 0
        }
      }
    }
    "#);
}

#[test]
fn unknown_override_header_fails() {
    let overrides = vec!["Profit=number".parse::<TypeOverride>().expect("parse")];
    let err = inspect_table(Path::new("upload.csv"), revenue_table(), &overrides).unwrap_err();
    assert!(err.to_string().contains("no column named 'Profit'"));
}

#[test]
fn rejected_upload_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sales.xlsx");
    fs::write(&path, "not really a workbook").expect("write file");
    let err = inspect_file(&path, &IngestOptions::default(), &[]).unwrap_err();
    assert!(format!("{err:#}").contains("unsupported file format"));
}

#[test]
fn state_file_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("state.toml");

    let mut state = load_state(&path).expect("fresh state");
    for _ in 0..3 {
        assert!(can_generate(&state.subscription));
        state.subscription = record_generation(state.subscription);
    }
    save_state(&path, &state).expect("save state");

    let reloaded = load_state(&path).expect("reload");
    assert_eq!(reloaded, state);
    assert!(!can_generate(&reloaded.subscription));

    let upgraded = StudioState {
        subscription: apply_upgrade(reloaded.subscription, SubscriptionTier::Basic),
    };
    save_state(&path, &upgraded).expect("save upgrade");
    let reloaded = load_state(&path).expect("reload upgrade");
    assert_eq!(reloaded.subscription.tier, SubscriptionTier::Basic);
    assert_eq!(reloaded.subscription.generations_used, 3);
    assert_eq!(reloaded.subscription.generations_limit, None);
}

#[test]
fn log_config_builders() {
    let config = LogConfig::default()
        .with_level(LevelFilter::TRACE)
        .with_format(LogFormat::Json)
        .with_log_data(true);
    assert_eq!(config.level_filter, LevelFilter::TRACE);
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.log_data);
    assert!(default_directives(LevelFilter::INFO).contains("nlg_map=info"));
}
