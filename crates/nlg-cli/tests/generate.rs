//! Generation against a state file on disk.

use std::fs;
use std::path::Path;

use nlg_cli::generate::{GenerateOutcome, GenerateRequest, Refusal, generate};
use nlg_cli::state::{StudioState, load_state, save_state};
use nlg_model::{ChartType, ExportFormat, SubscriptionTier, UserSubscription};

fn write_state(path: &Path, subscription: UserSubscription) -> Vec<u8> {
    save_state(path, &StudioState { subscription }).expect("save state");
    fs::read(path).expect("read state")
}

fn free(used: u32) -> UserSubscription {
    UserSubscription {
        generations_used: used,
        ..UserSubscription::default()
    }
}

#[test]
fn gated_chart_leaves_state_untouched() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("state.toml");
    let before = write_state(&path, free(1));

    let request = GenerateRequest {
        charts: vec![ChartType::Line, ChartType::Scatter],
        ..GenerateRequest::default()
    };
    let outcome = generate(&path, &request).expect("generate");
    assert_eq!(
        outcome,
        GenerateOutcome::Gated {
            tier: SubscriptionTier::Free,
            refusals: vec![Refusal {
                item: "scatter".to_string(),
                required_tier: SubscriptionTier::Pro,
            }],
        }
    );
    assert_eq!(fs::read(&path).expect("read state"), before);
}

#[test]
fn exhausted_quota_leaves_state_untouched() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("state.toml");
    let before = write_state(&path, free(3));

    let outcome = generate(&path, &GenerateRequest::default()).expect("generate");
    assert_eq!(outcome, GenerateOutcome::QuotaExhausted(free(3)));
    assert_eq!(fs::read(&path).expect("read state"), before);
}

#[test]
fn gate_is_checked_before_quota() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("state.toml");
    let before = write_state(&path, free(3));

    let request = GenerateRequest {
        export: Some(ExportFormat::Print),
        ..GenerateRequest::default()
    };
    let outcome = generate(&path, &request).expect("generate");
    assert!(matches!(outcome, GenerateOutcome::Gated { .. }));
    assert_eq!(fs::read(&path).expect("read state"), before);
}

#[test]
fn successful_generation_counts_once() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("state.toml");
    write_state(&path, free(2));

    let request = GenerateRequest {
        charts: vec![ChartType::Bar],
        export: Some(ExportFormat::Html),
        ..GenerateRequest::default()
    };
    let outcome = generate(&path, &request).expect("generate");
    assert_eq!(
        outcome,
        GenerateOutcome::Recorded {
            subscription: free(3),
            watermarked: true,
        }
    );
    assert_eq!(load_state(&path).expect("reload").subscription, free(3));
}

#[test]
fn missing_state_file_is_a_new_free_user() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("fresh.toml");

    let outcome = generate(&path, &GenerateRequest::default()).expect("generate");
    assert!(matches!(
        outcome,
        GenerateOutcome::Recorded { watermarked: true, .. }
    ));
    assert_eq!(
        load_state(&path).expect("reload").subscription.generations_used,
        1
    );
}

#[test]
fn paid_tier_output_has_no_watermark() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("state.toml");
    let basic = UserSubscription {
        tier: SubscriptionTier::Basic,
        generations_used: 40,
        generations_limit: None,
    };
    write_state(&path, basic);

    let outcome = generate(&path, &GenerateRequest::default()).expect("generate");
    let GenerateOutcome::Recorded {
        subscription,
        watermarked,
    } = outcome
    else {
        panic!("expected a recorded generation");
    };
    assert!(!watermarked);
    assert_eq!(subscription.generations_used, 41);
}
