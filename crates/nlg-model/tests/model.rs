//! Tests for nlg-model types.

use nlg_model::{
    ColumnDescriptor, ColumnMapping, MappedColumn, MappingOrigin, SemanticType, SubscriptionTier,
    UserSubscription, ValidationMetrics, ValidationReport,
};

#[test]
fn subscription_serializes_without_limit_when_unlimited() {
    let sub = UserSubscription {
        tier: SubscriptionTier::Pro,
        generations_used: 12,
        generations_limit: None,
    };
    let json = serde_json::to_value(sub).expect("serialize subscription");
    assert_eq!(
        json,
        serde_json::json!({"tier": "pro", "generations_used": 12})
    );
    let round: UserSubscription = serde_json::from_value(json).expect("deserialize subscription");
    assert_eq!(round, sub);
}

#[test]
fn subscription_rejects_unknown_tier() {
    let result: Result<UserSubscription, _> = serde_json::from_value(serde_json::json!({
        "tier": "enterprise",
        "generations_used": 0
    }));
    assert!(result.is_err());
}

#[test]
fn initial_subscription_is_free_with_quota() {
    let sub = UserSubscription::default();
    assert_eq!(sub.tier, SubscriptionTier::Free);
    assert_eq!(sub.generations_used, 0);
    assert_eq!(sub.generations_limit, Some(nlg_model::FREE_GENERATION_LIMIT));
    assert_eq!(sub.remaining(), Some(3));
}

#[test]
fn report_serializes() {
    let report = ValidationReport {
        is_valid: false,
        warnings: vec!["Row 2: Duplicate row detected".to_string()],
        omitted_warnings: 0,
        suggestions: vec![],
        metrics: ValidationMetrics {
            total_rows: 2,
            valid_rows: 1,
            missing_values: 0,
            duplicates: 1,
        },
    };
    let json = serde_json::to_string(&report).expect("serialize report");
    let round: ValidationReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(round, report);
    assert_eq!(round.warning_total(), 1);
}

#[test]
fn empty_mapping_differs_from_unmatched_mapping() {
    let empty = ColumnMapping::default();
    let unmatched = ColumnMapping::new(vec![MappedColumn {
        header: "Notes".to_string(),
        index: 0,
        descriptor: ColumnDescriptor::new("notes", "Notes", SemanticType::Text),
        origin: MappingOrigin::Derived,
    }]);
    assert!(empty.is_empty());
    assert!(!unmatched.is_empty());
    assert_eq!(unmatched.matched_count(), 0);
}
