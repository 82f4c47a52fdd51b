//! One newsletter generation against the saved subscription.
//!
//! Gates are checked first, then the quota. The state file is only written
//! when both pass, so a refused run never counts against the quota.

use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use nlg_entitlement::{Gated, can_generate, record_generation};
use nlg_model::{ChartType, ExportFormat, Feature, SubscriptionTier, TemplateId, UserSubscription};

use crate::state::{StateError, load_state, save_state};

/// Items a newsletter asks for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    pub template: Option<TemplateId>,
    pub charts: Vec<ChartType>,
    pub export: Option<ExportFormat>,
}

/// A requested item the current tier does not unlock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refusal {
    pub item: String,
    pub required_tier: SubscriptionTier,
}

impl Refusal {
    fn of<T: Gated + fmt::Display>(item: &T) -> Self {
        Self {
            item: item.to_string(),
            required_tier: item.required_tier(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// At least one requested item is gated above the tier.
    Gated {
        tier: SubscriptionTier,
        refusals: Vec<Refusal>,
    },
    /// Free quota used up.
    QuotaExhausted(UserSubscription),
    /// Generation counted and saved.
    Recorded {
        subscription: UserSubscription,
        watermarked: bool,
    },
}

/// Items of `request` that `tier` does not unlock, in request order.
pub fn refusals(request: &GenerateRequest, tier: SubscriptionTier) -> Vec<Refusal> {
    let templates = request
        .template
        .iter()
        .filter(|template| !template.is_allowed_for(tier))
        .map(Refusal::of);
    let charts = request
        .charts
        .iter()
        .filter(|chart| !chart.is_allowed_for(tier))
        .map(Refusal::of);
    let exports = request
        .export
        .iter()
        .filter(|export| !export.is_allowed_for(tier))
        .map(Refusal::of);
    templates.chain(charts).chain(exports).collect()
}

/// Runs one generation against the state file at `path`.
pub fn generate(path: &Path, request: &GenerateRequest) -> Result<GenerateOutcome, StateError> {
    let mut state = load_state(path)?;
    let subscription = state.subscription;
    let tier = subscription.tier;

    let refusals = refusals(request, tier);
    if !refusals.is_empty() {
        warn!(%tier, refused = refusals.len(), "generation uses items above the current tier");
        return Ok(GenerateOutcome::Gated { tier, refusals });
    }

    if !can_generate(&subscription) {
        warn!(
            used = subscription.generations_used,
            limit = subscription.generations_limit,
            "generation quota used up"
        );
        return Ok(GenerateOutcome::QuotaExhausted(subscription));
    }

    state.subscription = record_generation(subscription);
    save_state(path, &state)?;
    info!(used = state.subscription.generations_used, "recorded generation");
    Ok(GenerateOutcome::Recorded {
        subscription: state.subscription,
        watermarked: !Feature::NoWatermark.is_allowed_for(tier),
    })
}
