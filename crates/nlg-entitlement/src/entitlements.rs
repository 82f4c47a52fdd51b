use serde::Serialize;

use nlg_model::{ChartType, ExportFormat, Feature, SubscriptionTier, TemplateId};

use crate::policy::{Gated, allowed_for};

/// Everything a tier may use, for rendering pickers and upgrade prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entitlements {
    pub tier: SubscriptionTier,
    pub charts: Vec<ChartType>,
    pub exports: Vec<ExportFormat>,
    pub templates: Vec<TemplateId>,
    pub features: Vec<Feature>,
}

impl Entitlements {
    pub fn for_tier(tier: SubscriptionTier) -> Self {
        Self {
            tier,
            charts: allowed_for(&ChartType::ALL, tier),
            exports: allowed_for(&ExportFormat::ALL, tier),
            templates: allowed_for(&TemplateId::ALL, tier),
            features: allowed_for(&Feature::ALL, tier),
        }
    }
}

/// Kind of gated item, used to group the gate listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    Chart,
    Export,
    Template,
    Feature,
}

impl GateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateKind::Chart => "chart",
            GateKind::Export => "export",
            GateKind::Template => "template",
            GateKind::Feature => "feature",
        }
    }
}

/// One row of the flattened gate tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateEntry {
    pub kind: GateKind,
    pub id: &'static str,
    pub name: &'static str,
    /// Chart category or export file extension.
    pub detail: Option<&'static str>,
    pub required_tier: SubscriptionTier,
}

/// Every gated item with its required tier.
pub fn gate_table() -> Vec<GateEntry> {
    let charts = ChartType::ALL.iter().map(|item| GateEntry {
        kind: GateKind::Chart,
        id: item.as_str(),
        name: item.name(),
        detail: Some(item.category().as_str()),
        required_tier: item.required_tier(),
    });
    let exports = ExportFormat::ALL.iter().map(|item| GateEntry {
        kind: GateKind::Export,
        id: item.as_str(),
        name: item.name(),
        detail: Some(item.file_extension()),
        required_tier: item.required_tier(),
    });
    let templates = TemplateId::ALL.iter().map(|item| GateEntry {
        kind: GateKind::Template,
        id: item.as_str(),
        name: item.name(),
        detail: None,
        required_tier: item.required_tier(),
    });
    let features = Feature::ALL.iter().map(|item| GateEntry {
        kind: GateKind::Feature,
        id: item.as_str(),
        name: item.name(),
        detail: None,
        required_tier: item.required_tier(),
    });
    charts.chain(exports).chain(templates).chain(features).collect()
}
