//! Tier ordering and the static gate tables.
//!
//! Every gated item resolves to a minimum tier and is decided by the one
//! comparison in [`is_feature_allowed`].

use nlg_model::{ChartType, ExportFormat, Feature, SubscriptionTier, TemplateId};

/// Position of a tier in `free < basic < pro`.
pub fn tier_rank(tier: SubscriptionTier) -> u8 {
    match tier {
        SubscriptionTier::Free => 0,
        SubscriptionTier::Basic => 1,
        SubscriptionTier::Pro => 2,
    }
}

/// True if `user_tier` is at least `required_tier`.
pub fn is_feature_allowed(user_tier: SubscriptionTier, required_tier: SubscriptionTier) -> bool {
    tier_rank(user_tier) >= tier_rank(required_tier)
}

/// Something only available from a minimum tier upward.
pub trait Gated {
    fn required_tier(&self) -> SubscriptionTier;

    fn is_allowed_for(&self, tier: SubscriptionTier) -> bool {
        is_feature_allowed(tier, self.required_tier())
    }
}

impl Gated for ChartType {
    fn required_tier(&self) -> SubscriptionTier {
        match self {
            ChartType::Line | ChartType::Bar => SubscriptionTier::Free,
            ChartType::Gauge | ChartType::Area => SubscriptionTier::Basic,
            ChartType::Pie
            | ChartType::Donut
            | ChartType::Scatter
            | ChartType::Bubble
            | ChartType::Radar
            | ChartType::Heatmap
            | ChartType::Funnel
            | ChartType::Treemap => SubscriptionTier::Pro,
        }
    }
}

impl Gated for ExportFormat {
    fn required_tier(&self) -> SubscriptionTier {
        match self {
            ExportFormat::Html | ExportFormat::Pdf => SubscriptionTier::Free,
            ExportFormat::Image | ExportFormat::Email | ExportFormat::Print => {
                SubscriptionTier::Pro
            }
        }
    }
}

impl Gated for TemplateId {
    fn required_tier(&self) -> SubscriptionTier {
        match self {
            TemplateId::ExecutiveSummary | TemplateId::TeamUpdate => SubscriptionTier::Free,
            TemplateId::FinancialReport | TemplateId::MarketingPerformance => {
                SubscriptionTier::Basic
            }
            TemplateId::BusinessIntelligence | TemplateId::TechnicalReport => {
                SubscriptionTier::Pro
            }
        }
    }
}

impl Gated for Feature {
    fn required_tier(&self) -> SubscriptionTier {
        match self {
            Feature::ColorCustomization | Feature::AdvancedEditing | Feature::NoWatermark => {
                SubscriptionTier::Basic
            }
            Feature::CustomFonts
            | Feature::AdvancedLayout
            | Feature::LogoPositioning
            | Feature::CustomBranding
            | Feature::AdvancedCharts
            | Feature::PublicSharing
            | Feature::PasswordProtection => SubscriptionTier::Pro,
        }
    }
}

/// Items of `all` usable on `tier`, in their declaration order.
pub fn allowed_for<T: Gated + Copy>(all: &[T], tier: SubscriptionTier) -> Vec<T> {
    all.iter()
        .copied()
        .filter(|item| item.is_allowed_for(tier))
        .collect()
}

/// The lowest tier that unlocks a gated item, i.e. the upgrade to offer.
pub fn upgrade_target<T: Gated>(item: &T, current: SubscriptionTier) -> Option<SubscriptionTier> {
    let required = item.required_tier();
    (!is_feature_allowed(current, required)).then_some(required)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_gates() {
        assert_eq!(
            allowed_for(&ChartType::ALL, SubscriptionTier::Free),
            vec![ChartType::Line, ChartType::Bar]
        );
        assert_eq!(
            allowed_for(&ChartType::ALL, SubscriptionTier::Basic),
            vec![ChartType::Line, ChartType::Bar, ChartType::Gauge, ChartType::Area]
        );
        assert_eq!(allowed_for(&ChartType::ALL, SubscriptionTier::Pro).len(), 12);
    }

    #[test]
    fn export_gates() {
        assert_eq!(
            allowed_for(&ExportFormat::ALL, SubscriptionTier::Basic),
            vec![ExportFormat::Html, ExportFormat::Pdf]
        );
        assert!(ExportFormat::Email.is_allowed_for(SubscriptionTier::Pro));
    }

    #[test]
    fn template_and_feature_gates() {
        assert!(TemplateId::TeamUpdate.is_allowed_for(SubscriptionTier::Free));
        assert!(!TemplateId::FinancialReport.is_allowed_for(SubscriptionTier::Free));
        assert!(TemplateId::FinancialReport.is_allowed_for(SubscriptionTier::Basic));
        assert!(!TemplateId::TechnicalReport.is_allowed_for(SubscriptionTier::Basic));

        assert!(Feature::ColorCustomization.is_allowed_for(SubscriptionTier::Basic));
        assert!(!Feature::CustomBranding.is_allowed_for(SubscriptionTier::Basic));
        assert!(allowed_for(&Feature::ALL, SubscriptionTier::Free).is_empty());

        assert!(!Feature::NoWatermark.is_allowed_for(SubscriptionTier::Free));
        assert!(Feature::NoWatermark.is_allowed_for(SubscriptionTier::Basic));
        assert!(Feature::NoWatermark.is_allowed_for(SubscriptionTier::Pro));
    }

    #[test]
    fn upgrade_target_is_the_gate_tier() {
        assert_eq!(
            upgrade_target(&ChartType::Gauge, SubscriptionTier::Free),
            Some(SubscriptionTier::Basic)
        );
        assert_eq!(upgrade_target(&ChartType::Gauge, SubscriptionTier::Pro), None);
    }
}
