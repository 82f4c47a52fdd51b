//! The plan catalog shown on the pricing page.
//!
//! Charts and exports of a plan are read off the gate tables, so a gate
//! change can never leave the catalog out of sync.

use std::fmt;

use serde::Serialize;

use nlg_model::{ChartType, ExportFormat, Feature, SubscriptionTier, TemplateId};

use crate::policy::{Gated, allowed_for};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    Forever,
    Month,
}

impl BillingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::Forever => "forever",
            BillingPeriod::Month => "month",
        }
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    Community,
    Email,
    Priority,
}

impl SupportLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportLevel::Community => "Community",
            SupportLevel::Email => "Email",
            SupportLevel::Priority => "Priority",
        }
    }
}

/// Which customization groups a plan unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Customization {
    pub colors: bool,
    pub fonts: bool,
    pub branding: bool,
    /// Templates beyond the free ones.
    pub templates: bool,
}

impl Customization {
    fn for_tier(tier: SubscriptionTier) -> Self {
        Self {
            colors: Feature::ColorCustomization.is_allowed_for(tier),
            fonts: Feature::CustomFonts.is_allowed_for(tier),
            branding: Feature::CustomBranding.is_allowed_for(tier),
            templates: TemplateId::ALL.iter().any(|template| {
                template.required_tier() != SubscriptionTier::Free && template.is_allowed_for(tier)
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionPlan {
    pub tier: SubscriptionTier,
    pub name: &'static str,
    /// Price per period in US cents.
    pub price_cents: u32,
    pub period: BillingPeriod,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub popular: bool,
    pub support: SupportLevel,
    pub chart_types: Vec<ChartType>,
    pub exports: Vec<ExportFormat>,
    pub customization: Customization,
}

impl SubscriptionPlan {
    /// Price as shown to users, e.g. `$9.99/month` or `$0 forever`.
    pub fn price_label(&self) -> String {
        let dollars = self.price_cents / 100;
        let cents = self.price_cents % 100;
        match self.period {
            BillingPeriod::Forever if self.price_cents == 0 => "$0 forever".to_string(),
            BillingPeriod::Forever => format!("${dollars}.{cents:02} forever"),
            BillingPeriod::Month => format!("${dollars}.{cents:02}/month"),
        }
    }
}

/// Catalog entry for `tier`.
pub fn plan(tier: SubscriptionTier) -> SubscriptionPlan {
    let chart_types = allowed_for(&ChartType::ALL, tier);
    let exports = allowed_for(&ExportFormat::ALL, tier);
    let customization = Customization::for_tier(tier);

    match tier {
        SubscriptionTier::Free => SubscriptionPlan {
            tier,
            name: "Free Starter",
            price_cents: 0,
            period: BillingPeriod::Forever,
            description: "Get started with essential newsletter generation and basic data insights.",
            features: &[
                "3 newsletter generations per month",
                "Basic chart types (Line, Bar)",
                "Standard AI-generated narratives",
                "HTML and PDF export",
                "Community support",
            ],
            limitations: &[
                "Watermarked newsletters",
                "Limited customization",
                "Basic templates only",
            ],
            popular: false,
            support: SupportLevel::Community,
            chart_types,
            exports,
            customization,
        },
        SubscriptionTier::Basic => SubscriptionPlan {
            tier,
            name: "Newsletter Maker",
            price_cents: 999,
            period: BillingPeriod::Month,
            description: "Easy-to-use AI newsletter tool with enhanced chart capabilities and customization.",
            features: &[
                "Unlimited newsletter generations",
                "All Free features +",
                "Gauge and area charts enabled",
                "Basic color customization",
                "No watermarks",
                "Standard templates",
                "Email support",
            ],
            limitations: &[],
            popular: true,
            support: SupportLevel::Email,
            chart_types,
            exports,
            customization,
        },
        SubscriptionTier::Pro => SubscriptionPlan {
            tier,
            name: "Pro Newsletter Maker",
            price_cents: 3999,
            period: BillingPeriod::Month,
            description: "Advanced features including premium charts, full customization, and priority support.",
            features: &[
                "All Newsletter Maker features +",
                "Advanced chart types (Scatter, Pie, Treemap)",
                "Full customization options",
                "Premium templates",
                "Custom branding & logos",
                "Advanced export options",
                "Priority support",
                "API access",
                "Team collaboration",
            ],
            limitations: &[],
            popular: false,
            support: SupportLevel::Priority,
            chart_types,
            exports,
            customization,
        },
    }
}

/// All plans, cheapest first.
pub fn plans() -> Vec<SubscriptionPlan> {
    SubscriptionTier::ALL.into_iter().map(plan).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices() {
        let labels: Vec<String> = plans().iter().map(SubscriptionPlan::price_label).collect();
        assert_eq!(labels, vec!["$0 forever", "$9.99/month", "$39.99/month"]);
    }

    #[test]
    fn catalog_follows_gates() {
        let basic = plan(SubscriptionTier::Basic);
        assert_eq!(
            basic.chart_types,
            vec![ChartType::Line, ChartType::Bar, ChartType::Gauge, ChartType::Area]
        );
        assert!(basic.customization.colors);
        assert!(!basic.customization.branding);
        assert!(basic.customization.templates);
        assert!(basic.popular);

        assert!(!plan(SubscriptionTier::Free).customization.templates);

        let pro = plan(SubscriptionTier::Pro);
        assert!(pro.customization.templates);
        assert!(pro.features.ends_with(&["API access", "Team collaboration"]));
        assert_eq!(pro.exports.len(), ExportFormat::ALL.len());
        assert_eq!(pro.support, SupportLevel::Priority);
    }
}
