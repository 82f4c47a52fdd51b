//! Identifiers for everything a subscription tier can unlock.
//!
//! Only the vocabulary lives here. Which tier each item needs is policy and
//! is kept in the entitlement crate's gate tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Chart picker grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartCategory {
    Trends,
    Comparisons,
    Composition,
    Distribution,
}

impl ChartCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartCategory::Trends => "trends",
            ChartCategory::Comparisons => "comparisons",
            ChartCategory::Composition => "composition",
            ChartCategory::Distribution => "distribution",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Gauge,
    Area,
    Pie,
    Donut,
    Scatter,
    Bubble,
    Radar,
    Heatmap,
    Funnel,
    Treemap,
}

impl ChartType {
    pub const ALL: [ChartType; 12] = [
        ChartType::Line,
        ChartType::Bar,
        ChartType::Gauge,
        ChartType::Area,
        ChartType::Pie,
        ChartType::Donut,
        ChartType::Scatter,
        ChartType::Bubble,
        ChartType::Radar,
        ChartType::Heatmap,
        ChartType::Funnel,
        ChartType::Treemap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
            ChartType::Gauge => "gauge",
            ChartType::Area => "area",
            ChartType::Pie => "pie",
            ChartType::Donut => "donut",
            ChartType::Scatter => "scatter",
            ChartType::Bubble => "bubble",
            ChartType::Radar => "radar",
            ChartType::Heatmap => "heatmap",
            ChartType::Funnel => "funnel",
            ChartType::Treemap => "treemap",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChartType::Line => "Line Chart",
            ChartType::Bar => "Bar Chart",
            ChartType::Gauge => "Gauge Chart",
            ChartType::Area => "Area Chart",
            ChartType::Pie => "Pie Chart",
            ChartType::Donut => "Donut Chart",
            ChartType::Scatter => "Scatter Plot",
            ChartType::Bubble => "Bubble Chart",
            ChartType::Radar => "Radar Chart",
            ChartType::Heatmap => "Heatmap",
            ChartType::Funnel => "Funnel Chart",
            ChartType::Treemap => "TreeMap",
        }
    }

    pub fn category(&self) -> ChartCategory {
        match self {
            ChartType::Line | ChartType::Gauge | ChartType::Area | ChartType::Funnel => {
                ChartCategory::Trends
            }
            ChartType::Bar | ChartType::Radar => ChartCategory::Comparisons,
            ChartType::Pie | ChartType::Donut | ChartType::Treemap => ChartCategory::Composition,
            ChartType::Scatter | ChartType::Bubble | ChartType::Heatmap => {
                ChartCategory::Distribution
            }
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ChartType::ALL
            .into_iter()
            .find(|chart| chart.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownChartType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Html,
    Pdf,
    /// PNG image for social media or slides.
    Image,
    /// Email-optimized HTML.
    Email,
    /// High-resolution print PDF.
    Print,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Html,
        ExportFormat::Pdf,
        ExportFormat::Image,
        ExportFormat::Email,
        ExportFormat::Print,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Image => "image",
            ExportFormat::Email => "email",
            ExportFormat::Print => "print",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Html => "HTML",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Image => "Image (PNG)",
            ExportFormat::Email => "Email Template",
            ExportFormat::Print => "Print Ready",
        }
    }

    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Html | ExportFormat::Email => ".html",
            ExportFormat::Pdf | ExportFormat::Print => ".pdf",
            ExportFormat::Image => ".png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownExportFormat(s.to_string()))
    }
}

/// Newsletter layout templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    ExecutiveSummary,
    FinancialReport,
    BusinessIntelligence,
    MarketingPerformance,
    TeamUpdate,
    TechnicalReport,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::ExecutiveSummary,
        TemplateId::FinancialReport,
        TemplateId::BusinessIntelligence,
        TemplateId::MarketingPerformance,
        TemplateId::TeamUpdate,
        TemplateId::TechnicalReport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::ExecutiveSummary => "executive-summary",
            TemplateId::FinancialReport => "financial-report",
            TemplateId::BusinessIntelligence => "business-intelligence",
            TemplateId::MarketingPerformance => "marketing-performance",
            TemplateId::TeamUpdate => "team-update",
            TemplateId::TechnicalReport => "technical-report",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TemplateId::ExecutiveSummary => "Executive Summary",
            TemplateId::FinancialReport => "Financial Performance Report",
            TemplateId::BusinessIntelligence => "Business Intelligence Dashboard",
            TemplateId::MarketingPerformance => "Marketing Performance",
            TemplateId::TeamUpdate => "Team Update",
            TemplateId::TechnicalReport => "Technical Performance Report",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        TemplateId::ALL
            .into_iter()
            .find(|template| template.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownTemplate(s.to_string()))
    }
}

/// Editor and sharing capabilities that are not charts, exports or templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    ColorCustomization,
    AdvancedEditing,
    NoWatermark,
    CustomFonts,
    AdvancedLayout,
    LogoPositioning,
    CustomBranding,
    AdvancedCharts,
    PublicSharing,
    PasswordProtection,
}

impl Feature {
    pub const ALL: [Feature; 10] = [
        Feature::ColorCustomization,
        Feature::AdvancedEditing,
        Feature::NoWatermark,
        Feature::CustomFonts,
        Feature::AdvancedLayout,
        Feature::LogoPositioning,
        Feature::CustomBranding,
        Feature::AdvancedCharts,
        Feature::PublicSharing,
        Feature::PasswordProtection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::ColorCustomization => "color-customization",
            Feature::AdvancedEditing => "advanced-editing",
            Feature::NoWatermark => "no-watermark",
            Feature::CustomFonts => "custom-fonts",
            Feature::AdvancedLayout => "advanced-layout",
            Feature::LogoPositioning => "logo-positioning",
            Feature::CustomBranding => "custom-branding",
            Feature::AdvancedCharts => "advanced-charts",
            Feature::PublicSharing => "public-sharing",
            Feature::PasswordProtection => "password-protection",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Feature::ColorCustomization => "Color customization",
            Feature::AdvancedEditing => "Advanced editing",
            Feature::NoWatermark => "Watermark-free output",
            Feature::CustomFonts => "Custom fonts",
            Feature::AdvancedLayout => "Advanced layout",
            Feature::LogoPositioning => "Logo positioning",
            Feature::CustomBranding => "Custom branding",
            Feature::AdvancedCharts => "Advanced charts",
            Feature::PublicSharing => "Public sharing",
            Feature::PasswordProtection => "Password-protected sharing",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feature {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Feature::ALL
            .into_iter()
            .find(|feature| feature.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownFeature(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for chart in ChartType::ALL {
            assert_eq!(chart.as_str().parse::<ChartType>(), Ok(chart));
        }
        for format in ExportFormat::ALL {
            assert_eq!(format.as_str().parse::<ExportFormat>(), Ok(format));
        }
        for template in TemplateId::ALL {
            assert_eq!(template.as_str().parse::<TemplateId>(), Ok(template));
        }
        for feature in Feature::ALL {
            assert_eq!(feature.as_str().parse::<Feature>(), Ok(feature));
        }
    }

    #[test]
    fn serde_ids_match_as_str() {
        let json = serde_json::to_string(&TemplateId::BusinessIntelligence).unwrap();
        assert_eq!(json, "\"business-intelligence\"");
        let json = serde_json::to_string(&Feature::PasswordProtection).unwrap();
        assert_eq!(json, "\"password-protection\"");
    }
}
