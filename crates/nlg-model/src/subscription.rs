//! Subscription tiers and per-user usage state.
//!
//! Tier strings from settings files or user input are parsed here, at the
//! boundary, so the entitlement engine only ever sees the closed enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Monthly newsletter generations included in the free tier.
pub const FREE_GENERATION_LIMIT: u32 = 3;

/// Subscription level. Declaration order is the tier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Basic,
    Pro,
}

impl SubscriptionTier {
    /// All tiers, lowest first.
    pub const ALL: [SubscriptionTier; 3] = [
        SubscriptionTier::Free,
        SubscriptionTier::Basic,
        SubscriptionTier::Pro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionTier::Free => "free",
            SubscriptionTier::Basic => "basic",
            SubscriptionTier::Pro => "pro",
        }
    }

    pub fn is_paid(&self) -> bool {
        !matches!(self, SubscriptionTier::Free)
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(SubscriptionTier::Free),
            "basic" => Ok(SubscriptionTier::Basic),
            "pro" => Ok(SubscriptionTier::Pro),
            _ => Err(ModelError::UnknownTier(s.to_string())),
        }
    }
}

/// Snapshot of one user's subscription.
///
/// `generations_limit` is `Some` only on the free tier; paid tiers are
/// unlimited. Transitions go through the entitlement engine, which returns
/// new values instead of mutating this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubscription {
    pub tier: SubscriptionTier,
    pub generations_used: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generations_limit: Option<u32>,
}

impl UserSubscription {
    /// The state every new user starts in.
    pub fn initial() -> Self {
        Self {
            tier: SubscriptionTier::Free,
            generations_used: 0,
            generations_limit: Some(FREE_GENERATION_LIMIT),
        }
    }

    /// Generations left before the quota is hit; `None` when unlimited.
    pub fn remaining(&self) -> Option<u32> {
        match self.tier {
            SubscriptionTier::Free => Some(
                self.generations_limit
                    .unwrap_or(0)
                    .saturating_sub(self.generations_used),
            ),
            SubscriptionTier::Basic | SubscriptionTier::Pro => None,
        }
    }
}

impl Default for UserSubscription {
    fn default() -> Self {
        Self::initial()
    }
}
