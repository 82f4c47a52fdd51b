//! Generation quota and tier transitions.
//!
//! Subscriptions are values: every transition takes one and returns the next.

use tracing::debug;

use nlg_model::{FREE_GENERATION_LIMIT, SubscriptionTier, UserSubscription};

/// Whether one more newsletter may be generated.
///
/// Free users are held to their limit; a free subscription without a limit
/// is treated as a limit of zero.
pub fn can_generate(subscription: &UserSubscription) -> bool {
    match subscription.tier {
        SubscriptionTier::Free => {
            subscription.generations_used < subscription.generations_limit.unwrap_or(0)
        }
        SubscriptionTier::Basic | SubscriptionTier::Pro => true,
    }
}

/// Counts one generation. The counter is not clamped to the limit.
#[must_use]
pub fn record_generation(subscription: UserSubscription) -> UserSubscription {
    UserSubscription {
        generations_used: subscription.generations_used.saturating_add(1),
        ..subscription
    }
}

/// Moves to `new_tier`, keeping the usage counter.
#[must_use]
pub fn apply_upgrade(subscription: UserSubscription, new_tier: SubscriptionTier) -> UserSubscription {
    let generations_limit = match new_tier {
        SubscriptionTier::Free => Some(FREE_GENERATION_LIMIT),
        SubscriptionTier::Basic | SubscriptionTier::Pro => None,
    };
    debug!(from = %subscription.tier, to = %new_tier, "tier change");
    UserSubscription {
        tier: new_tier,
        generations_limit,
        ..subscription
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free(used: u32, limit: Option<u32>) -> UserSubscription {
        UserSubscription {
            tier: SubscriptionTier::Free,
            generations_used: used,
            generations_limit: limit,
        }
    }

    #[test]
    fn free_quota() {
        assert!(!can_generate(&free(3, Some(3))));
        assert!(can_generate(&free(2, Some(3))));
        assert!(!can_generate(&free(0, None)));
    }

    #[test]
    fn paid_tiers_are_unlimited() {
        let basic = UserSubscription {
            tier: SubscriptionTier::Basic,
            generations_used: 1000,
            generations_limit: None,
        };
        assert!(can_generate(&basic));
    }

    #[test]
    fn record_saturates() {
        assert_eq!(record_generation(free(3, Some(3))).generations_used, 4);
        assert_eq!(
            record_generation(free(u32::MAX, Some(3))).generations_used,
            u32::MAX
        );
    }

    #[test]
    fn upgrade_keeps_usage() {
        let pro = apply_upgrade(free(5, Some(3)), SubscriptionTier::Pro);
        assert_eq!(
            pro,
            UserSubscription {
                tier: SubscriptionTier::Pro,
                generations_used: 5,
                generations_limit: None,
            }
        );
        let back = apply_upgrade(pro, SubscriptionTier::Free);
        assert_eq!(back, free(5, Some(FREE_GENERATION_LIMIT)));
        assert!(!can_generate(&back));
    }
}
