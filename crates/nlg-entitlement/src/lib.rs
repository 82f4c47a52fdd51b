//! Tier-gated feature entitlements.
//!
//! Pure functions over explicit inputs: nothing here stores a subscription
//! or touches the file system.

pub mod entitlements;
pub mod plans;
pub mod policy;
pub mod quota;

pub use entitlements::{Entitlements, GateEntry, GateKind, gate_table};
pub use plans::{BillingPeriod, Customization, SubscriptionPlan, SupportLevel, plan, plans};
pub use policy::{Gated, allowed_for, is_feature_allowed, tier_rank, upgrade_target};
pub use quota::{apply_upgrade, can_generate, record_generation};
