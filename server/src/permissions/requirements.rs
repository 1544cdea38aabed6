//! Resource access requirements.

use std::fmt;
use std::sync::Arc;

use membership_common::{SubscriptionStatus, SubscriptionTier};

/// Caller-supplied access predicate over a user's tier and status.
pub type CustomCheck =
    Arc<dyn Fn(Option<SubscriptionTier>, Option<SubscriptionStatus>) -> bool + Send + Sync>;

/// What a protected resource demands before it can be accessed.
///
/// Every field is optional; an absent field imposes no constraint. No
/// validation is done on conflicting fields, strategies resolve them by
/// precedence.
#[derive(Clone, Default)]
pub struct ResourceRequirements {
    /// Resource requires an active premium subscription.
    pub requires_premium: Option<bool>,

    /// Resource requires this exact tier with an active subscription.
    pub required_tier: Option<SubscriptionTier>,

    /// Predicate that replaces the built-in rules entirely.
    pub custom_check: Option<CustomCheck>,
}

impl ResourceRequirements {
    /// Requirements with no constraints.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Requirements for a resource with the given premium flag.
    #[must_use]
    pub fn premium(requires_premium: bool) -> Self {
        Self {
            requires_premium: Some(requires_premium),
            ..Self::default()
        }
    }

    /// Requirements for a resource reserved to one tier.
    #[must_use]
    pub fn tier(required_tier: SubscriptionTier) -> Self {
        Self {
            required_tier: Some(required_tier),
            ..Self::default()
        }
    }

    /// Requirements decided by a custom predicate.
    #[must_use]
    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(Option<SubscriptionTier>, Option<SubscriptionStatus>) -> bool + Send + Sync + 'static,
    {
        Self {
            custom_check: Some(Arc::new(check)),
            ..Self::default()
        }
    }

    /// Whether `requires_premium` is set to `true`.
    #[must_use]
    pub fn premium_required(&self) -> bool {
        self.requires_premium.unwrap_or(false)
    }
}

impl fmt::Debug for ResourceRequirements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRequirements")
            .field("requires_premium", &self.requires_premium)
            .field("required_tier", &self.required_tier)
            .field(
                "custom_check",
                &self.custom_check.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}
