//! Built-in permission strategies.

use membership_common::{is_premium_active, SubscriptionStatus, SubscriptionTier};

use super::requirements::ResourceRequirements;
use super::strategy::PermissionStrategy;

/// Grants premium-only resources to active premium subscribers.
///
/// Resources without `requires_premium` are open to everyone. This is the
/// default strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PremiumAccessStrategy;

impl PremiumAccessStrategy {
    pub const NAME: &'static str = "premium-access";
}

impl PermissionStrategy for PremiumAccessStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn can_access(
        &self,
        tier: Option<SubscriptionTier>,
        status: Option<SubscriptionStatus>,
        requirements: Option<&ResourceRequirements>,
    ) -> bool {
        if !requirements.is_some_and(ResourceRequirements::premium_required) {
            return true;
        }

        is_premium_active(tier, status)
    }
}

/// Only ever grants free resources.
///
/// Used where premium content must stay hidden regardless of subscription.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeAccessStrategy;

impl FreeAccessStrategy {
    pub const NAME: &'static str = "free-access";
}

impl PermissionStrategy for FreeAccessStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn can_access(
        &self,
        _tier: Option<SubscriptionTier>,
        _status: Option<SubscriptionStatus>,
        requirements: Option<&ResourceRequirements>,
    ) -> bool {
        !requirements.is_some_and(ResourceRequirements::premium_required)
    }
}

/// Tier matching with an escape hatch for custom rules.
///
/// Resolution order:
/// 1. `custom_check`, if present, decides alone
/// 2. `required_tier` needs that exact tier and an active subscription
/// 3. `requires_premium` needs an active premium subscription
/// 4. Otherwise access is granted
#[derive(Debug, Clone, Copy, Default)]
pub struct TierBasedStrategy;

impl TierBasedStrategy {
    pub const NAME: &'static str = "tier-based";
}

impl PermissionStrategy for TierBasedStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn can_access(
        &self,
        tier: Option<SubscriptionTier>,
        status: Option<SubscriptionStatus>,
        requirements: Option<&ResourceRequirements>,
    ) -> bool {
        let Some(requirements) = requirements else {
            return true;
        };

        if let Some(check) = &requirements.custom_check {
            return check(tier, status);
        }

        if let Some(required_tier) = requirements.required_tier {
            return tier == Some(required_tier) && status == Some(SubscriptionStatus::Active);
        }

        if requirements.premium_required() {
            return is_premium_active(tier, status);
        }

        true
    }
}
