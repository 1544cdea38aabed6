//! Permission strategy abstraction.
//!
//! A strategy is a named, side-effect-free decision over a user's
//! subscription and a resource's requirements. The service keeps a registry
//! of them keyed by name.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use membership_common::{SubscriptionStatus, SubscriptionTier};
use thiserror::Error;

use super::requirements::ResourceRequirements;
use super::strategies::{FreeAccessStrategy, PremiumAccessStrategy, TierBasedStrategy};

/// A named access decision.
///
/// Implementations must tolerate absent tier or status and treat them as
/// "no access" for any premium or tier check.
pub trait PermissionStrategy: Send + Sync {
    /// Registry key for this strategy.
    fn name(&self) -> &str;

    /// Decide whether a user may access a resource.
    fn can_access(
        &self,
        tier: Option<SubscriptionTier>,
        status: Option<SubscriptionStatus>,
        requirements: Option<&ResourceRequirements>,
    ) -> bool;
}

/// Strategies shipped with the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinStrategy {
    /// Premium-only resources need an active premium subscription.
    #[default]
    PremiumAccess,
    /// Premium-only resources are never accessible.
    FreeAccess,
    /// Custom predicate, exact tier, or premium requirement, in that order.
    TierBased,
}

impl BuiltinStrategy {
    /// Returns the registry name of this strategy.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PremiumAccess => PremiumAccessStrategy::NAME,
            Self::FreeAccess => FreeAccessStrategy::NAME,
            Self::TierBased => TierBasedStrategy::NAME,
        }
    }

    /// Returns all built-in strategies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::PremiumAccess, Self::FreeAccess, Self::TierBased]
    }

    /// Instantiate the strategy.
    #[must_use]
    pub fn build(&self) -> Arc<dyn PermissionStrategy> {
        match self {
            Self::PremiumAccess => Arc::new(PremiumAccessStrategy),
            Self::FreeAccess => Arc::new(FreeAccessStrategy),
            Self::TierBased => Arc::new(TierBasedStrategy),
        }
    }
}

impl fmt::Display for BuiltinStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name does not match any built-in strategy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown access strategy: {0}")]
pub struct UnknownStrategyError(pub String);

impl FromStr for BuiltinStrategy {
    type Err = UnknownStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| UnknownStrategyError(s.to_string()))
    }
}
