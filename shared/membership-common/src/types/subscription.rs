//! Subscription Types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Subscription level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionTier {
    /// Default tier, free content only.
    Free,
    /// Paid tier, unlocks premium-only content while active.
    Premium,
}

impl SubscriptionTier {
    /// Returns the stored identifier for this tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Premium => "PREMIUM",
        }
    }

    /// Returns all tiers.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Free, Self::Premium]
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| Error::UnknownTier(s.to_string()))
    }
}

/// Subscription lifecycle state, as reported by the billing provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    /// Paid up and in good standing.
    Active,
    /// Never activated or lapsed.
    Inactive,
    /// Cancelled by the member or the provider.
    Canceled,
    /// Renewal payment failed, awaiting retry.
    PastDue,
}

impl SubscriptionStatus {
    /// Returns the stored identifier for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Canceled => "CANCELED",
            Self::PastDue => "PAST_DUE",
        }
    }

    /// Returns all statuses.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Active, Self::Inactive, Self::Canceled, Self::PastDue]
    }
}

impl fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::UnknownStatus(s.to_string()))
    }
}

/// Check whether a tier/status pair is an active premium subscription.
///
/// Absent values never count as premium.
#[must_use]
pub fn is_premium_active(
    tier: Option<SubscriptionTier>,
    status: Option<SubscriptionStatus>,
) -> bool {
    tier == Some(SubscriptionTier::Premium) && status == Some(SubscriptionStatus::Active)
}

/// Subscription sub-object carried by a session.
///
/// Both fields are optional: the session provider may know the user but not
/// (yet) their subscription record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionSnapshot {
    /// Subscription tier, if known.
    pub tier: Option<SubscriptionTier>,
    /// Subscription status, if known.
    pub status: Option<SubscriptionStatus>,
}

impl SubscriptionSnapshot {
    /// Create a snapshot with both fields present.
    #[must_use]
    pub const fn new(tier: SubscriptionTier, status: SubscriptionStatus) -> Self {
        Self {
            tier: Some(tier),
            status: Some(status),
        }
    }

    /// Check whether this snapshot is an active premium subscription.
    #[must_use]
    pub fn is_premium_active(&self) -> bool {
        is_premium_active(self.tier, self.status)
    }
}
