//! Session Types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::subscription::{SubscriptionSnapshot, SubscriptionStatus, SubscriptionTier};

/// Authenticated user as seen by request handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User ID.
    pub id: Uuid,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: Option<String>,
    /// Subscription record, if the user has one.
    pub subscription: Option<SubscriptionSnapshot>,
}

/// Session handed over by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user.
    pub user: SessionUser,
    /// When the session expires.
    pub expires: DateTime<Utc>,
}

impl Session {
    /// Subscription tier of the signed-in user, if known.
    #[must_use]
    pub fn tier(&self) -> Option<SubscriptionTier> {
        self.user.subscription.and_then(|s| s.tier)
    }

    /// Subscription status of the signed-in user, if known.
    #[must_use]
    pub fn status(&self) -> Option<SubscriptionStatus> {
        self.user.subscription.and_then(|s| s.status)
    }
}

/// Extract tier and status from an optional session.
///
/// Both are `None` when there is no session or no subscription.
#[must_use]
pub fn session_subscription(
    session: Option<&Session>,
) -> (Option<SubscriptionTier>, Option<SubscriptionStatus>) {
    session.map_or((None, None), |s| (s.tier(), s.status()))
}
