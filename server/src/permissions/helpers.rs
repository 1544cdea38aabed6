//! Permission helper functions for API handlers.
//!
//! Bind the authorization service to the session shape handlers receive, so
//! a route can check or filter gated content in one call.

use membership_common::{session_subscription, PremiumGated, Session};
use thiserror::Error;

use super::requirements::ResourceRequirements;
use super::service::AuthorizationService;

/// Reasons a handler refuses access to a gated resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No session.
    #[error("Unauthorized")]
    Unauthenticated,

    /// Resource is premium-only and the member has no active premium subscription.
    #[error("Premium subscription required")]
    PremiumRequired,
}

impl AccessError {
    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHORIZED",
            Self::PremiumRequired => "PREMIUM_REQUIRED",
        }
    }

    /// HTTP status the web layer should answer with.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthenticated => 401,
            Self::PremiumRequired => 403,
        }
    }
}

/// Check whether the session may access a resource with the given premium flag.
///
/// Uses the service's default strategy. A missing session or subscription
/// counts as no subscription at all.
pub fn check_resource_access(
    service: &AuthorizationService,
    session: Option<&Session>,
    requires_premium: bool,
) -> bool {
    let (tier, status) = session_subscription(session);
    service.can_access(
        tier,
        status,
        Some(&ResourceRequirements::premium(requires_premium)),
        None,
    )
}

/// Check whether the session has an active premium subscription.
pub fn has_premium_access(service: &AuthorizationService, session: Option<&Session>) -> bool {
    check_resource_access(service, session, true)
}

/// Keep only the items the session may see.
///
/// Premium members get every item; everyone else gets the items that are not
/// premium-only. Order is preserved and the input is left untouched.
pub fn filter_by_access<T>(
    service: &AuthorizationService,
    items: &[T],
    session: Option<&Session>,
) -> Vec<T>
where
    T: PremiumGated + Clone,
{
    if has_premium_access(service, session) {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| !item.is_premium_only())
        .cloned()
        .collect()
}

/// Require a signed-in session that may access the resource.
///
/// # Example
///
/// ```ignore
/// // In an event registration handler:
/// require_resource_access(&state.authz, session.as_ref(), &event)
///     .map_err(|e| (StatusCode::from_u16(e.status_code()).unwrap(), e.to_string()))?;
/// ```
pub fn require_resource_access<R>(
    service: &AuthorizationService,
    session: Option<&Session>,
    resource: &R,
) -> Result<(), AccessError>
where
    R: PremiumGated + ?Sized,
{
    if session.is_none() {
        return Err(AccessError::Unauthenticated);
    }

    if check_resource_access(service, session, resource.is_premium_only()) {
        Ok(())
    } else {
        Err(AccessError::PremiumRequired)
    }
}
