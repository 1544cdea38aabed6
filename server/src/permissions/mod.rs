//! Permission system types and utilities.
//!
//! Subscription-gated access control:
//! - Strategies: named decisions over tier, status and resource requirements
//! - Service: registry of strategies with a fixed default
//! - Helpers: session-level checks and list filtering for handlers

pub mod helpers;
pub mod requirements;
pub mod service;
pub mod strategies;
pub mod strategy;

pub use helpers::{
    check_resource_access, filter_by_access, has_premium_access, require_resource_access,
    AccessError,
};
pub use requirements::{CustomCheck, ResourceRequirements};
pub use service::AuthorizationService;
pub use strategies::{FreeAccessStrategy, PremiumAccessStrategy, TierBasedStrategy};
pub use strategy::{BuiltinStrategy, PermissionStrategy, UnknownStrategyError};
