//! Authorization service.
//!
//! Keeps a registry of named strategies in a `DashMap` so lookups and the
//! occasional registration can happen from any request task without an
//! outer lock. One strategy is the default; it is used when no name is
//! given or the given name is not registered, and it cannot be removed.

use std::sync::Arc;

use dashmap::DashMap;
use membership_common::{SubscriptionStatus, SubscriptionTier};
use tracing::warn;

use super::requirements::ResourceRequirements;
use super::strategies::PremiumAccessStrategy;
use super::strategy::{BuiltinStrategy, PermissionStrategy};
use crate::config::Config;

/// Registry of permission strategies with a fixed default.
pub struct AuthorizationService {
    strategies: DashMap<String, Arc<dyn PermissionStrategy>>,
    default_strategy: Arc<dyn PermissionStrategy>,
}

impl Default for AuthorizationService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AuthorizationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorizationService")
            .field("default_strategy", &self.default_strategy.name())
            .field("strategies", &self.list_strategies())
            .finish()
    }
}

impl AuthorizationService {
    /// Create a service whose default is the premium-access strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_default(Arc::new(PremiumAccessStrategy))
    }

    /// Create a service with the given default strategy.
    ///
    /// The default is registered under its own name.
    #[must_use]
    pub fn with_default(default_strategy: Arc<dyn PermissionStrategy>) -> Self {
        let service = Self {
            strategies: DashMap::new(),
            default_strategy: Arc::clone(&default_strategy),
        };
        service.register(default_strategy);
        service
    }

    /// Create a service from configuration.
    ///
    /// The configured built-in becomes the default and every other built-in
    /// is registered alongside it.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let service = Self::with_default(config.default_access_strategy.build());
        for builtin in BuiltinStrategy::all() {
            if *builtin != config.default_access_strategy {
                service.register(builtin.build());
            }
        }
        service
    }

    /// Register a strategy under its name, replacing any existing entry.
    pub fn register(&self, strategy: Arc<dyn PermissionStrategy>) {
        let name = strategy.name().to_string();
        tracing::debug!(strategy = %name, "Registering access strategy");
        self.strategies.insert(name, strategy);
    }

    /// Remove a strategy by name.
    ///
    /// The default strategy's name is never removed.
    pub fn unregister(&self, name: &str) {
        if name == self.default_strategy.name() {
            return;
        }
        self.strategies.remove(name);
    }

    /// Name of the default strategy.
    #[must_use]
    pub fn default_strategy_name(&self) -> &str {
        self.default_strategy.name()
    }

    /// Names of all registered strategies, in no particular order.
    #[must_use]
    pub fn list_strategies(&self) -> Vec<String> {
        self.strategies
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Decide whether a user may access a resource.
    ///
    /// With `strategy_name` the named strategy is used; an unknown name logs
    /// a warning and falls back to the default. Without it the default is
    /// used directly.
    pub fn can_access(
        &self,
        tier: Option<SubscriptionTier>,
        status: Option<SubscriptionStatus>,
        requirements: Option<&ResourceRequirements>,
        strategy_name: Option<&str>,
    ) -> bool {
        let strategy = self.resolve(strategy_name);
        strategy.can_access(tier, status, requirements)
    }

    /// Look up a strategy, cloning it out of the map so no shard lock is
    /// held while it runs.
    fn resolve(&self, strategy_name: Option<&str>) -> Arc<dyn PermissionStrategy> {
        let Some(name) = strategy_name else {
            return Arc::clone(&self.default_strategy);
        };

        if let Some(entry) = self.strategies.get(name) {
            return Arc::clone(entry.value());
        }

        warn!(
            strategy = %name,
            fallback = %self.default_strategy.name(),
            "Strategy not found, using default"
        );
        Arc::clone(&self.default_strategy)
    }
}
