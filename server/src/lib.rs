//! Membership Server
//!
//! Subscription-gated access control for the membership platform's events,
//! courses and services directory.

pub mod auth;
pub mod config;
pub mod observability;
pub mod permissions;
