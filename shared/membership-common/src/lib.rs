//! Membership Common Library
//!
//! Shared domain types used by the server and by anything that hands
//! sessions or gated content to it.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
