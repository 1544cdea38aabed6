//! Shared Types

mod content;
mod session;
mod subscription;

pub use content::*;
pub use session::*;
pub use subscription::*;
