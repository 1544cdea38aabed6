//! Gated Content Types
//!
//! Events, courses and service listings. Each can be flagged premium-only,
//! which is all the access layer looks at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anything that can be restricted to premium members.
pub trait PremiumGated {
    /// Whether only active premium members may access this item.
    fn is_premium_only(&self) -> bool;
}

impl<T: PremiumGated + ?Sized> PremiumGated for &T {
    fn is_premium_only(&self) -> bool {
        (**self).is_premium_only()
    }
}

/// Community event members can register for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    /// Registration cap. `None` means unlimited.
    pub max_attendees: Option<u32>,
    pub is_premium_only: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PremiumGated for Event {
    fn is_premium_only(&self) -> bool {
        self.is_premium_only
    }
}

/// Course members can enroll in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    /// Duration in minutes.
    pub duration: Option<u32>,
    pub is_premium_only: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PremiumGated for Course {
    fn is_premium_only(&self) -> bool {
        self.is_premium_only
    }
}

/// Entry in the member services directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    pub id: Uuid,
    /// Member who offers the service.
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_premium_only: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PremiumGated for ServiceListing {
    fn is_premium_only(&self) -> bool {
        self.is_premium_only
    }
}
