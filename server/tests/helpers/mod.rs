//! Reusable test helpers for access-control integration tests.
//!
//! Session and content factories mirroring what the session provider and the
//! content store hand to request handlers.
#![allow(dead_code)]

use chrono::{Duration, Utc};
use membership_common::{
    Course, Event, ServiceListing, Session, SessionUser, SubscriptionSnapshot, SubscriptionStatus,
    SubscriptionTier,
};
use uuid::Uuid;

// ============================================================================
// Sessions
// ============================================================================

/// Session for a user with the given subscription record.
pub fn session_with(subscription: Option<SubscriptionSnapshot>) -> Session {
    Session {
        user: SessionUser {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: Some("Test User".to_string()),
            subscription,
        },
        expires: Utc::now() + Duration::hours(24),
    }
}

/// Session for a user with both tier and status set.
pub fn session(tier: SubscriptionTier, status: SubscriptionStatus) -> Session {
    session_with(Some(SubscriptionSnapshot::new(tier, status)))
}

/// Active premium member.
pub fn premium_session() -> Session {
    session(SubscriptionTier::Premium, SubscriptionStatus::Active)
}

/// Active free member.
pub fn free_session() -> Session {
    session(SubscriptionTier::Free, SubscriptionStatus::Active)
}

// ============================================================================
// Content
// ============================================================================

pub fn event(title: &str, is_premium_only: bool) -> Event {
    let now = Utc::now();
    Event {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "Test event description".to_string(),
        start_date: now + Duration::days(7),
        end_date: now + Duration::days(7) + Duration::hours(2),
        location: Some("Test Location".to_string()),
        image_url: None,
        max_attendees: Some(100),
        is_premium_only,
        created_at: now,
        updated_at: now,
    }
}

pub fn course(title: &str, is_premium_only: bool) -> Course {
    let now = Utc::now();
    Course {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: "Test course description".to_string(),
        thumbnail: None,
        duration: Some(60),
        is_premium_only,
        published: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn service_listing(title: &str, is_premium_only: bool) -> ServiceListing {
    let now = Utc::now();
    ServiceListing {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        title: title.to_string(),
        description: "Test service description".to_string(),
        category: "CONSULTING".to_string(),
        image_url: None,
        contact_email: Some("service@example.com".to_string()),
        contact_phone: None,
        is_premium_only,
        published: true,
        created_at: now,
        updated_at: now,
    }
}
