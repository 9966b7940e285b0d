//! Shared test infrastructure: record builders for registry and API tests.

#![allow(dead_code)]

use chrono::{Duration, Utc};
use creatorsite::models::collaboration::{Collaboration, Status};

pub const OPERATOR: &str = "ops@test.com";
pub const BASE_URL: &str = "http://127.0.0.1:8080";

/// A fresh pending request for the given token and brand.
pub fn pending_request(token: &str, brand: &str) -> Collaboration {
    Collaboration::new(
        token.to_string(),
        brand.to_string(),
        format!("{}@example.com", brand.to_lowercase()),
        "$500".to_string(),
        "Let's collaborate on a video".to_string(),
    )
}

/// A request already moved to a terminal status, processed the given
/// number of minutes ago.
pub fn processed_request(
    token: &str,
    brand: &str,
    status: Status,
    minutes_ago: i64,
) -> Collaboration {
    let mut record = pending_request(token, brand);
    record.status = status;
    record.processed_at = Some(Utc::now() - Duration::minutes(minutes_ago));
    record
}
