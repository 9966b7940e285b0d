use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a collaboration request.
///
/// A request starts `Pending` and moves at most once, to `Success` or
/// `Rejected`. Terminal states never transition again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Success,
    Rejected,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pending => write!(f, "pending"),
            Status::Success => write!(f, "success"),
            Status::Rejected => write!(f, "rejected"),
        }
    }
}

/// A collaboration request submitted through the contact form.
///
/// `token` is the primary key and the credential embedded in the
/// confirm/reject links. `processed_at` is `Some` exactly when the
/// request has left `Pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaboration {
    pub token: String,
    pub brand: String,
    pub email: String,
    pub budget: String,
    pub message: String,
    pub status: Status,
    pub timestamp: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}

impl Collaboration {
    /// Build a fresh pending request stamped with the current time.
    pub fn new(
        token: String,
        brand: String,
        email: String,
        budget: String,
        message: String,
    ) -> Self {
        Self {
            token,
            brand,
            email,
            budget,
            message,
            status: Status::Pending,
            timestamp: Utc::now(),
            processed_at: None,
        }
    }
}

/// Partial-field merge for [`Registry::update`]. `None` fields are left
/// unchanged on the stored record.
#[derive(Debug, Clone, Default)]
pub struct CollaborationUpdate {
    pub brand: Option<String>,
    pub email: Option<String>,
    pub budget: Option<String>,
    pub message: Option<String>,
    pub status: Option<Status>,
    pub processed_at: Option<DateTime<Utc>>,
}

/// Per-status tally, recomputed from the live record set on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub total: usize,
    pub pending: usize,
    pub success: usize,
    pub rejected: usize,
}

/// Result of a guarded confirm/reject transition.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    /// The record was pending and has been moved to the terminal status.
    Applied(Collaboration),
    /// No record exists for the token.
    NotFound,
    /// The record already left `Pending`; carries its current status.
    AlreadyProcessed(Status),
}

/// In-memory keeper of collaboration-request state for the process's
/// lifetime. Constructed once and shared via `web::Data` — there is no
/// persistence, a restart loses all records.
///
/// Operations never fail: unknown tokens come back as `None`/`false`,
/// and the poisoned-lock case is recovered rather than propagated.
#[derive(Debug, Default)]
pub struct Registry {
    records: Mutex<HashMap<String, Collaboration>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Collaboration>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a record keyed by its token. Silently overwrites on token
    /// collision — callers must generate non-colliding tokens.
    pub fn insert(&self, record: Collaboration) {
        self.lock().insert(record.token.clone(), record);
    }

    pub fn get(&self, token: &str) -> Option<Collaboration> {
        self.lock().get(token).cloned()
    }

    /// Merge the given fields into the stored record. Returns `false`
    /// (and touches nothing) when the token is unknown. Performs no
    /// validation of the merged result.
    pub fn update(&self, token: &str, updates: CollaborationUpdate) -> bool {
        let mut records = self.lock();
        let Some(record) = records.get_mut(token) else {
            return false;
        };
        if let Some(brand) = updates.brand {
            record.brand = brand;
        }
        if let Some(email) = updates.email {
            record.email = email;
        }
        if let Some(budget) = updates.budget {
            record.budget = budget;
        }
        if let Some(message) = updates.message {
            record.message = message;
        }
        if let Some(status) = updates.status {
            record.status = status;
        }
        if let Some(processed_at) = updates.processed_at {
            record.processed_at = Some(processed_at);
        }
        true
    }

    /// Administrative removal. Returns whether a record existed.
    pub fn delete(&self, token: &str) -> bool {
        self.lock().remove(token).is_some()
    }

    pub fn exists(&self, token: &str) -> bool {
        self.lock().contains_key(token)
    }

    /// Every record, processed ones first ordered by `processed_at`
    /// descending, pending ones after in arbitrary relative order.
    /// Recomputed on each call, never a cached snapshot.
    pub fn list_all(&self) -> Vec<Collaboration> {
        let mut all: Vec<Collaboration> = self.lock().values().cloned().collect();
        all.sort_by(|a, b| match (&a.processed_at, &b.processed_at) {
            (Some(a_t), Some(b_t)) => b_t.cmp(a_t),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        all
    }

    pub fn counts(&self) -> Counts {
        let records = self.lock();
        let mut counts = Counts { total: records.len(), pending: 0, success: 0, rejected: 0 };
        for record in records.values() {
            match record.status {
                Status::Pending => counts.pending += 1,
                Status::Success => counts.success += 1,
                Status::Rejected => counts.rejected += 1,
            }
        }
        counts
    }

    /// Guarded confirm/reject transition: look up the record, verify it
    /// is still `Pending`, then set the terminal status and stamp
    /// `processed_at` — all under a single lock hold, so two racing
    /// requests on the same token cannot both apply.
    pub fn process(&self, token: &str, status: Status) -> ProcessOutcome {
        debug_assert!(status != Status::Pending, "Pending is not a transition target");
        let mut records = self.lock();
        let Some(record) = records.get_mut(token) else {
            return ProcessOutcome::NotFound;
        };
        if record.status != Status::Pending {
            return ProcessOutcome::AlreadyProcessed(record.status);
        }
        record.status = status;
        record.processed_at = Some(Utc::now());
        ProcessOutcome::Applied(record.clone())
    }
}
