use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Primary keys are UUIDs; meals and users use time-ordered v7 ids.
pub type DbId = Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Opaque session identifier carried in the session cookie.
///
/// Any non-empty value is a session; ids issued by this service are random
/// UUIDs, but a client-held value is never required to be one. Produced by
/// the session guard and passed explicitly to every meal-scoped repository
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a raw cookie value. Surrounding whitespace is ignored; an empty
    /// value is no session at all.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Issue a fresh random session identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a new time-ordered row id.
pub fn new_id() -> DbId {
    Uuid::now_v7()
}
