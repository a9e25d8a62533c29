use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Storage key for one generated post: wall-clock stem plus a random suffix
/// so two posts generated within the same second never overwrite each other.
pub fn storage_key(prefix: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}/{}-{}.txt",
        prefix,
        now.format("%H%M%S"),
        Uuid::new_v4().simple()
    )
}
