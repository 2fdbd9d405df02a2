// Common types used across multiple domains and layers

use serde::{Deserialize, Serialize};

/// A point in time as stored by the document store: whole seconds since the
/// Unix epoch plus a sub-second remainder.
///
/// Accepts both `seconds` and the exported `_seconds` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    #[serde(alias = "_seconds")]
    pub seconds: i64,
    #[serde(default, alias = "_nanoseconds")]
    pub nanoseconds: u32,
}

impl Timestamp {
    pub fn from_seconds(seconds: i64) -> Self {
        Self {
            seconds,
            nanoseconds: 0,
        }
    }
}
