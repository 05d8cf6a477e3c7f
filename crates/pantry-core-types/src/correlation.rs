//! Correlation identifier for one user interaction
//!
//! A single CLI invocation (one user action) gets one `RequestId`; every
//! command and query applied on its behalf logs it, so the mutate and
//! re-read halves of the cycle can be tied together.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single interaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
