//! Reaction identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database identifier of a reaction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionId(pub u64);

impl fmt::Display for ReactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ReactionId {
    fn from(id: u64) -> Self {
        ReactionId(id)
    }
}
