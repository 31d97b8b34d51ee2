//! Tracked symbols and the repository that persists them.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedSymbol {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TrackedSymbol {
    pub fn new(symbol: &str, name: Option<&str>) -> Self {
        TrackedSymbol {
            symbol: symbol.to_string(),
            name: name.map(str::to_string),
        }
    }
}

pub trait Repository {
    fn entries(&self) -> Vec<TrackedSymbol>;

    /// Persists `entries` to `destination`, or to the repository's own
    /// location when none is given.
    fn save(&self, entries: &[TrackedSymbol], destination: Option<&Path>) -> Result<()>;
}
