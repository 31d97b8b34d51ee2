use crate::core::watchlist::{Repository, TrackedSymbol};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const WATCHLIST_FILE: &str = "watchlist.yaml";

/// Tracked symbols stored as a YAML list.
///
/// ```yaml
/// - symbol: FXAIX
///   name: Fidelity 500
/// - symbol: F
/// ```
#[derive(Debug)]
pub struct YamlWatchlist {
    path: PathBuf,
    entries: Vec<TrackedSymbol>,
}

impl YamlWatchlist {
    /// Opens the watchlist at `path`. A missing file is an empty list, and
    /// so is any file when `load` is false.
    pub fn open(load: bool, path: PathBuf) -> Result<Self> {
        let entries = if load && path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read watchlist: {}", path.display()))?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_yaml::from_str(&content)
                    .with_context(|| format!("Failed to parse watchlist: {}", path.display()))?
            }
        } else {
            Vec::new()
        };
        debug!(
            path = %path.display(),
            count = entries.len(),
            "Opened watchlist"
        );

        Ok(Self { path, entries })
    }

    pub fn in_dir(load: bool, dir: &Path) -> Result<Self> {
        Self::open(load, dir.join(WATCHLIST_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Repository for YamlWatchlist {
    fn entries(&self) -> Vec<TrackedSymbol> {
        self.entries.clone()
    }

    fn save(&self, entries: &[TrackedSymbol], destination: Option<&Path>) -> Result<()> {
        let path = destination.unwrap_or(&self.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(entries)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write watchlist: {}", path.display()))?;
        debug!(path = %path.display(), count = entries.len(), "Saved watchlist");
        Ok(())
    }
}
