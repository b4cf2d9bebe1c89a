//! Configuration loading from leetsort.toml.
//!
//! An optional `leetsort.toml` at the repository root overrides the folder
//! layout and resolution knobs. Everything has a default matching the
//! conventional repository shape, so most repos need no config file at all.
//!
//! ## Example
//!
//! ```toml
//! intake-dir = "Daily Questions"
//! extension = "cpp"
//! recency-window-hours = 24
//! lookup-endpoint = "https://leetcode.com/graphql"
//! lookup-timeout-secs = 15
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::types::Difficulty;

/// Resolved configuration with all defaults applied.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source file for this config (for display). None means defaults.
    pub source: Option<PathBuf>,

    /// Folder holding newly added, not-yet-classified files.
    pub intake_dir: String,

    /// Destination folder names per tier.
    pub easy_dir: String,
    pub medium_dir: String,
    pub hard_dir: String,

    /// Solution file extension, without the leading dot.
    pub extension: String,

    /// Trailing recency window in hours. Files modified longer ago than this
    /// are skipped unless the bypass flag is set.
    pub recency_window_hours: u64,

    /// Remote catalog lookup endpoint.
    pub lookup_endpoint: String,

    /// Per-request timeout for the lookup service, in seconds.
    pub lookup_timeout_secs: u64,

    /// Resolution cache file name, relative to the repository root.
    pub cache_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            intake_dir: "Daily Questions".to_string(),
            easy_dir: "Easy".to_string(),
            medium_dir: "Medium".to_string(),
            hard_dir: "Hard".to_string(),
            extension: "cpp".to_string(),
            recency_window_hours: 24,
            lookup_endpoint: "https://leetcode.com/graphql".to_string(),
            lookup_timeout_secs: 15,
            cache_file: ".leetsort_cache.json".to_string(),
        }
    }
}

/// Raw config as deserialized from TOML. Every field optional.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
    intake_dir: Option<String>,
    easy_dir: Option<String>,
    medium_dir: Option<String>,
    hard_dir: Option<String>,
    extension: Option<String>,
    recency_window_hours: Option<u64>,
    lookup_endpoint: Option<String>,
    lookup_timeout_secs: Option<u64>,
    cache_file: Option<String>,
}

impl Config {
    /// Load configuration from the given repository root.
    ///
    /// Reads `leetsort.toml` if present; a missing or unreadable file yields
    /// the defaults. A present-but-invalid file also yields the defaults -
    /// configuration is a convenience layer, never a reason to abort a run.
    pub fn load(root: &Path) -> Self {
        let path = root.join("leetsort.toml");
        if !path.exists() {
            return Self::default();
        }

        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        let Ok(raw) = toml::from_str::<RawConfig>(&content) else {
            return Self::default();
        };

        Self::from_raw(raw, path)
    }

    fn from_raw(raw: RawConfig, source: PathBuf) -> Self {
        let defaults = Self::default();
        Self {
            source: Some(source),
            intake_dir: raw.intake_dir.unwrap_or(defaults.intake_dir),
            easy_dir: raw.easy_dir.unwrap_or(defaults.easy_dir),
            medium_dir: raw.medium_dir.unwrap_or(defaults.medium_dir),
            hard_dir: raw.hard_dir.unwrap_or(defaults.hard_dir),
            extension: raw.extension.unwrap_or(defaults.extension),
            recency_window_hours: raw
                .recency_window_hours
                .unwrap_or(defaults.recency_window_hours),
            lookup_endpoint: raw.lookup_endpoint.unwrap_or(defaults.lookup_endpoint),
            lookup_timeout_secs: raw
                .lookup_timeout_secs
                .unwrap_or(defaults.lookup_timeout_secs),
            cache_file: raw.cache_file.unwrap_or(defaults.cache_file),
        }
    }

    /// Format config for verbose display.
    pub fn display_summary(&self) -> String {
        let mut lines = Vec::new();

        match &self.source {
            Some(source) => lines.push(format!("   Config: {}", source.display())),
            None => lines.push("   Config: (defaults)".to_string()),
        }
        lines.push(format!(
            "   Intake: {} (*.{})",
            self.intake_dir, self.extension
        ));
        lines.push(format!(
            "   Tiers: {} / {} / {}",
            self.easy_dir, self.medium_dir, self.hard_dir
        ));
        lines.push(format!(
            "   Recency window: {}h",
            self.recency_window_hours
        ));

        lines.join("\n")
    }
}

/// The four sibling working folders of a repository.
#[derive(Debug, Clone)]
pub struct RepoLayout {
    pub root: PathBuf,
    pub intake: PathBuf,
    pub easy: PathBuf,
    pub medium: PathBuf,
    pub hard: PathBuf,
}

impl RepoLayout {
    pub fn new(root: &Path, config: &Config) -> Self {
        Self {
            root: root.to_path_buf(),
            intake: root.join(&config.intake_dir),
            easy: root.join(&config.easy_dir),
            medium: root.join(&config.medium_dir),
            hard: root.join(&config.hard_dir),
        }
    }

    /// Create the working folders if missing. The only hard failure in the
    /// pipeline: without these folders nothing downstream can run.
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [&self.intake, &self.easy, &self.medium, &self.hard] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create working folder: {}", dir.display()))?;
        }
        Ok(())
    }

    /// The three destination folders, in tier order.
    pub fn destination_dirs(&self) -> [&PathBuf; 3] {
        [&self.easy, &self.medium, &self.hard]
    }

    /// Destination folder for a tier. `Unknown` has no folder.
    pub fn dir_for(&self, difficulty: Difficulty) -> Option<&PathBuf> {
        match difficulty {
            Difficulty::Easy => Some(&self.easy),
            Difficulty::Medium => Some(&self.medium),
            Difficulty::Hard => Some(&self.hard),
            Difficulty::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_match_conventional_layout() {
        let config = Config::default();
        assert_eq!(config.intake_dir, "Daily Questions");
        assert_eq!(config.easy_dir, "Easy");
        assert_eq!(config.extension, "cpp");
        assert_eq!(config.recency_window_hours, 24);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = std::env::temp_dir().join("leetsort_test_config_missing");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let config = Config::load(&temp_dir);
        assert!(config.source.is_none());
        assert_eq!(config.medium_dir, "Medium");

        fs::remove_dir_all(&temp_dir).unwrap();
    }

    #[test]
    fn test_load_partial_override() {
        let temp_dir = std::env::temp_dir().join("leetsort_test_config_partial");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        fs::write(
            temp_dir.join("leetsort.toml"),
            "intake-dir = \"Inbox\"\nrecency-window-hours = 48\n",
        )
        .unwrap();

        let config = Config::load(&temp_dir);
        assert!(config.source.is_some());
        assert_eq!(config.intake_dir, "Inbox");
        assert_eq!(config.recency_window_hours, 48);
        // Untouched fields keep their defaults
        assert_eq!(config.hard_dir, "Hard");
        assert_eq!(config.extension, "cpp");

        fs::remove_dir_all(&temp_dir).unwrap();
    }

    #[test]
    fn test_load_invalid_toml_yields_defaults() {
        let temp_dir = std::env::temp_dir().join("leetsort_test_config_invalid");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        fs::write(temp_dir.join("leetsort.toml"), "intake-dir = [not toml").unwrap();

        let config = Config::load(&temp_dir);
        assert!(config.source.is_none());
        assert_eq!(config.intake_dir, "Daily Questions");

        fs::remove_dir_all(&temp_dir).unwrap();
    }

    #[test]
    fn test_layout_dir_for() {
        let config = Config::default();
        let layout = RepoLayout::new(Path::new("/repo"), &config);

        assert_eq!(
            layout.dir_for(Difficulty::Medium),
            Some(&PathBuf::from("/repo/Medium"))
        );
        assert_eq!(layout.dir_for(Difficulty::Unknown), None);
    }

    #[test]
    fn test_ensure_directories() -> Result<()> {
        let temp_dir = std::env::temp_dir().join("leetsort_test_layout_ensure");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir)?;

        let layout = RepoLayout::new(&temp_dir, &Config::default());
        layout.ensure_directories()?;

        assert!(layout.intake.is_dir());
        assert!(layout.easy.is_dir());
        assert!(layout.medium.is_dir());
        assert!(layout.hard.is_dir());

        fs::remove_dir_all(&temp_dir)?;
        Ok(())
    }
}
