// Liked-movies profile — explicit state, loaded and saved per command.
//
// The recommendation core has no notion of a user. Likes live in a small
// JSON file owned by the CLI: each command loads the profile, mutates its
// own copy, and writes it back. Nothing here is global.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single liked movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikedMovie {
    pub title: String,
    pub liked_at: DateTime<Utc>,
}

/// The liked-movies list for the local user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub liked: Vec<LikedMovie>,
}

impl Profile {
    /// Load the profile from `path`, or an empty profile when none exists yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse profile: {}", path.display()))
    }

    /// Write the profile to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create profile dir: {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize profile")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write profile: {}", path.display()))
    }

    /// Record a like. Returns false if the title was already liked.
    pub fn like(&mut self, title: &str, liked_at: DateTime<Utc>) -> bool {
        if self.liked.iter().any(|l| l.title == title) {
            return false;
        }
        self.liked.push(LikedMovie {
            title: title.to_string(),
            liked_at,
        });
        true
    }
}

/// Default profile location under the platform data directory.
pub fn default_profile_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
        .join("profile.json")
}
