//! The profile store: `profiles.json`.
//!
//! A store is loaded as an immutable snapshot. Nothing in the CLI writes the
//! file back mid-session; [`ProfileStore::save`] exists for callers that build
//! a new snapshot and want to persist it.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Wallet placeholder shipped in template profiles; treated as "no wallet".
pub const WALLET_SENTINEL: &str = "your keypair";

/// Network a profile points at, derived from its url
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Devnet,
}

impl Network {
    /// Any url containing `mainnet` is mainnet; everything else is devnet.
    pub fn classify(url: &str) -> Self {
        if url.contains("mainnet") {
            Self::Mainnet
        } else {
            Self::Devnet
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named profile record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinator_wallet: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multisig_address: Option<String>,

    /// Keys this tool does not know about, kept so a save does not drop them
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

impl Profile {
    pub fn url(&self) -> Option<&str> {
        present(&self.url)
    }

    /// The signing wallet, `None` when missing or still the template placeholder
    pub fn wallet(&self) -> Option<&str> {
        present(&self.wallet).filter(|w| *w != WALLET_SENTINEL)
    }

    pub fn coordinator_wallet(&self) -> Option<&str> {
        present(&self.coordinator_wallet)
    }

    pub fn multisig_address(&self) -> Option<&str> {
        present(&self.multisig_address)
    }

    pub fn network(&self) -> Network {
        Network::classify(self.url.as_deref().unwrap_or_default())
    }
}

/// Contents of profiles.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStore {
    /// Profiles in file order
    #[serde(default)]
    pub profiles: IndexMap<String, Profile>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Top-level shape check, without materialising the profiles
#[derive(Deserialize)]
struct StoreKeys {
    profiles: Option<IgnoredAny>,
}

fn has_profiles_key(content: &str) -> bool {
    serde_json::from_str::<StoreKeys>(content)
        .map(|keys| keys.profiles.is_some())
        .unwrap_or(false)
}

impl ProfileStore {
    /// Read the store, returning an empty one if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "profile store missing, using empty store");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile store: {:?}", path))?;

        let store: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse profile store: {:?}", path))?;

        if !has_profiles_key(&content) {
            tracing::warn!(path = %path.display(), "profile store has no \"profiles\" key");
        }

        tracing::debug!(path = %path.display(), profiles = store.len(), "loaded profile store");
        Ok(store)
    }

    /// Write the store as indented JSON, replacing the file in full.
    ///
    /// Writes to a temp file first and renames it over the target.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create store directory: {:?}", parent))?;
        }

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize profile store")?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content)
            .with_context(|| format!("Failed to write temp store file: {:?}", temp_path))?;

        std::fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename store file: {:?} -> {:?}", temp_path, path)
        })?;

        tracing::debug!(path = %path.display(), profiles = self.len(), "saved profile store");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// Profile at a 1-based position in file order
    pub fn get_by_position(&self, position: usize) -> Option<(&str, &Profile)> {
        let index = position.checked_sub(1)?;
        self.profiles
            .get_index(index)
            .map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Profile)> {
        self.profiles
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
