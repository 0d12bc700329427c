//! Control scheme asset files.
//!
//! The registry performs no persistence. This is the collaborator that reads the
//! scheme list before editing and writes it back when the toolbar raises `Save`.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::registry::ControlSchemeRegistry;
use crate::scheme::ControlScheme;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SchemeAsset {
    #[serde(default)]
    pub control_schemes: Vec<ControlScheme>,
}

impl SchemeAsset {
    pub fn new(control_schemes: Vec<ControlScheme>) -> Self {
        Self { control_schemes }
    }

    /// Snapshot of the registry's current schemes.
    pub fn from_registry(registry: &ControlSchemeRegistry) -> Self {
        Self::new(registry.schemes().to_vec())
    }

    pub fn into_registry(self) -> ControlSchemeRegistry {
        ControlSchemeRegistry::new(self.control_schemes)
    }

    /// Load asset from file, or create an empty one if not exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if !path.as_ref().exists() {
            let empty = Self::default();
            empty.save_to_file(&path)?;
            return Ok(empty);
        }
        Self::load_from_file(path)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let asset: SchemeAsset = toml::from_str(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            schemes = asset.control_schemes.len(),
            "control scheme asset loaded"
        );
        Ok(asset)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            schemes = self.control_schemes.len(),
            "control scheme asset saved"
        );
        Ok(())
    }
}
