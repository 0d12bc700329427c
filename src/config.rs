use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditorSettings {
    #[serde(default)]
    pub auto_save: bool,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_new_scheme_name")]
    pub new_scheme_name: String,
}

fn default_new_scheme_name() -> String {
    "New control scheme".to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            auto_save: false, // Explicit save button until the user opts in
            language: Language::default(),
            new_scheme_name: default_new_scheme_name(),
        }
    }
}

impl EditorSettings {
    /// Load settings from file, or create default if not exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if !path.as_ref().exists() {
            let default_settings = Self::default();
            default_settings.save_to_file(&path)?;
            return Ok(default_settings);
        }
        Self::load_from_file(path)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut settings: EditorSettings = toml::from_str(&content)?;

        if settings.new_scheme_name.trim().is_empty() {
            settings.new_scheme_name = default_new_scheme_name();
        }

        Ok(settings)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let language = toml::Value::try_from(self.language)?;
        let new_scheme_name = toml::Value::String(self.new_scheme_name.clone());

        let commented = format!(
            "auto_save = {}                # Save the asset after every change\n\
             language = {}        # English, SimplifiedChinese, TraditionalChinese, Japanese\n\
             new_scheme_name = {}   # Base name for schemes created from the toolbar\n",
            self.auto_save, language, new_scheme_name
        );

        fs::write(path, commented)?;
        Ok(())
    }
}
