//! Localized toolbar labels.
//!
//! Labels are resolved once per language and shared behind an `Arc`, so the
//! host can clone the cache into every frame without allocating.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Editor UI language, stored by name in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Default)]
pub enum Language {
    #[default]
    English,
    SimplifiedChinese,
    TraditionalChinese,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::SimplifiedChinese,
        Language::TraditionalChinese,
        Language::Japanese,
    ];

    /// Name of the language written in that language, for a language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::SimplifiedChinese => "简体中文",
            Language::TraditionalChinese => "繁體中文",
            Language::Japanese => "日本語",
        }
    }
}

/// Cached translations for the toolbar.
#[derive(Clone)]
pub struct CachedTranslations {
    inner: Arc<TranslationCache>,
}

struct TranslationCache {
    all_control_schemes: String,
    no_control_schemes: String,
    all_devices: String,
    save_asset: String,
    delete_scheme_prompt: String,
}

impl CachedTranslations {
    pub fn new(lang: Language) -> Self {
        let inner = Arc::new(TranslationCache::new(lang));
        Self { inner }
    }

    // Scheme button
    pub fn all_control_schemes(&self) -> &str {
        &self.inner.all_control_schemes
    }
    pub fn no_control_schemes(&self) -> &str {
        &self.inner.no_control_schemes
    }

    // Device filter
    pub fn all_devices(&self) -> &str {
        &self.inner.all_devices
    }

    pub fn save_asset(&self) -> &str {
        &self.inner.save_asset
    }

    /// Formats the delete confirmation question for a scheme.
    pub fn format_delete_prompt(&self, scheme_name: &str) -> String {
        self.inner.delete_scheme_prompt.replace("{name}", scheme_name)
    }
}

impl TranslationCache {
    fn new(lang: Language) -> Self {
        Self {
            all_control_schemes: get_raw_translation(lang, RawKey::AllControlSchemes).to_string(),
            no_control_schemes: get_raw_translation(lang, RawKey::NoControlSchemes).to_string(),
            all_devices: get_raw_translation(lang, RawKey::AllDevices).to_string(),
            save_asset: get_raw_translation(lang, RawKey::SaveAsset).to_string(),
            delete_scheme_prompt: get_raw_translation(lang, RawKey::DeleteSchemePrompt)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum RawKey {
    AllControlSchemes,
    NoControlSchemes,
    AllDevices,
    SaveAsset,
    DeleteSchemePrompt,
}

fn get_raw_translation(lang: Language, key: RawKey) -> &'static str {
    match (lang, key) {
        (Language::English, RawKey::AllControlSchemes) => "All Control Schemes",
        (Language::SimplifiedChinese, RawKey::AllControlSchemes) => "所有控制方案",
        (Language::TraditionalChinese, RawKey::AllControlSchemes) => "所有控制方案",
        (Language::Japanese, RawKey::AllControlSchemes) => "すべてのコントロールスキーム",

        (Language::English, RawKey::NoControlSchemes) => "No Control Schemes",
        (Language::SimplifiedChinese, RawKey::NoControlSchemes) => "无控制方案",
        (Language::TraditionalChinese, RawKey::NoControlSchemes) => "無控制方案",
        (Language::Japanese, RawKey::NoControlSchemes) => "コントロールスキームなし",

        (Language::English, RawKey::AllDevices) => "All Devices",
        (Language::SimplifiedChinese, RawKey::AllDevices) => "所有设备",
        (Language::TraditionalChinese, RawKey::AllDevices) => "所有裝置",
        (Language::Japanese, RawKey::AllDevices) => "すべてのデバイス",

        (Language::English, RawKey::SaveAsset) => "Save Asset",
        (Language::SimplifiedChinese, RawKey::SaveAsset) => "保存资源",
        (Language::TraditionalChinese, RawKey::SaveAsset) => "儲存資源",
        (Language::Japanese, RawKey::SaveAsset) => "アセットを保存",

        (Language::English, RawKey::DeleteSchemePrompt) => {
            "Do you want to delete control scheme '{name}'?"
        }
        (Language::SimplifiedChinese, RawKey::DeleteSchemePrompt) => {
            "确定要删除控制方案 '{name}' 吗？"
        }
        (Language::TraditionalChinese, RawKey::DeleteSchemePrompt) => {
            "確定要刪除控制方案 '{name}' 嗎？"
        }
        (Language::Japanese, RawKey::DeleteSchemePrompt) => {
            "コントロールスキーム '{name}' を削除しますか？"
        }
    }
}
