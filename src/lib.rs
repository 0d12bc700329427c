//! Headless model of the control scheme toolbar in an input action asset editor.
//!
//! The host UI renders the toolbar and forwards user actions here; state
//! changes come back as [`ToolbarEvent`]s. Nothing in this crate draws.

pub mod asset;
pub mod config;
pub mod editor;
pub mod error;
pub mod i18n;
pub mod registry;
pub mod scheme;
pub mod toolbar;

pub use asset::SchemeAsset;
pub use config::EditorSettings;
pub use editor::{DeviceChoice, DeviceLayout, EditTarget, SchemeEditor, device_choices};
pub use error::SchemeError;
pub use i18n::{CachedTranslations, Language};
pub use registry::{ControlSchemeRegistry, ToolbarEvent, channel_listener};
pub use scheme::{ControlScheme, DeviceRequirement};
pub use toolbar::Toolbar;
