//! Toolbar state for the input action asset editor.
//!
//! Combines the control scheme registry with the auxiliary toolbar controls:
//! the save button, the auto-save toggle and the search field.

use crate::config::EditorSettings;
use crate::editor::SchemeEditor;
use crate::i18n::CachedTranslations;
use crate::registry::{ControlSchemeRegistry, ToolbarEvent};

#[derive(Debug, Default)]
pub struct Toolbar {
    registry: ControlSchemeRegistry,
    search_text: String,
    is_dirty: bool,
    auto_save: bool,
    new_scheme_name: String,
}

impl Toolbar {
    pub fn new(registry: ControlSchemeRegistry, settings: &EditorSettings) -> Self {
        Self {
            registry,
            search_text: String::new(),
            is_dirty: false,
            auto_save: settings.auto_save,
            new_scheme_name: settings.new_scheme_name.clone(),
        }
    }

    /// Writes the toolbar's persisted toggles back before the settings are saved.
    pub fn apply_to(&self, settings: &mut EditorSettings) {
        settings.auto_save = self.auto_save;
    }

    pub fn registry(&self) -> &ControlSchemeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ControlSchemeRegistry {
        &mut self.registry
    }

    pub fn into_registry(self) -> ControlSchemeRegistry {
        self.registry
    }

    /// Text on the scheme selection button.
    pub fn scheme_button_label<'a>(&'a self, t: &'a CachedTranslations) -> &'a str {
        if self.registry.is_empty() {
            return t.no_control_schemes();
        }
        match self.registry.selected_scheme() {
            Some(scheme) => scheme.name(),
            None => t.all_control_schemes(),
        }
    }

    /// Text on the device filter button.
    pub fn device_filter_label(&self, t: &CachedTranslations) -> String {
        self.registry
            .selected_requirement()
            .map(|requirement| requirement.display_name())
            .unwrap_or_else(|| t.all_devices().to_string())
    }

    /// The device filter only applies within a selected scheme.
    pub fn device_filter_enabled(&self) -> bool {
        self.registry.selected_scheme_index().is_some()
    }

    /// Edit, duplicate and delete act on the selected scheme.
    pub fn can_modify_selection(&self) -> bool {
        self.registry.selected_scheme_index().is_some()
    }

    /// Opens a draft for the "Add Control Scheme" action.
    pub fn begin_add_scheme(&self) -> SchemeEditor {
        SchemeEditor::for_new(&self.registry, &self.new_scheme_name)
    }

    /// Question shown before deleting the selected scheme.
    pub fn delete_confirmation(&self, t: &CachedTranslations) -> Option<String> {
        self.registry
            .selected_scheme()
            .map(|scheme| t.format_delete_prompt(scheme.name()))
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search_text {
            return;
        }
        self.search_text = text;
        self.registry.emit(ToolbarEvent::SearchChanged);
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn set_dirty(&mut self, dirty: bool) {
        self.is_dirty = dirty;
    }

    pub fn auto_save(&self) -> bool {
        self.auto_save
    }

    /// The explicit save button is hidden while auto-save is on.
    pub fn show_save_button(&self) -> bool {
        !self.auto_save
    }

    pub fn save_button_label<'a>(&self, t: &'a CachedTranslations) -> Option<&'a str> {
        self.show_save_button().then(|| t.save_asset())
    }

    /// Turning auto-save on with unsaved changes performs an initial save.
    pub fn set_auto_save(&mut self, enabled: bool) {
        if enabled && !self.auto_save && self.is_dirty {
            self.registry.emit(ToolbarEvent::Save);
        }
        self.auto_save = enabled;
    }

    /// Requests a save from the host. Does nothing when there is nothing to save.
    pub fn save(&mut self) -> bool {
        if !self.is_dirty {
            return false;
        }
        tracing::debug!("asset save requested");
        self.registry.emit(ToolbarEvent::Save);
        true
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::unbounded;

    use super::*;
    use crate::i18n::Language;
    use crate::registry::channel_listener;
    use crate::scheme::{ControlScheme, DeviceRequirement};

    fn toolbar(schemes: Vec<ControlScheme>) -> Toolbar {
        Toolbar::new(
            ControlSchemeRegistry::new(schemes),
            &EditorSettings::default(),
        )
    }

    #[test]
    fn test_scheme_button_label() {
        let t = CachedTranslations::new(Language::English);

        let empty = toolbar(vec![]);
        assert_eq!(empty.scheme_button_label(&t), "No Control Schemes");

        let mut bar = toolbar(vec![ControlScheme::named("Gamepad")]);
        assert_eq!(bar.scheme_button_label(&t), "All Control Schemes");

        bar.registry_mut().select_scheme(Some(0)).unwrap();
        assert_eq!(bar.scheme_button_label(&t), "Gamepad");
    }

    #[test]
    fn test_device_filter_label() {
        let t = CachedTranslations::new(Language::English);
        let mut bar = toolbar(vec![ControlScheme::new(
            "VR",
            [DeviceRequirement::for_device("XRController", Some("RightHand"))],
        )]);

        assert!(!bar.device_filter_enabled());
        assert_eq!(bar.device_filter_label(&t), "All Devices");

        bar.registry_mut().select_scheme(Some(0)).unwrap();
        assert!(bar.device_filter_enabled());
        assert!(bar.can_modify_selection());

        bar.registry_mut().select_device_requirement(Some(0)).unwrap();
        assert_eq!(bar.device_filter_label(&t), "XRController RightHand");
    }

    #[test]
    fn test_search_text_notifies_on_change_only() {
        let mut bar = toolbar(vec![]);
        let (tx, rx) = unbounded();
        bar.registry_mut().subscribe(channel_listener(tx));

        bar.set_search_text("jump");
        bar.set_search_text("jump");
        bar.set_search_text("");

        assert_eq!(bar.search_text(), "");
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn test_save_requires_dirty() {
        let mut bar = toolbar(vec![]);
        let (tx, rx) = unbounded();
        bar.registry_mut().subscribe(channel_listener(tx));

        assert!(!bar.save());
        bar.set_dirty(true);
        assert!(bar.save());

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![ToolbarEvent::Save]);
    }

    #[test]
    fn test_enabling_auto_save_while_dirty_saves_once() {
        let mut bar = toolbar(vec![]);
        let (tx, rx) = unbounded();
        bar.registry_mut().subscribe(channel_listener(tx));
        bar.set_dirty(true);

        bar.set_auto_save(true);
        bar.set_auto_save(true);

        assert!(bar.auto_save());
        assert!(!bar.show_save_button());
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![ToolbarEvent::Save]);
    }

    #[test]
    fn test_enabling_auto_save_when_clean_does_not_save() {
        let mut bar = toolbar(vec![]);
        let (tx, rx) = unbounded();
        bar.registry_mut().subscribe(channel_listener(tx));

        bar.set_auto_save(true);
        bar.set_auto_save(false);

        assert!(bar.show_save_button());
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_auto_save_toggle_reaches_settings() {
        let mut settings = EditorSettings::default();
        let mut bar = Toolbar::new(ControlSchemeRegistry::default(), &settings);

        bar.set_auto_save(true);
        bar.apply_to(&mut settings);
        assert!(settings.auto_save);

        bar.set_auto_save(false);
        bar.apply_to(&mut settings);
        assert!(!settings.auto_save);
    }

    #[test]
    fn test_save_button_label_hidden_with_auto_save() {
        let t = CachedTranslations::new(Language::English);
        let mut bar = toolbar(vec![]);

        assert_eq!(bar.save_button_label(&t), Some("Save Asset"));
        bar.set_auto_save(true);
        assert_eq!(bar.save_button_label(&t), None);
    }

    #[test]
    fn test_begin_add_scheme_uses_configured_name() {
        let settings = EditorSettings {
            new_scheme_name: "Layout".to_string(),
            ..EditorSettings::default()
        };
        let bar = Toolbar::new(
            ControlSchemeRegistry::new(vec![ControlScheme::named("Layout")]),
            &settings,
        );

        assert_eq!(bar.begin_add_scheme().name(), "Layout 1");
    }

    #[test]
    fn test_delete_confirmation_names_selected_scheme() {
        let t = CachedTranslations::new(Language::English);
        let mut bar = toolbar(vec![ControlScheme::named("Gamepad")]);
        assert_eq!(bar.delete_confirmation(&t), None);

        bar.registry_mut().select_scheme(Some(0)).unwrap();
        assert_eq!(
            bar.delete_confirmation(&t).as_deref(),
            Some("Do you want to delete control scheme 'Gamepad'?")
        );
    }

    #[test]
    fn test_auto_save_follows_settings() {
        let settings = EditorSettings {
            auto_save: true,
            ..EditorSettings::default()
        };
        let bar = Toolbar::new(ControlSchemeRegistry::default(), &settings);
        assert!(bar.auto_save());
    }
}
