//! Control scheme registry.
//!
//! Owns the ordered list of control schemes shown in the toolbar together with
//! the selected scheme and the device requirement selected within it.
//! Every committed change is reported through [`ToolbarEvent`]s.

pub mod events;
pub mod naming;

use tracing::{debug, warn};

use crate::error::SchemeError;
use crate::scheme::{ControlScheme, DeviceRequirement, names_match};

pub use events::{Listener, Notifier, ToolbarEvent, channel_listener};
pub use naming::make_unique_name;

#[derive(Debug, Default)]
pub struct ControlSchemeRegistry {
    schemes: Vec<ControlScheme>,
    selected_scheme: Option<usize>,
    // Only meaningful while `selected_scheme` is set.
    selected_requirement: Option<usize>,
    notifier: Notifier,
}

impl ControlSchemeRegistry {
    /// Wraps schemes loaded by the asset editor. Nothing is selected.
    pub fn new(schemes: Vec<ControlScheme>) -> Self {
        warn_on_colliding_names(&schemes);
        Self {
            schemes,
            ..Self::default()
        }
    }

    pub fn schemes(&self) -> &[ControlScheme] {
        &self.schemes
    }

    pub fn into_schemes(self) -> Vec<ControlScheme> {
        self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn selected_scheme_index(&self) -> Option<usize> {
        self.selected_scheme
    }

    pub fn selected_requirement_index(&self) -> Option<usize> {
        self.selected_requirement
    }

    pub fn selected_scheme(&self) -> Option<&ControlScheme> {
        self.selected_scheme.and_then(|index| self.schemes.get(index))
    }

    pub fn selected_requirement(&self) -> Option<&DeviceRequirement> {
        let scheme = self.selected_scheme()?;
        scheme.device_requirements().get(self.selected_requirement?)
    }

    /// Display names of the selected scheme's requirements, in order.
    pub fn requirement_labels(&self) -> Vec<String> {
        self.selected_scheme()
            .map(|scheme| {
                scheme
                    .device_requirements()
                    .iter()
                    .map(DeviceRequirement::display_name)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.schemes
            .iter()
            .position(|scheme| names_match(scheme.name(), name))
    }

    /// Schemes paired with their index, ordered by name for display.
    pub fn schemes_sorted_by_name(&self) -> Vec<(usize, &ControlScheme)> {
        let mut sorted: Vec<(usize, &ControlScheme)> = self.schemes.iter().enumerate().collect();
        sorted.sort_by_cached_key(|(_, scheme)| scheme.name().to_lowercase());
        sorted
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(ToolbarEvent) + 'static,
    {
        self.notifier.subscribe(listener);
    }

    pub(crate) fn emit(&mut self, event: ToolbarEvent) {
        self.notifier.emit(event);
    }

    /// Returns `base` or `"base N"` with the smallest free `N`.
    pub fn generate_unique_name(&self, base: &str) -> String {
        make_unique_name(base, self.schemes.iter().map(ControlScheme::name))
    }

    /// Same as [`generate_unique_name`](Self::generate_unique_name), but the
    /// scheme at `exclude` does not count as a collision.
    pub fn generate_unique_name_excluding(&self, base: &str, exclude: Option<usize>) -> String {
        make_unique_name(
            base,
            self.schemes
                .iter()
                .enumerate()
                .filter(|(index, _)| Some(*index) != exclude)
                .map(|(_, scheme)| scheme.name()),
        )
    }

    /// Appends `scheme` and selects it.
    pub fn add_scheme(&mut self, scheme: ControlScheme) -> Result<usize, SchemeError> {
        self.validate_name(scheme.name(), None)?;

        self.schemes.push(scheme);
        let index = self.schemes.len() - 1;
        debug!(index, name = self.schemes[index].name(), "control scheme added");
        self.emit(ToolbarEvent::SchemesChanged);

        self.select_scheme(Some(index))?;
        Ok(index)
    }

    /// Replaces the scheme at `index`. Selection is kept.
    pub fn update_scheme(&mut self, index: usize, scheme: ControlScheme) -> Result<(), SchemeError> {
        self.check_scheme_index(index)?;
        self.validate_name(scheme.name(), Some(index))?;

        debug!(index, name = scheme.name(), "control scheme updated");
        self.schemes[index] = scheme;

        // The edited scheme may have fewer requirements than before.
        if self.selected_scheme == Some(index)
            && self
                .selected_requirement
                .is_some_and(|req| req >= self.schemes[index].device_requirements().len())
        {
            self.selected_requirement = None;
            self.emit(ToolbarEvent::RequirementSelectionChanged);
        }

        self.emit(ToolbarEvent::SchemesChanged);
        Ok(())
    }

    /// Removes the selected scheme and clears the selection.
    pub fn delete_selected_scheme(&mut self) -> Result<ControlScheme, SchemeError> {
        let Some(index) = self.selected_scheme else {
            warn!("delete requested with no control scheme selected");
            return Err(SchemeError::NoSchemeSelected);
        };

        let removed = self.schemes.remove(index);
        self.selected_scheme = None;
        debug!(index, name = removed.name(), "control scheme deleted");

        if self.selected_requirement.take().is_some() {
            self.emit(ToolbarEvent::RequirementSelectionChanged);
        }

        self.emit(ToolbarEvent::SchemesChanged);
        self.emit(ToolbarEvent::SchemeSelectionChanged);
        Ok(removed)
    }

    /// Adds a copy of the selected scheme under a unique name and selects it.
    pub fn duplicate_selected_scheme(&mut self) -> Result<usize, SchemeError> {
        let Some(source) = self.selected_scheme() else {
            warn!("duplicate requested with no control scheme selected");
            return Err(SchemeError::NoSchemeSelected);
        };

        let name = self.generate_unique_name(source.name());
        let copy = source.with_name(name);
        self.add_scheme(copy)
    }

    /// Selects the scheme at `index`, or "All Control Schemes" for `None`.
    ///
    /// The device requirement selection is always reset.
    pub fn select_scheme(&mut self, index: Option<usize>) -> Result<(), SchemeError> {
        if let Some(index) = index {
            self.check_scheme_index(index)?;
        }

        self.selected_scheme = index;
        debug!(?index, "control scheme selected");
        self.emit(ToolbarEvent::SchemeSelectionChanged);

        if self.selected_requirement.take().is_some() {
            self.emit(ToolbarEvent::RequirementSelectionChanged);
        }
        Ok(())
    }

    /// Selects by name as picked from the scheme menu; `None` selects all schemes.
    pub fn select_scheme_by_name(&mut self, name: Option<&str>) -> Result<(), SchemeError> {
        let index = match name {
            Some(name) => Some(
                self.find_by_name(name)
                    .ok_or_else(|| SchemeError::UnknownScheme(name.to_string()))?,
            ),
            None => None,
        };
        self.select_scheme(index)
    }

    /// Filters by one requirement of the selected scheme, or "All Devices" for `None`.
    pub fn select_device_requirement(&mut self, index: Option<usize>) -> Result<(), SchemeError> {
        let Some(scheme) = self.selected_scheme() else {
            warn!("device filter changed with no control scheme selected");
            return Err(SchemeError::NoSchemeSelected);
        };

        if let Some(index) = index {
            let len = scheme.device_requirements().len();
            if index >= len {
                return Err(SchemeError::IndexOutOfRange { index, len });
            }
        }

        self.selected_requirement = index;
        debug!(?index, "device requirement selected");
        self.emit(ToolbarEvent::RequirementSelectionChanged);
        Ok(())
    }

    /// Swaps in a freshly loaded scheme list.
    ///
    /// The selected scheme is followed by name. The device filter survives only
    /// when the scheme kept its position and its requirements.
    pub fn replace_schemes(&mut self, schemes: Vec<ControlScheme>) {
        warn_on_colliding_names(&schemes);
        let previous = self.selected_scheme().cloned();
        self.schemes = schemes;

        if let Some(previous) = previous {
            let old_index = self.selected_scheme;
            let new_index = self.find_by_name(previous.name());
            let requirements_kept = new_index.is_some_and(|index| {
                self.schemes[index].device_requirements() == previous.device_requirements()
            });

            if new_index != old_index {
                self.selected_scheme = new_index;
                debug!(?old_index, ?new_index, "selected control scheme moved on reload");
                self.emit(ToolbarEvent::SchemeSelectionChanged);
            }
            if (new_index != old_index || !requirements_kept)
                && self.selected_requirement.take().is_some()
            {
                self.emit(ToolbarEvent::RequirementSelectionChanged);
            }
        }

        debug!(count = self.schemes.len(), "control schemes replaced");
        self.emit(ToolbarEvent::SchemesChanged);
    }

    fn check_scheme_index(&self, index: usize) -> Result<(), SchemeError> {
        if index >= self.schemes.len() {
            warn!(index, len = self.schemes.len(), "control scheme index out of range");
            return Err(SchemeError::IndexOutOfRange {
                index,
                len: self.schemes.len(),
            });
        }
        Ok(())
    }

    fn validate_name(&self, name: &str, replacing: Option<usize>) -> Result<(), SchemeError> {
        if name.is_empty() {
            warn!("rejected control scheme with empty name");
            return Err(SchemeError::InvalidName);
        }
        let collides = self
            .schemes
            .iter()
            .enumerate()
            .any(|(index, existing)| Some(index) != replacing && names_match(existing.name(), name));
        if collides {
            warn!(name, "rejected duplicate control scheme name");
            return Err(SchemeError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}

fn warn_on_colliding_names(schemes: &[ControlScheme]) {
    for (i, scheme) in schemes.iter().enumerate() {
        if schemes[..i]
            .iter()
            .any(|earlier| names_match(earlier.name(), scheme.name()))
        {
            warn!(name = scheme.name(), "loaded control schemes contain a duplicate name");
        }
    }
}
