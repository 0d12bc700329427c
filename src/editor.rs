//! Draft state behind the control scheme properties popup.
//!
//! A [`SchemeEditor`] is opened from the toolbar to add, duplicate or edit a
//! scheme. It holds the edited name and device list until the user confirms,
//! then applies the result to the registry in one step.

use crate::error::SchemeError;
use crate::registry::ControlSchemeRegistry;
use crate::scheme::{ControlScheme, DeviceRequirement};

/// What confirming the draft does to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Append as a new scheme (add or duplicate).
    New,
    /// Replace the scheme at this index.
    Existing(usize),
}

#[derive(Debug, Clone)]
pub struct SchemeEditor {
    target: EditTarget,
    name: String,
    requirements: Vec<DeviceRequirement>,
    selected: Option<usize>,
}

impl SchemeEditor {
    /// Empty draft named after `base_name`, made unique.
    pub fn for_new(registry: &ControlSchemeRegistry, base_name: &str) -> Self {
        Self {
            target: EditTarget::New,
            name: registry.generate_unique_name(base_name),
            requirements: Vec::new(),
            selected: None,
        }
    }

    /// Copy of the selected scheme under a unique name.
    pub fn for_duplicate(registry: &ControlSchemeRegistry) -> Result<Self, SchemeError> {
        let scheme = registry
            .selected_scheme()
            .ok_or(SchemeError::NoSchemeSelected)?;
        Ok(Self {
            target: EditTarget::New,
            name: registry.generate_unique_name(scheme.name()),
            requirements: scheme.device_requirements().to_vec(),
            selected: None,
        })
    }

    /// Draft of the selected scheme; confirming replaces it in place.
    pub fn for_edit(registry: &ControlSchemeRegistry) -> Result<Self, SchemeError> {
        let index = registry
            .selected_scheme_index()
            .ok_or(SchemeError::NoSchemeSelected)?;
        let scheme = &registry.schemes()[index];
        Ok(Self {
            target: EditTarget::Existing(index),
            name: scheme.name().to_string(),
            requirements: scheme.device_requirements().to_vec(),
            selected: None,
        })
    }

    pub fn target(&self) -> EditTarget {
        self.target
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stores a unique version of `name`. The scheme being edited does not
    /// collide with itself.
    pub fn rename(&mut self, registry: &ControlSchemeRegistry, name: &str) -> &str {
        if name != self.name {
            let exclude = match self.target {
                EditTarget::Existing(index) => Some(index),
                EditTarget::New => None,
            };
            self.name = registry.generate_unique_name_excluding(name, exclude);
        }
        &self.name
    }

    pub fn requirements(&self) -> &[DeviceRequirement] {
        &self.requirements
    }

    pub fn selected_requirement(&self) -> Option<usize> {
        self.selected
    }

    /// Appends a requirement and selects it.
    pub fn add_requirement(&mut self, requirement: DeviceRequirement) {
        self.requirements.push(requirement);
        self.selected = Some(self.requirements.len() - 1);
    }

    pub fn select_requirement(&mut self, index: Option<usize>) -> Result<(), SchemeError> {
        if let Some(index) = index
            && index >= self.requirements.len()
        {
            return Err(SchemeError::IndexOutOfRange {
                index,
                len: self.requirements.len(),
            });
        }
        self.selected = index;
        Ok(())
    }

    pub fn remove_selected_requirement(&mut self) -> Option<DeviceRequirement> {
        let index = self.selected.take()?;
        Some(self.requirements.remove(index))
    }

    /// Flips the selected requirement between optional and required.
    /// Returns false when nothing is selected.
    pub fn set_selected_optional(&mut self, optional: bool) -> bool {
        match self.selected.and_then(|index| self.requirements.get_mut(index)) {
            Some(requirement) => {
                requirement.is_optional = optional;
                true
            }
            None => false,
        }
    }

    /// The scheme this draft would produce.
    pub fn to_scheme(&self) -> ControlScheme {
        ControlScheme::new(self.name.clone(), self.requirements.iter().cloned())
    }

    /// Commits the draft and returns the index of the added or updated scheme.
    pub fn apply(self, registry: &mut ControlSchemeRegistry) -> Result<usize, SchemeError> {
        let scheme = self.to_scheme();
        match self.target {
            EditTarget::New => registry.add_scheme(scheme),
            EditTarget::Existing(index) => {
                registry.update_scheme(index, scheme)?;
                Ok(index)
            }
        }
    }
}

/// Device layout known to the editor, with the usages devices of it commonly carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceLayout {
    pub name: String,
    pub common_usages: Vec<String>,
}

impl DeviceLayout {
    pub fn new<I, S>(name: impl Into<String>, common_usages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            common_usages: common_usages.into_iter().map(Into::into).collect(),
        }
    }
}

/// Entry in the "add device" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceChoice {
    pub label: String,
    pub requirement: DeviceRequirement,
}

/// Every layout sorted by name, each followed by its usages sorted.
pub fn device_choices(layouts: &[DeviceLayout]) -> Vec<DeviceChoice> {
    let mut sorted: Vec<&DeviceLayout> = layouts.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut choices = Vec::new();
    for layout in sorted {
        choices.push(DeviceChoice {
            label: layout.name.clone(),
            requirement: DeviceRequirement::for_device(&layout.name, None),
        });

        let mut usages: Vec<&str> = layout.common_usages.iter().map(String::as_str).collect();
        usages.sort_unstable();
        for usage in usages {
            choices.push(DeviceChoice {
                label: format!("{} {}", layout.name, usage),
                requirement: DeviceRequirement::for_device(&layout.name, Some(usage)),
            });
        }
    }
    choices
}
