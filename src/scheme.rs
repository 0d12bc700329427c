//! Control scheme and device requirement types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline storage for a scheme's requirements. Most schemes list one or two devices.
pub type Requirements = SmallVec<[DeviceRequirement; 4]>;

/// A device that must (or may) be present for a control scheme to apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct DeviceRequirement {
    pub control_path: String,
    #[serde(default)]
    pub is_optional: bool,
}

impl DeviceRequirement {
    /// Required device matching the given layout and optional usage.
    pub fn for_device(layout: &str, usage: Option<&str>) -> Self {
        let control_path = match usage {
            Some(usage) if !usage.is_empty() => format!("<{}>{{{}}}", layout, usage),
            _ => format!("<{}>", layout),
        };
        Self {
            control_path,
            is_optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    /// Layout name between the leading `<` and `>`.
    pub fn device_layout(&self) -> Option<&str> {
        let rest = self.control_path.trim_start().strip_prefix('<')?;
        let end = rest.find('>')?;
        let layout = &rest[..end];
        (!layout.is_empty()).then_some(layout)
    }

    /// Usage between the `{` and `}` directly following the layout.
    pub fn device_usage(&self) -> Option<&str> {
        let path = self.control_path.trim_start();
        let after_layout = &path[path.find('>')? + 1..];
        let rest = after_layout.strip_prefix('{')?;
        let end = rest.find('}')?;
        let usage = &rest[..end];
        (!usage.is_empty()).then_some(usage)
    }

    /// Name shown in the device filter, e.g. `Gamepad LeftHand`.
    pub fn display_name(&self) -> String {
        match (self.device_layout(), self.device_usage()) {
            (Some(layout), Some(usage)) => format!("{} {}", layout, usage),
            (Some(layout), None) => layout.to_string(),
            _ => self.control_path.clone(),
        }
    }
}

impl std::fmt::Display for DeviceRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())?;
        if self.is_optional {
            write!(f, " (optional)")?;
        }
        Ok(())
    }
}

/// Named group of device requirements.
///
/// Values are never edited in place; derive a new scheme with
/// [`ControlScheme::with_name`] or [`ControlScheme::with_requirements`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ControlScheme {
    name: String,
    #[serde(default)]
    device_requirements: Requirements,
}

impl ControlScheme {
    pub fn new<I>(name: impl Into<String>, requirements: I) -> Self
    where
        I: IntoIterator<Item = DeviceRequirement>,
    {
        Self {
            name: name.into(),
            device_requirements: requirements.into_iter().collect(),
        }
    }

    /// Scheme with no device requirements.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, std::iter::empty())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn device_requirements(&self) -> &[DeviceRequirement] {
        &self.device_requirements
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            device_requirements: self.device_requirements.clone(),
        }
    }

    pub fn with_requirements<I>(&self, requirements: I) -> Self
    where
        I: IntoIterator<Item = DeviceRequirement>,
    {
        Self::new(self.name.clone(), requirements)
    }
}

/// Case-insensitive scheme name comparison.
#[inline]
pub fn names_match(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_path_with_usage() {
        let req = DeviceRequirement::for_device("Gamepad", Some("LeftHand"));
        assert_eq!(req.control_path, "<Gamepad>{LeftHand}");
        assert_eq!(req.device_layout(), Some("Gamepad"));
        assert_eq!(req.device_usage(), Some("LeftHand"));
        assert_eq!(req.display_name(), "Gamepad LeftHand");
        assert!(!req.is_optional);
    }

    #[test]
    fn test_control_path_without_usage() {
        let req = DeviceRequirement::for_device("Keyboard", None);
        assert_eq!(req.control_path, "<Keyboard>");
        assert_eq!(req.device_usage(), None);
        assert_eq!(req.display_name(), "Keyboard");

        let empty_usage = DeviceRequirement::for_device("Mouse", Some(""));
        assert_eq!(empty_usage.control_path, "<Mouse>");
    }

    #[test]
    fn test_display_name_falls_back_to_path() {
        let req = DeviceRequirement {
            control_path: "*/{Submit}".to_string(),
            is_optional: true,
        };
        assert_eq!(req.device_layout(), None);
        assert_eq!(req.display_name(), "*/{Submit}");
        assert_eq!(req.to_string(), "*/{Submit} (optional)");
    }

    #[test]
    fn test_usage_must_follow_layout() {
        let req = DeviceRequirement {
            control_path: "<XRController>/trigger{LeftHand}".to_string(),
            is_optional: false,
        };
        assert_eq!(req.device_layout(), Some("XRController"));
        assert_eq!(req.device_usage(), None);
    }

    #[test]
    fn test_with_name_keeps_requirements() {
        let scheme = ControlScheme::new(
            "Gamepad",
            [
                DeviceRequirement::for_device("Gamepad", None),
                DeviceRequirement::for_device("Keyboard", None).optional(),
            ],
        );
        let renamed = scheme.with_name("Gamepad 1");
        assert_eq!(renamed.name(), "Gamepad 1");
        assert_eq!(renamed.device_requirements(), scheme.device_requirements());
        assert_eq!(scheme.name(), "Gamepad");
    }

    #[test]
    fn test_names_match_ignores_case() {
        assert!(names_match("Gamepad", "GAMEPAD"));
        assert!(names_match("Клавиатура", "КЛАВИАТУРА"));
        assert!(!names_match("Gamepad", "Gamepad 1"));
    }
}
