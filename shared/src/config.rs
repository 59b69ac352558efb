use crate::error::ShadowError;
use serde::{Deserialize, Serialize};

// ===== CONFIG TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    pub app: AppSection,
    pub controls: ControlsSection,
    pub clipboard: ClipboardSection,
}

impl EditorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ShadowError> {
        let config: Self =
            toml::from_str(source).map_err(|error| ShadowError::Config(error.to_string()))?;
        if !config.app.is_supported_version() {
            return Err(ShadowError::Config(format!(
                "unsupported config version '{}'",
                config.app.version
            )));
        }
        if config.controls.range_min >= config.controls.range_max {
            return Err(ShadowError::Config(format!(
                "range_min {} must be below range_max {}",
                config.controls.range_min, config.controls.range_max
            )));
        }
        Ok(config)
    }
}

// AppSection carries the config format version so older files can be detected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        self.version == Self::CURRENT_VERSION
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsSection {
    /// Unit choices for the shadow offsets, blur and spread.
    pub units: Vec<String>,
    pub range_min: i32,
    pub range_max: i32,
    /// Upper bound of the box width/height sliders.
    pub size_max: i32,
}

impl Default for ControlsSection {
    fn default() -> Self {
        Self {
            units: vec!["px".to_string(), "em".to_string(), "rem".to_string()],
            range_min: -100,
            range_max: 100,
            size_max: 500,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ClipboardSection {
    pub confirmation_ms: u32,
    pub idle_label: String,
    pub copied_label: String,
}

impl Default for ClipboardSection {
    fn default() -> Self {
        Self {
            confirmation_ms: 2000,
            idle_label: "copy code".to_string(),
            copied_label: "copied !".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_gives_defaults() {
        assert_eq!(EditorConfig::from_toml_str("").unwrap(), EditorConfig::default());
    }

    #[test]
    fn bundled_editor_toml_matches_defaults() {
        let config = EditorConfig::from_toml_str(include_str!("../../frontend/editor.toml"));

        assert_eq!(config.unwrap(), EditorConfig::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = EditorConfig::from_toml_str(
            r#"
            [controls]
            units = ["px", "vh"]

            [clipboard]
            confirmation_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.controls.units, vec!["px", "vh"]);
        assert_eq!(config.controls.range_max, 100);
        assert_eq!(config.clipboard.confirmation_ms, 500);
        assert_eq!(config.clipboard.copied_label, "copied !");
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let result = EditorConfig::from_toml_str("[app]\nversion = \"0.1.0\"");

        assert!(matches!(result, Err(ShadowError::Config(message)) if message.contains("0.1.0")));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let result = EditorConfig::from_toml_str("[controls]\nrange_min = 10\nrange_max = 10");

        assert!(result.is_err());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        assert!(matches!(
            EditorConfig::from_toml_str("[controls"),
            Err(ShadowError::Config(_))
        ));
    }
}
