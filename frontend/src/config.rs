//! Editor settings bundled into the frontend at build time.

use shared::EditorConfig;

const EDITOR_CONFIG_SOURCE: &str = include_str!("../editor.toml");

/// Parses the bundled `editor.toml`; a broken file falls back to defaults.
pub fn load_editor_config() -> EditorConfig {
    match EditorConfig::from_toml_str(EDITOR_CONFIG_SOURCE) {
        Ok(config) => {
            zoon::println!("⚙️ CONFIG: Loaded editor config v{}", config.app.version);
            config
        }
        Err(error) => {
            zoon::eprintln!("⚙️ CONFIG: {error}, using defaults");
            EditorConfig::default()
        }
    }
}
