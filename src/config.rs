//! Extension preferences and on-disk configuration.
//!
//! The host launcher stores the user's choices as plain strings keyed by
//! preference name. [`Preferences::from_host`] turns that map into typed
//! values; [`Config`] adds the extension's own settings loaded from TOML.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmojiError, EmojiResult};
use crate::store::{IconStyle, SkinTone};

/// Default number of results per query
pub const DEFAULT_MAX_RESULTS: usize = 8;

/// Host preference keys
pub const PREF_EMOJI_STYLE: &str = "emoji_style";
pub const PREF_FALLBACK_STYLE: &str = "fallback_emoji_style";
pub const PREF_SKIN_TONE: &str = "skin_tone";
pub const PREF_DISPLAY_CHAR: &str = "display_char";

/// Per-query preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub emoji_style: IconStyle,
    pub fallback_emoji_style: IconStyle,
    pub skin_tone: SkinTone,
    /// Append the emoji itself to each result label
    pub display_char: bool,
    pub max_results: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            emoji_style: IconStyle::Apple,
            fallback_emoji_style: IconStyle::Twemoji,
            skin_tone: SkinTone::Default,
            display_char: true,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Preferences {
    /// Build preferences from the host's key/value store.
    ///
    /// Missing keys keep their defaults. Unrecognized styles and skin tones
    /// are logged and replaced by the default value.
    pub fn from_host(values: &HashMap<String, String>) -> Self {
        let mut prefs = Self::default();
        prefs.apply_host(values);
        prefs
    }

    /// Overlay host values on top of these preferences.
    pub fn apply_host(&mut self, values: &HashMap<String, String>) {
        if let Some(value) = values.get(PREF_EMOJI_STYLE) {
            self.emoji_style = parse_style(value, self.emoji_style);
        }
        if let Some(value) = values.get(PREF_FALLBACK_STYLE) {
            self.fallback_emoji_style = parse_style(value, self.fallback_emoji_style);
        }
        if let Some(value) = values.get(PREF_SKIN_TONE) {
            self.skin_tone = value.parse().unwrap_or_else(|_| {
                tracing::warn!("Unknown skin tone \"{}\"", value);
                SkinTone::Default
            });
        }
        if let Some(value) = values.get(PREF_DISPLAY_CHAR) {
            self.display_char = value != "no";
        }

        self.validate();
    }

    /// Clamp values to acceptable ranges
    fn validate(&mut self) {
        self.max_results = self.max_results.clamp(1, 20);
    }
}

fn parse_style(value: &str, default: IconStyle) -> IconStyle {
    value.parse().unwrap_or_else(|_| {
        tracing::warn!("Unknown emoji style \"{}\", using {}", value, default);
        default
    })
}

/// Extension configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preferences: Preferences,
    pub data: DataConfig,
}

/// Where the dataset and icon assets live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// SQLite database; the built-in dataset is used when unset or missing
    pub database: Option<String>,
    /// Root directory icon paths are relative to
    pub assets_dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            database: None,
            assets_dir: "~/.local/share/nova/extensions/emoji".to_string(),
        }
    }
}

impl DataConfig {
    pub fn database_path(&self) -> Option<PathBuf> {
        self.database.as_deref().map(expand_path)
    }

    pub fn assets_path(&self) -> PathBuf {
        expand_path(&self.assets_dir)
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("nova")
            .join("extensions")
            .join("emoji.toml")
    }

    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`. Read and parse failures are logged and the
    /// defaults are used instead.
    pub fn load_from(path: &Path) -> Self {
        let mut config = if path.exists() {
            match Self::read(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Failed to load config: {}", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.preferences.validate();
        config
    }

    fn read(path: &Path) -> EmojiResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to the default location
    pub fn save(&self) -> EmojiResult<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> EmojiResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| EmojiError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_host_reads_all_keys() {
        let prefs = Preferences::from_host(&host(&[
            ("emoji_style", "noto"),
            ("fallback_emoji_style", "blobmoji"),
            ("skin_tone", "medium-dark"),
            ("display_char", "no"),
        ]));
        assert_eq!(prefs.emoji_style, IconStyle::Noto);
        assert_eq!(prefs.fallback_emoji_style, IconStyle::Blobmoji);
        assert_eq!(prefs.skin_tone, SkinTone::MediumDark);
        assert!(!prefs.display_char);
        assert_eq!(prefs.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_unknown_skin_tone_falls_back_to_default() {
        let prefs = Preferences::from_host(&host(&[("skin_tone", "green")]));
        assert_eq!(prefs.skin_tone, SkinTone::Default);
    }

    #[test]
    fn test_display_char_only_off_for_no() {
        for value in ["yes", "", "No", "false"] {
            let prefs = Preferences::from_host(&host(&[("display_char", value)]));
            assert!(prefs.display_char, "value {:?}", value);
        }
    }

    #[test]
    fn test_apply_host_keeps_unset_values() {
        let mut prefs = Preferences {
            emoji_style: IconStyle::Blobmoji,
            max_results: 5,
            ..Preferences::default()
        };
        prefs.apply_host(&host(&[("skin_tone", "dark")]));
        assert_eq!(prefs.emoji_style, IconStyle::Blobmoji);
        assert_eq!(prefs.skin_tone, SkinTone::Dark);
        assert_eq!(prefs.max_results, 5);
    }

    #[test]
    fn test_unknown_style_keeps_default() {
        let prefs = Preferences::from_host(&host(&[("emoji_style", "emojione")]));
        assert_eq!(prefs.emoji_style, IconStyle::Apple);
    }

    #[test]
    fn test_load_clamps_and_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emoji.toml");
        fs::write(
            &path,
            r#"
[preferences]
emoji_style = "twemoji"
skin_tone = "light"
max_results = 500

[data]
database = "/opt/emoji/emoji.sqlite"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.preferences.emoji_style, IconStyle::Twemoji);
        assert_eq!(config.preferences.skin_tone, SkinTone::Light);
        assert_eq!(config.preferences.max_results, 20);
        assert_eq!(
            config.data.database_path(),
            Some(PathBuf::from("/opt/emoji/emoji.sqlite"))
        );
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("emoji.toml");
        fs::write(&path, "preferences = [").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.preferences, Preferences::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("emoji.toml");

        let mut config = Config::default();
        config.preferences.fallback_emoji_style = IconStyle::Noto;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.preferences.fallback_emoji_style, IconStyle::Noto);
    }
}
