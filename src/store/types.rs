//! Dataset types shared by the store, the search engine and preferences.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual icon set an emoji can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Apple,
    Twemoji,
    Noto,
    Blobmoji,
}

impl IconStyle {
    pub const ALL: [IconStyle; 4] = [
        IconStyle::Apple,
        IconStyle::Twemoji,
        IconStyle::Noto,
        IconStyle::Blobmoji,
    ];

    /// Name used in preference values, asset directories and column suffixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconStyle::Apple => "apple",
            IconStyle::Twemoji => "twemoji",
            IconStyle::Noto => "noto",
            IconStyle::Blobmoji => "blobmoji",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| format!("unknown icon style \"{}\"", s))
    }
}

/// Skin tone modifier selected by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkinTone {
    #[default]
    Default,
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    pub const ALL: [SkinTone; 6] = [
        SkinTone::Default,
        SkinTone::Light,
        SkinTone::MediumLight,
        SkinTone::Medium,
        SkinTone::MediumDark,
        SkinTone::Dark,
    ];

    /// Preference value for this tone.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinTone::Default => "default",
            SkinTone::Light => "light",
            SkinTone::MediumLight => "medium-light",
            SkinTone::Medium => "medium",
            SkinTone::MediumDark => "medium-dark",
            SkinTone::Dark => "dark",
        }
    }

    /// Value stored in the `skin_tone.tone` column. The default tone has no
    /// rows, so it maps to the empty string and never joins.
    pub fn column_value(&self) -> &'static str {
        match self {
            SkinTone::Default => "",
            other => other.as_str(),
        }
    }

    /// Fitzpatrick modifier appended to a base code.
    pub fn modifier(&self) -> Option<char> {
        match self {
            SkinTone::Default => None,
            SkinTone::Light => Some('\u{1F3FB}'),
            SkinTone::MediumLight => Some('\u{1F3FC}'),
            SkinTone::Medium => Some('\u{1F3FD}'),
            SkinTone::MediumDark => Some('\u{1F3FE}'),
            SkinTone::Dark => Some('\u{1F3FF}'),
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(SkinTone::Default);
        }
        SkinTone::ALL
            .into_iter()
            .find(|tone| tone.as_str() == s)
            .ok_or_else(|| format!("unknown skin tone \"{}\"", s))
    }
}

/// One icon path per style. Paths are relative to the assets directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSet {
    pub apple: Option<String>,
    pub twemoji: Option<String>,
    pub noto: Option<String>,
    pub blobmoji: Option<String>,
}

impl IconSet {
    /// Conventional layout: `images/<style>/<stem>.png` for every style.
    pub fn conventional(stem: &str) -> Self {
        let path = |style: IconStyle| Some(format!("images/{}/{}.png", style, stem));
        Self {
            apple: path(IconStyle::Apple),
            twemoji: path(IconStyle::Twemoji),
            noto: path(IconStyle::Noto),
            blobmoji: path(IconStyle::Blobmoji),
        }
    }

    pub fn get(&self, style: IconStyle) -> Option<&str> {
        match style {
            IconStyle::Apple => self.apple.as_deref(),
            IconStyle::Twemoji => self.twemoji.as_deref(),
            IconStyle::Noto => self.noto.as_deref(),
            IconStyle::Blobmoji => self.blobmoji.as_deref(),
        }
    }
}

/// Importable description of one emoji and its tone variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmojiRecord {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub icons: IconSet,
    #[serde(default)]
    pub skin_tones: Vec<SkinToneRecord>,
}

impl EmojiRecord {
    /// Text the wildcard query is matched against.
    pub fn name_search(&self) -> String {
        std::iter::once(self.name.as_str())
            .chain(self.keywords.iter().map(String::as_str))
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Per-tone override of an emoji's code and icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinToneRecord {
    pub tone: SkinTone,
    pub code: String,
    #[serde(default)]
    pub icons: IconSet,
}

/// Tone override columns of a lookup row.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneOverride {
    pub code: String,
    pub icons: IconSet,
}

/// One row of the lookup query: the base emoji left-joined with its
/// override for the requested tone.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiRow {
    pub name: String,
    pub code: String,
    pub keywords: String,
    pub icons: IconSet,
    pub tone: Option<ToneOverride>,
}

impl EmojiRow {
    /// Code to copy: the tone variant when one joined, otherwise the base.
    pub fn effective_code(&self) -> &str {
        self.tone
            .as_ref()
            .map(|t| t.code.as_str())
            .unwrap_or(&self.code)
    }

    /// Icons matching [`effective_code`](Self::effective_code).
    pub fn effective_icons(&self) -> &IconSet {
        self.tone.as_ref().map(|t| &t.icons).unwrap_or(&self.icons)
    }
}
