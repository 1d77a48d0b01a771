//! Emoji search - turns the typed argument into result items.
//!
//! Platform-agnostic: the host supplies the argument and preferences and
//! renders whatever comes back.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Preferences;
use crate::core::icons;
use crate::executor::ExecutionAction;
use crate::store::{EmojiRow, EmojiStore};

/// Label of the placeholder shown before anything is typed
pub const PLACEHOLDER_NAME: &str = "Type in emoji name...";

/// A single item handed to the host for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    /// Icon path relative to the assets directory
    pub icon: Option<String>,
    pub name: String,
    pub on_enter: ExecutionAction,
}

/// Search engine over an emoji store.
pub struct EmojiSearch {
    store: EmojiStore,
    prefs: Preferences,
    assets_dir: PathBuf,
}

impl EmojiSearch {
    pub fn new(store: EmojiStore, prefs: Preferences, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            prefs,
            assets_dir: assets_dir.into(),
        }
    }

    /// Results for the text typed after the keyword.
    ///
    /// A missing or blank argument yields the placeholder item. Any other
    /// argument is matched as typed, surrounding spaces included. Lookup
    /// failures are logged and produce no results.
    pub fn query(&self, argument: Option<&str>) -> Vec<ResultItem> {
        let argument = match argument.filter(|a| !a.trim().is_empty()) {
            Some(argument) => argument,
            None => return vec![self.placeholder()],
        };

        let pattern = like_pattern(argument);
        let rows = match self
            .store
            .lookup(&pattern, self.prefs.skin_tone, self.prefs.max_results)
        {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(query = argument, "Emoji lookup failed: {}", e);
                return Vec::new();
            }
        };

        tracing::debug!(query = argument, results = rows.len(), "emoji query");
        rows.iter().map(|row| self.to_item(row)).collect()
    }

    fn placeholder(&self) -> ResultItem {
        ResultItem {
            icon: Some(icons::search_icon(
                &self.assets_dir,
                self.prefs.emoji_style,
                self.prefs.fallback_emoji_style,
            )),
            name: PLACEHOLDER_NAME.to_string(),
            on_enter: ExecutionAction::DoNothing,
        }
    }

    fn to_item(&self, row: &EmojiRow) -> ResultItem {
        let code = row.effective_code();
        let icon = icons::resolve(
            &self.assets_dir,
            row.effective_icons(),
            self.prefs.emoji_style,
            self.prefs.fallback_emoji_style,
        );

        ResultItem {
            icon,
            name: format_label(&row.name, code, self.prefs.display_char),
            on_enter: ExecutionAction::CopyToClipboard {
                content: code.to_string(),
            },
        }
    }
}

/// Substring `LIKE` pattern for a user term. `%` is removed; `_` keeps its
/// single-character wildcard meaning.
pub fn like_pattern(term: &str) -> String {
    format!("%{}%", term.replace('%', ""))
}

/// Result label: name with its first letter in title case and the rest
/// lowercased, optionally followed by ` | <emoji>`.
pub fn format_label(name: &str, code: &str, display_char: bool) -> String {
    let mut chars = name.chars();
    let mut label: String = match chars.next() {
        Some(first) => {
            let mut label = titlecase(first);
            label.extend(chars.flat_map(char::to_lowercase));
            label
        }
        None => String::new(),
    };
    if display_char {
        label.push_str(" | ");
        label.push_str(code);
    }
    label
}

/// Title case of a single character. Differs from upper case only for the
/// Latin digraphs, which have a dedicated title-case form.
fn titlecase(c: char) -> String {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}'.to_string(),
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}'.to_string(),
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}'.to_string(),
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}'.to_string(),
        _ => c.to_uppercase().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{IconStyle, SkinTone};
    use std::fs;
    use std::path::Path;

    fn engine(prefs: Preferences, assets: &Path) -> EmojiSearch {
        EmojiSearch::new(EmojiStore::builtin().unwrap(), prefs, assets)
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"png").unwrap();
    }

    #[test]
    fn test_like_pattern() {
        assert_eq!(like_pattern("smile"), "%smile%");
        assert_eq!(like_pattern("50%off"), "%50off%");
        assert_eq!(like_pattern("a_b"), "%a_b%");
        assert_eq!(like_pattern(" hand "), "% hand %");
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label("grinning face", "😀", true), "Grinning face | 😀");
        assert_eq!(format_label("OK HAND", "👌", false), "Ok hand");
        assert_eq!(format_label("", "😀", false), "");
        assert_eq!(format_label("ǆungla", "🌴", false), "ǅungla");
        assert_eq!(format_label("ǈ", "x", false), "ǈ");
    }

    #[test]
    fn test_empty_query_returns_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let search = engine(Preferences::default(), dir.path());

        for argument in [None, Some(""), Some("   ")] {
            let results = search.query(argument);
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].name, PLACEHOLDER_NAME);
            assert_eq!(results[0].on_enter, ExecutionAction::DoNothing);
            assert_eq!(results[0].icon.as_deref(), Some("images/twemoji/icon.png"));
        }
    }

    #[test]
    fn test_results_bounded_to_max() {
        let dir = tempfile::tempdir().unwrap();
        let search = engine(Preferences::default(), dir.path());

        let results = search.query(Some("face"));
        assert_eq!(results.len(), 8);
    }

    #[test]
    fn test_result_label_and_action() {
        let dir = tempfile::tempdir().unwrap();
        let search = engine(Preferences::default(), dir.path());

        let results = search.query(Some("rocket"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Rocket | 🚀");
        assert_eq!(results[0].on_enter.clipboard_text(), Some("🚀"));
    }

    #[test]
    fn test_display_char_off() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences {
            display_char: false,
            ..Preferences::default()
        };
        let search = engine(prefs, dir.path());

        let results = search.query(Some("rocket"));
        assert_eq!(results[0].name, "Rocket");
    }

    #[test]
    fn test_skin_tone_overrides_code_and_icon() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "images/noto/thumbs_up_medium_light.png");
        let prefs = Preferences {
            emoji_style: IconStyle::Noto,
            skin_tone: SkinTone::MediumLight,
            ..Preferences::default()
        };
        let search = engine(prefs, dir.path());

        let results = search.query(Some("thumbs up"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Thumbs up | 👍🏼");
        assert_eq!(results[0].on_enter.clipboard_text(), Some("👍🏼"));
        assert_eq!(
            results[0].icon.as_deref(),
            Some("images/noto/thumbs_up_medium_light.png")
        );
    }

    #[test]
    fn test_tone_icon_falls_back_to_fallback_style() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences {
            skin_tone: SkinTone::Dark,
            ..Preferences::default()
        };
        let search = engine(prefs, dir.path());

        let results = search.query(Some("waving"));
        assert_eq!(
            results[0].icon.as_deref(),
            Some("images/twemoji/waving_hand_dark.png")
        );
    }

    #[test]
    fn test_untoned_emoji_keeps_base_with_tone_selected() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "images/apple/fox.png");
        let prefs = Preferences {
            skin_tone: SkinTone::Dark,
            ..Preferences::default()
        };
        let search = engine(prefs, dir.path());

        let results = search.query(Some("fox"));
        assert_eq!(results[0].on_enter.clipboard_text(), Some("🦊"));
        assert_eq!(results[0].icon.as_deref(), Some("images/apple/fox.png"));
    }

    #[test]
    fn test_percent_only_matches_everything() {
        let dir = tempfile::tempdir().unwrap();
        let search = engine(Preferences::default(), dir.path());

        let results = search.query(Some("%"));
        assert_eq!(results.len(), 8);
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_term() {
        let dir = tempfile::tempdir().unwrap();
        let search = engine(Preferences::default(), dir.path());

        assert!(search.query(Some(" rocket")).is_empty());

        assert_eq!(search.query(Some("boo")).len(), 2);
        assert!(search.query(Some("boo ")).is_empty());
    }

    #[test]
    fn test_underscore_matches_any_character() {
        let dir = tempfile::tempdir().unwrap();
        let search = engine(Preferences::default(), dir.path());

        let results = search.query(Some("r_cket"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Rocket | 🚀");
    }

    #[test]
    fn test_lookup_failure_yields_no_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.sqlite");
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE unrelated (x TEXT);").unwrap();
        drop(conn);

        let store = EmojiStore::open(&path).unwrap();
        let search = EmojiSearch::new(store, Preferences::default(), dir.path());

        assert!(search.query(Some("fox")).is_empty());
    }

    #[test]
    fn test_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let search = engine(Preferences::default(), dir.path());

        assert!(search.query(Some("zzzzqqq")).is_empty());
    }
}
