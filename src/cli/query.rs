//! `nova-emoji query` - run one search and print the items.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;

use crate::config::{
    Config, PREF_DISPLAY_CHAR, PREF_EMOJI_STYLE, PREF_FALLBACK_STYLE, PREF_SKIN_TONE,
};
use crate::core::{EmojiSearch, ResultItem};
use crate::store::EmojiStore;

pub struct QueryArgs {
    pub text: String,
    pub json: bool,
    pub style: Option<String>,
    pub fallback_style: Option<String>,
    pub skin_tone: Option<String>,
    pub no_char: bool,
    pub database: Option<PathBuf>,
    pub assets: Option<PathBuf>,
}

impl QueryArgs {
    /// Command-line overrides in the host's preference format.
    fn host_values(&self) -> HashMap<String, String> {
        let mut values = HashMap::new();
        let mut set = |key: &str, value: Option<&String>| {
            if let Some(value) = value {
                values.insert(key.to_string(), value.clone());
            }
        };
        set(PREF_EMOJI_STYLE, self.style.as_ref());
        set(PREF_FALLBACK_STYLE, self.fallback_style.as_ref());
        set(PREF_SKIN_TONE, self.skin_tone.as_ref());
        if self.no_char {
            values.insert(PREF_DISPLAY_CHAR.to_string(), "no".to_string());
        }
        values
    }
}

pub fn run_query(config: &Config, args: QueryArgs) -> anyhow::Result<()> {
    let mut prefs = config.preferences.clone();
    prefs.apply_host(&args.host_values());

    let database = args.database.clone().or_else(|| config.data.database_path());
    let store = EmojiStore::open_or_builtin(database.as_deref())
        .context("Failed to open emoji database")?;
    let assets = args
        .assets
        .clone()
        .unwrap_or_else(|| config.data.assets_path());

    let search = EmojiSearch::new(store, prefs, assets);
    let items = search.query(Some(args.text.as_str()));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            println!("{}", render_line(item));
        }
    }

    Ok(())
}

fn render_line(item: &ResultItem) -> String {
    match &item.icon {
        Some(icon) => format!("{}\t{}", item.name, icon),
        None => item.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> QueryArgs {
        QueryArgs {
            text: "hand".to_string(),
            json: false,
            style: None,
            fallback_style: None,
            skin_tone: None,
            no_char: false,
            database: None,
            assets: None,
        }
    }

    #[test]
    fn test_host_values_only_contains_overrides() {
        assert!(args().host_values().is_empty());

        let values = QueryArgs {
            style: Some("noto".to_string()),
            no_char: true,
            ..args()
        }
        .host_values();
        assert_eq!(values.get(PREF_EMOJI_STYLE).map(String::as_str), Some("noto"));
        assert_eq!(values.get(PREF_DISPLAY_CHAR).map(String::as_str), Some("no"));
        assert!(!values.contains_key(PREF_SKIN_TONE));
    }

    #[test]
    fn test_render_line() {
        let item = ResultItem {
            icon: Some("images/apple/fox.png".to_string()),
            name: "Fox | 🦊".to_string(),
            on_enter: crate::executor::ExecutionAction::DoNothing,
        };
        assert_eq!(render_line(&item), "Fox | 🦊\timages/apple/fox.png");
    }
}
