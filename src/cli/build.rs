//! `nova-emoji build-db` - write a database from JSON records or the
//! built-in dataset.

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::error::EmojiResult;
use crate::store::{builtin, EmojiRecord, EmojiStore};

pub fn run_build(output: &Path, from: Option<&Path>) -> anyhow::Result<()> {
    let records = match from {
        Some(path) => load_records(path)
            .with_context(|| format!("Failed to read records from {}", path.display()))?,
        None => builtin::RECORDS.to_vec(),
    };

    EmojiStore::create(output, &records)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Wrote {} emoji to {}", records.len(), output.display());
    Ok(())
}

/// Read a JSON array of [`EmojiRecord`]s.
pub fn load_records(path: &Path) -> EmojiResult<Vec<EmojiRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SkinTone;

    #[test]
    fn test_load_records_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        fs::write(
            &path,
            r#"[
  {
    "name": "waving hand",
    "code": "👋",
    "keywords": ["hello"],
    "icons": { "apple": "images/apple/wave.png" },
    "skin_tones": [
      { "tone": "medium-dark", "code": "👋🏾" }
    ]
  },
  { "name": "rocket", "code": "🚀" }
]"#,
        )
        .unwrap();

        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].icons.apple.as_deref(), Some("images/apple/wave.png"));
        assert_eq!(records[0].icons.noto, None);
        assert_eq!(records[0].skin_tones[0].tone, SkinTone::MediumDark);
        assert!(records[1].keywords.is_empty());
    }

    #[test]
    fn test_build_from_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("emoji.sqlite");

        run_build(&output, None).unwrap();

        let store = EmojiStore::open(&output).unwrap();
        assert_eq!(store.count().unwrap(), builtin::BUILTIN.len());
    }

    #[test]
    fn test_build_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("records.json");
        fs::write(&input, "{ not json").unwrap();

        assert!(run_build(&dir.path().join("emoji.sqlite"), Some(&input)).is_err());
    }
}
