//! Emoji dataset embedded in the binary.
//!
//! Used when no database file is configured. Icon paths follow the layout of
//! the packaged asset tree: `images/<style>/<slug>.png` for the base emoji
//! and `images/<style>/<slug>_<tone>.png` for skin tone variants.

use once_cell::sync::Lazy;

use super::types::{EmojiRecord, IconSet, SkinTone, SkinToneRecord};

/// A built-in emoji entry
#[derive(Debug, Clone)]
pub struct BuiltinEmoji {
    pub name: &'static str,
    pub code: &'static str,
    pub keywords: &'static [&'static str],
    /// Whether Fitzpatrick modifiers apply
    pub toned: bool,
}

impl BuiltinEmoji {
    /// File stem shared by all icon styles
    pub fn slug(&self) -> String {
        self.name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect()
    }

    fn to_record(&self) -> EmojiRecord {
        let slug = self.slug();
        let skin_tones = if self.toned {
            SkinTone::ALL
                .into_iter()
                .filter_map(|tone| {
                    let modifier = tone.modifier()?;
                    Some(SkinToneRecord {
                        tone,
                        code: with_modifier(self.code, modifier),
                        icons: IconSet::conventional(&format!(
                            "{}_{}",
                            slug,
                            tone.as_str().replace('-', "_")
                        )),
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        EmojiRecord {
            name: self.name.to_string(),
            code: self.code.to_string(),
            keywords: self.keywords.iter().map(|k| k.to_string()).collect(),
            icons: IconSet::conventional(&slug),
            skin_tones,
        }
    }
}

/// Insert a skin tone modifier after the base character. A variation
/// selector on the base is dropped since the modifier already forces
/// emoji presentation.
fn with_modifier(code: &str, modifier: char) -> String {
    let mut chars = code.chars().filter(|c| *c != '\u{FE0F}');
    let mut out = String::with_capacity(code.len() + 4);
    if let Some(first) = chars.next() {
        out.push(first);
    }
    out.push(modifier);
    out.extend(chars);
    out
}

/// Built-in dataset as importable records.
pub static RECORDS: Lazy<Vec<EmojiRecord>> =
    Lazy::new(|| BUILTIN.iter().map(BuiltinEmoji::to_record).collect());

/// Common emoji with CLDR short names
pub static BUILTIN: &[BuiltinEmoji] = &[
    // Smileys & Emotion
    BuiltinEmoji {
        name: "grinning face",
        code: "😀",
        keywords: &["smile", "happy"],
        toned: false,
    },
    BuiltinEmoji {
        name: "grinning face with big eyes",
        code: "😃",
        keywords: &["smiley", "happy", "joy"],
        toned: false,
    },
    BuiltinEmoji {
        name: "grinning face with smiling eyes",
        code: "😄",
        keywords: &["smile", "happy", "joy"],
        toned: false,
    },
    BuiltinEmoji {
        name: "beaming face with smiling eyes",
        code: "😁",
        keywords: &["grin", "happy"],
        toned: false,
    },
    BuiltinEmoji {
        name: "grinning face with sweat",
        code: "😅",
        keywords: &["nervous", "relief"],
        toned: false,
    },
    BuiltinEmoji {
        name: "face with tears of joy",
        code: "😂",
        keywords: &["laugh", "crying", "lol"],
        toned: false,
    },
    BuiltinEmoji {
        name: "rolling on the floor laughing",
        code: "🤣",
        keywords: &["rofl", "laugh"],
        toned: false,
    },
    BuiltinEmoji {
        name: "smiling face with smiling eyes",
        code: "😊",
        keywords: &["blush", "happy"],
        toned: false,
    },
    BuiltinEmoji {
        name: "smiling face with halo",
        code: "😇",
        keywords: &["angel", "innocent"],
        toned: false,
    },
    BuiltinEmoji {
        name: "slightly smiling face",
        code: "🙂",
        keywords: &["smile"],
        toned: false,
    },
    BuiltinEmoji {
        name: "winking face",
        code: "😉",
        keywords: &["wink", "flirt"],
        toned: false,
    },
    BuiltinEmoji {
        name: "smiling face with heart-eyes",
        code: "😍",
        keywords: &["love", "crush"],
        toned: false,
    },
    BuiltinEmoji {
        name: "face blowing a kiss",
        code: "😘",
        keywords: &["kiss", "love"],
        toned: false,
    },
    BuiltinEmoji {
        name: "smiling face with sunglasses",
        code: "😎",
        keywords: &["cool", "sun"],
        toned: false,
    },
    BuiltinEmoji {
        name: "nerd face",
        code: "🤓",
        keywords: &["geek", "glasses"],
        toned: false,
    },
    BuiltinEmoji {
        name: "thinking face",
        code: "🤔",
        keywords: &["hmm", "think"],
        toned: false,
    },
    BuiltinEmoji {
        name: "neutral face",
        code: "😐",
        keywords: &["meh", "blank"],
        toned: false,
    },
    BuiltinEmoji {
        name: "face with rolling eyes",
        code: "🙄",
        keywords: &["eyeroll", "whatever"],
        toned: false,
    },
    BuiltinEmoji {
        name: "sleeping face",
        code: "😴",
        keywords: &["sleep", "zzz", "tired"],
        toned: false,
    },
    BuiltinEmoji {
        name: "crying face",
        code: "😢",
        keywords: &["sad", "tear"],
        toned: false,
    },
    BuiltinEmoji {
        name: "loudly crying face",
        code: "😭",
        keywords: &["sob", "sad", "tears"],
        toned: false,
    },
    BuiltinEmoji {
        name: "pouting face",
        code: "😡",
        keywords: &["angry", "mad", "rage"],
        toned: false,
    },
    BuiltinEmoji {
        name: "face screaming in fear",
        code: "😱",
        keywords: &["scream", "scared", "shock"],
        toned: false,
    },
    BuiltinEmoji {
        name: "partying face",
        code: "🥳",
        keywords: &["party", "celebrate", "birthday"],
        toned: false,
    },
    BuiltinEmoji {
        name: "pile of poo",
        code: "💩",
        keywords: &["poop", "shit"],
        toned: false,
    },
    BuiltinEmoji {
        name: "ghost",
        code: "👻",
        keywords: &["halloween", "boo"],
        toned: false,
    },
    BuiltinEmoji {
        name: "skull",
        code: "💀",
        keywords: &["dead", "death"],
        toned: false,
    },
    BuiltinEmoji {
        name: "robot",
        code: "🤖",
        keywords: &["bot", "machine"],
        toned: false,
    },
    // Hearts
    BuiltinEmoji {
        name: "red heart",
        code: "❤️",
        keywords: &["love", "heart"],
        toned: false,
    },
    BuiltinEmoji {
        name: "purple heart",
        code: "💜",
        keywords: &["love", "heart"],
        toned: false,
    },
    BuiltinEmoji {
        name: "broken heart",
        code: "💔",
        keywords: &["sad", "heartbreak"],
        toned: false,
    },
    BuiltinEmoji {
        name: "sparkling heart",
        code: "💖",
        keywords: &["love", "sparkle"],
        toned: false,
    },
    // People & Body
    BuiltinEmoji {
        name: "waving hand",
        code: "👋",
        keywords: &["wave", "hello", "bye"],
        toned: true,
    },
    BuiltinEmoji {
        name: "raised hand",
        code: "✋",
        keywords: &["stop", "high five"],
        toned: true,
    },
    BuiltinEmoji {
        name: "ok hand",
        code: "👌",
        keywords: &["okay", "perfect"],
        toned: true,
    },
    BuiltinEmoji {
        name: "victory hand",
        code: "✌️",
        keywords: &["peace", "v"],
        toned: true,
    },
    BuiltinEmoji {
        name: "crossed fingers",
        code: "🤞",
        keywords: &["luck", "hope"],
        toned: true,
    },
    BuiltinEmoji {
        name: "thumbs up",
        code: "👍",
        keywords: &["like", "yes", "approve", "+1"],
        toned: true,
    },
    BuiltinEmoji {
        name: "thumbs down",
        code: "👎",
        keywords: &["dislike", "no", "-1"],
        toned: true,
    },
    BuiltinEmoji {
        name: "clapping hands",
        code: "👏",
        keywords: &["clap", "applause", "bravo"],
        toned: true,
    },
    BuiltinEmoji {
        name: "raising hands",
        code: "🙌",
        keywords: &["hooray", "celebrate"],
        toned: true,
    },
    BuiltinEmoji {
        name: "folded hands",
        code: "🙏",
        keywords: &["pray", "please", "thanks"],
        toned: true,
    },
    BuiltinEmoji {
        name: "flexed biceps",
        code: "💪",
        keywords: &["strong", "muscle", "flex"],
        toned: true,
    },
    BuiltinEmoji {
        name: "backhand index pointing right",
        code: "👉",
        keywords: &["point", "right"],
        toned: true,
    },
    BuiltinEmoji {
        name: "index pointing up",
        code: "☝️",
        keywords: &["point", "up"],
        toned: true,
    },
    BuiltinEmoji {
        name: "person shrugging",
        code: "🤷",
        keywords: &["shrug", "dunno", "whatever"],
        toned: true,
    },
    BuiltinEmoji {
        name: "person facepalming",
        code: "🤦",
        keywords: &["facepalm", "disbelief"],
        toned: true,
    },
    BuiltinEmoji {
        name: "baby",
        code: "👶",
        keywords: &["child", "newborn"],
        toned: true,
    },
    BuiltinEmoji {
        name: "eyes",
        code: "👀",
        keywords: &["look", "see", "watch"],
        toned: false,
    },
    // Animals & Nature
    BuiltinEmoji {
        name: "dog face",
        code: "🐶",
        keywords: &["dog", "puppy", "pet"],
        toned: false,
    },
    BuiltinEmoji {
        name: "cat face",
        code: "🐱",
        keywords: &["cat", "kitten", "pet"],
        toned: false,
    },
    BuiltinEmoji {
        name: "fox",
        code: "🦊",
        keywords: &["animal"],
        toned: false,
    },
    BuiltinEmoji {
        name: "unicorn",
        code: "🦄",
        keywords: &["magic", "fantasy"],
        toned: false,
    },
    BuiltinEmoji {
        name: "crab",
        code: "🦀",
        keywords: &["rust", "ferris", "cancer"],
        toned: false,
    },
    BuiltinEmoji {
        name: "snake",
        code: "🐍",
        keywords: &["python", "serpent"],
        toned: false,
    },
    BuiltinEmoji {
        name: "sunflower",
        code: "🌻",
        keywords: &["flower", "summer"],
        toned: false,
    },
    BuiltinEmoji {
        name: "evergreen tree",
        code: "🌲",
        keywords: &["tree", "forest", "pine"],
        toned: false,
    },
    // Food & Drink
    BuiltinEmoji {
        name: "red apple",
        code: "🍎",
        keywords: &["fruit", "apple"],
        toned: false,
    },
    BuiltinEmoji {
        name: "pizza",
        code: "🍕",
        keywords: &["food", "slice"],
        toned: false,
    },
    BuiltinEmoji {
        name: "hot beverage",
        code: "☕",
        keywords: &["coffee", "tea", "drink"],
        toned: false,
    },
    BuiltinEmoji {
        name: "beer mug",
        code: "🍺",
        keywords: &["beer", "drink", "pub"],
        toned: false,
    },
    BuiltinEmoji {
        name: "birthday cake",
        code: "🎂",
        keywords: &["cake", "birthday", "party"],
        toned: false,
    },
    // Travel & Places
    BuiltinEmoji {
        name: "rocket",
        code: "🚀",
        keywords: &["launch", "space", "ship"],
        toned: false,
    },
    BuiltinEmoji {
        name: "house",
        code: "🏠",
        keywords: &["home", "building"],
        toned: false,
    },
    BuiltinEmoji {
        name: "globe showing europe-africa",
        code: "🌍",
        keywords: &["earth", "world"],
        toned: false,
    },
    BuiltinEmoji {
        name: "sun",
        code: "☀️",
        keywords: &["sunny", "weather"],
        toned: false,
    },
    BuiltinEmoji {
        name: "rainbow",
        code: "🌈",
        keywords: &["weather", "pride"],
        toned: false,
    },
    BuiltinEmoji {
        name: "fire",
        code: "🔥",
        keywords: &["flame", "hot", "lit"],
        toned: false,
    },
    BuiltinEmoji {
        name: "high voltage",
        code: "⚡",
        keywords: &["lightning", "zap", "electric"],
        toned: false,
    },
    BuiltinEmoji {
        name: "snowflake",
        code: "❄️",
        keywords: &["cold", "winter", "snow"],
        toned: false,
    },
    // Activities & Objects
    BuiltinEmoji {
        name: "party popper",
        code: "🎉",
        keywords: &["tada", "celebrate", "party"],
        toned: false,
    },
    BuiltinEmoji {
        name: "wrapped gift",
        code: "🎁",
        keywords: &["present", "birthday"],
        toned: false,
    },
    BuiltinEmoji {
        name: "trophy",
        code: "🏆",
        keywords: &["win", "award", "champion"],
        toned: false,
    },
    BuiltinEmoji {
        name: "laptop",
        code: "💻",
        keywords: &["computer", "code"],
        toned: false,
    },
    BuiltinEmoji {
        name: "light bulb",
        code: "💡",
        keywords: &["idea", "bulb"],
        toned: false,
    },
    BuiltinEmoji {
        name: "books",
        code: "📚",
        keywords: &["library", "read", "study"],
        toned: false,
    },
    BuiltinEmoji {
        name: "locked",
        code: "🔒",
        keywords: &["lock", "secure", "private"],
        toned: false,
    },
    BuiltinEmoji {
        name: "hammer and wrench",
        code: "🛠️",
        keywords: &["tools", "build", "fix"],
        toned: false,
    },
    BuiltinEmoji {
        name: "bug",
        code: "🐛",
        keywords: &["insect", "issue"],
        toned: false,
    },
    // Symbols
    BuiltinEmoji {
        name: "check mark button",
        code: "✅",
        keywords: &["done", "yes", "ok"],
        toned: false,
    },
    BuiltinEmoji {
        name: "cross mark",
        code: "❌",
        keywords: &["no", "wrong", "delete"],
        toned: false,
    },
    BuiltinEmoji {
        name: "warning",
        code: "⚠️",
        keywords: &["caution", "alert"],
        toned: false,
    },
    BuiltinEmoji {
        name: "hundred points",
        code: "💯",
        keywords: &["100", "perfect", "score"],
        toned: false,
    },
    BuiltinEmoji {
        name: "sparkles",
        code: "✨",
        keywords: &["shiny", "magic", "new"],
        toned: false,
    },
    BuiltinEmoji {
        name: "star",
        code: "⭐",
        keywords: &["favorite", "gold"],
        toned: false,
    },
];
