//! nova-emoji - emoji search extension for the Nova launcher.
//!
//! Given a partial name typed after the extension keyword, looks up matching
//! emoji in a read-only dataset and returns a short list of items with an
//! icon, a label and the text to copy.
//!
//! # Architecture
//!
//! - [`store`] - SQLite-backed dataset (bundled file or built-in table)
//! - [`config`] - Host preferences and the extension's config file
//! - [`core`] - Query handling, label formatting, icon fallback
//! - [`executor`] - Actions the host performs on activation
//! - [`cli`] - Command-line entry points
//!
//! # Example
//!
//! ```no_run
//! use nova_emoji::{EmojiSearch, EmojiStore, Preferences};
//!
//! let store = EmojiStore::builtin().expect("built-in dataset");
//! let search = EmojiSearch::new(store, Preferences::default(), "/usr/share/nova-emoji");
//! for item in search.query(Some("thumbs")) {
//!     println!("{}", item.name);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod executor;
pub mod store;

mod error;

pub use crate::core::search::{EmojiSearch, ResultItem};
pub use config::{Config, Preferences};
pub use error::{EmojiError, EmojiResult};
pub use executor::ExecutionAction;
pub use store::{EmojiStore, IconStyle, SkinTone};
