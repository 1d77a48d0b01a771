//! Core engine module - platform-agnostic business logic.
//!
//! - Query handling and result formatting
//! - Icon style and skin tone fallback

pub mod icons;
pub mod search;

pub use search::{EmojiSearch, ResultItem};
