//! Icon path selection with style fallback.

use std::path::Path;

use crate::store::{IconSet, IconStyle};

/// Pick the preferred style's icon if its file exists under `assets_dir`,
/// otherwise the fallback style's path. The fallback is not checked.
pub fn resolve(
    assets_dir: &Path,
    icons: &IconSet,
    preferred: IconStyle,
    fallback: IconStyle,
) -> Option<String> {
    match icons.get(preferred) {
        Some(path) if assets_dir.join(path).exists() => Some(path.to_string()),
        _ => icons.get(fallback).map(str::to_string),
    }
}

/// Icon of the "type a name" placeholder item.
pub fn search_icon(assets_dir: &Path, preferred: IconStyle, fallback: IconStyle) -> String {
    let preferred_path = format!("images/{}/icon.png", preferred);
    if assets_dir.join(&preferred_path).exists() {
        preferred_path
    } else {
        format!("images/{}/icon.png", fallback)
    }
}
