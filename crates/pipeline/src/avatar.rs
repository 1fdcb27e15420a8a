//! Player avatar lookup from community profile documents.

use regex::Regex;
use std::sync::LazyLock;

static AVATAR_FULL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<avatarFull><!\[CDATA\[(.*?)\]\]></avatarFull>").expect("avatar pattern is valid")
});

/// Extract the full-size avatar URL from a profile XML document.
pub fn extract_avatar_url(profile: &str) -> Option<String> {
    let url = AVATAR_FULL.captures(profile)?.get(1)?.as_str().trim();
    (!url.is_empty()).then(|| url.to_string())
}
