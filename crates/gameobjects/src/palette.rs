//! Named color registry.
//!
//! The registry is built on first access and never mutated afterwards, so
//! lookups need no synchronisation.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::color::Color;

static ENTRIES: [(&str, Color); 11] = [
    ("black", Color::BLACK),
    ("blue", Color::BLUE),
    ("green", Color::GREEN),
    ("cyan", Color::CYAN),
    ("red", Color::RED),
    ("magenta", Color::MAGENTA),
    ("yellow", Color::YELLOW),
    ("white", Color::WHITE),
    ("grey25", Color::GREY25),
    ("grey50", Color::GREY50),
    ("grey75", Color::GREY75),
];

static PALETTE: LazyLock<HashMap<&'static str, Color>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Looks up a predefined color by name, case-insensitively.
#[must_use]
pub fn lookup(name: &str) -> Option<Color> {
    PALETTE.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Names of every predefined color, in declaration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("red"), Some(Color::RED));
        assert_eq!(lookup("Grey50"), Some(Color::new(0.5, 0.5, 0.5)));
        assert_eq!(lookup("chartreuse"), None);
    }

    #[test]
    fn test_every_name_resolves() {
        assert_eq!(names().count(), 11);
        for name in names() {
            assert!(lookup(name).is_some(), "{name}");
        }
    }
}
