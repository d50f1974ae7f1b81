use thiserror::Error;

/// Longest custom sticker accepted, in chars
pub const MAX_STICKER_CHARS: usize = 16;

/// Stickers offered as buttons: (symbol, name)
pub const PRESET_STICKERS: [(&str, &str); 3] = [
    ("🍭", "Candy"),
    ("🗻", "Mountain"),
    ("✏", "Pencil"),
];

/// Emoji presentation selectors; the bundled fonts have no glyph for them
const VARIATION_SELECTORS: [char; 2] = ['\u{FE0E}', '\u{FE0F}'];

/// Suggested text of the custom sticker dialog
pub const DEFAULT_CUSTOM_STICKER: &str = "😀";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StickerError {
    #[error("sticker text is empty")]
    Empty,

    #[error("sticker text contains control characters")]
    Malformed,

    #[error("sticker text is {len} chars long (max {max})")]
    TooLong { len: usize, max: usize },
}

/// A validated, non-empty glyph string
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sticker {
    symbol: String,
}

impl Sticker {
    /// Parse user supplied sticker text. Surrounding whitespace and
    /// variation selectors are dropped.
    pub fn parse(text: &str) -> Result<Self, StickerError> {
        let symbol: String = text
            .trim()
            .chars()
            .filter(|c| !VARIATION_SELECTORS.contains(c))
            .collect();
        if symbol.is_empty() {
            return Err(StickerError::Empty);
        }
        if symbol.chars().any(char::is_control) {
            return Err(StickerError::Malformed);
        }
        let len = symbol.chars().count();
        if len > MAX_STICKER_CHARS {
            return Err(StickerError::TooLong {
                len,
                max: MAX_STICKER_CHARS,
            });
        }
        Ok(Self { symbol })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_parse() {
        for (symbol, _) in PRESET_STICKERS {
            assert_eq!(Sticker::parse(symbol).unwrap().symbol(), symbol);
        }
    }

    #[test]
    fn test_parse_trims() {
        assert_eq!(Sticker::parse("  ⭐ ").unwrap().symbol(), "⭐");
    }

    #[test]
    fn test_parse_drops_variation_selectors() {
        assert_eq!(Sticker::parse("⛰️").unwrap().symbol(), "⛰");
        assert_eq!(Sticker::parse("✏\u{FE0E}").unwrap().symbol(), "✏");
        assert_eq!(Sticker::parse("\u{FE0F}"), Err(StickerError::Empty));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Sticker::parse(""), Err(StickerError::Empty));
        assert_eq!(Sticker::parse("   "), Err(StickerError::Empty));
        assert_eq!(Sticker::parse("a\u{7}b"), Err(StickerError::Malformed));
        assert_eq!(
            Sticker::parse(&"x".repeat(17)),
            Err(StickerError::TooLong { len: 17, max: 16 })
        );
    }
}
