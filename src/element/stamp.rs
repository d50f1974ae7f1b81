use super::common::{Point, STAMP_GLYPH_SCALE};
use crate::surface::Surface;

/// A sticker glyph placed once at a single position
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    symbol: String,
    position: Point,
    size: f32,
}

impl Stamp {
    pub fn new(symbol: impl Into<String>, position: Point, size: f32) -> Self {
        Self {
            symbol: symbol.into(),
            position,
            size,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Tool thickness at placement time
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Font size the glyph is drawn at
    pub fn glyph_size(&self) -> f32 {
        self.size * STAMP_GLYPH_SCALE
    }

    pub(crate) fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(&self.symbol, self.position, self.glyph_size());
    }
}
