use egui::Pos2;

/// Canvas-local coordinate of a recorded pointer sample.
pub type Point = Pos2;

/// Stamps draw their glyph at `size * STAMP_GLYPH_SCALE` points so a sticker
/// dwarfs a marker stroke of the same thickness value.
pub const STAMP_GLYPH_SCALE: f32 = 8.0;

/// Glyph scale used for the hover preview of the sticker tool.
pub const CURSOR_GLYPH_SCALE: f32 = 4.0;
