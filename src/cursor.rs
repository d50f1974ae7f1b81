use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Vec2};

use crate::element::CURSOR_GLYPH_SCALE;
use crate::tool::{ToolMode, ToolState};

/// What to show under the pointer while hovering the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum CursorPreview {
    /// Filled square the size of the marker tip
    Marker { rect: Rect },
    /// The selected sticker glyph
    Sticker { symbol: String, center: Pos2, font_size: f32 },
}

impl CursorPreview {
    pub fn new(tools: &ToolState, hover: Pos2) -> Self {
        let thickness = tools.thickness() as f32;
        match tools.mode() {
            ToolMode::Marker => CursorPreview::Marker {
                rect: Rect::from_center_size(hover, Vec2::splat(thickness)),
            },
            ToolMode::Sticker(sticker) => CursorPreview::Sticker {
                symbol: sticker.symbol().to_owned(),
                center: hover,
                font_size: thickness * CURSOR_GLYPH_SCALE,
            },
        }
    }

    pub fn paint(&self, painter: &Painter) {
        match self {
            CursorPreview::Marker { rect } => {
                painter.rect_filled(*rect, 0.0, Color32::BLACK);
            }
            CursorPreview::Sticker {
                symbol,
                center,
                font_size,
            } => {
                painter.text(
                    *center,
                    Align2::CENTER_CENTER,
                    symbol,
                    FontId::proportional(*font_size),
                    Color32::BLACK,
                );
            }
        }
    }
}
