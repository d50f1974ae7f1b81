mod common;
mod stamp;
mod stroke;

pub use common::{CURSOR_GLYPH_SCALE, Point, STAMP_GLYPH_SCALE};
pub use stamp::Stamp;
pub use stroke::Stroke;

use crate::surface::Surface;

/// Anything that can sit in the drawing history
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Stamp(Stamp),
}

impl Drawable {
    /// Draw the item onto `surface` using its own stored style.
    ///
    /// Never mutates the item and never fails; a stroke that has not yet
    /// left its first point draws nothing.
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Stroke(s) => s.render(surface),
            Drawable::Stamp(s) => s.render(surface),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(s) => Some(s),
            Drawable::Stamp(_) => None,
        }
    }

    pub fn as_stamp(&self) -> Option<&Stamp> {
        match self {
            Drawable::Stamp(s) => Some(s),
            Drawable::Stroke(_) => None,
        }
    }
}
