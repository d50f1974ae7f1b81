use std::cell::{Ref, RefCell};
use std::rc::Rc;

use egui::{Color32, Painter, Rect};

use crate::element::Drawable;
use crate::history::HistoryManager;
use crate::surface::{DisplayList, Surface};

/// Side length of the live canvas, in points
pub const CANVAS_SIZE: f32 = 256.0;

pub const BACKGROUND: Color32 = Color32::WHITE;

/// Replays the committed history onto a surface.
///
/// The renderer keeps the result of the last redraw in a display list that
/// it shares with the change observer it registers on a `HistoryManager`, so
/// the frame is rebuilt only when the history changes and merely presented
/// on every egui frame.
#[derive(Debug, Default)]
pub struct Renderer {
    frame: Rc<RefCell<DisplayList>>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full redraw: clear the surface, then render every item in order
    pub fn redraw(surface: &mut dyn Surface, items: &[Drawable]) {
        surface.clear();
        for item in items {
            item.render(surface);
        }
    }

    /// Subscribe to `history` and redraw the cached frame on each change
    pub fn attach(&self, history: &mut HistoryManager) {
        let frame = Rc::clone(&self.frame);
        history.on_change(move |_, items| {
            Self::redraw(&mut *frame.borrow_mut(), items);
        });
        Self::redraw(&mut *self.frame.borrow_mut(), history.items());
    }

    /// The most recent redraw
    pub fn frame(&self) -> Ref<'_, DisplayList> {
        self.frame.borrow()
    }

    /// Paint the canvas background and the cached frame into `rect`
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, BACKGROUND);
        self.frame.borrow().paint(&painter.with_clip_rect(rect), rect.min);
    }
}
