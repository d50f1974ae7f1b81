use egui::{Context, PointerButton, Pos2, Rect};

use crate::history::HistoryManager;
use crate::tool::{ToolMode, ToolState};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in canvas-local coordinates
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer gesture protocol, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Pointer moved, with or without the button held
    PointerMove { location: InputLocation },
    /// Primary button was released anywhere in the window
    PointerUp,
}

/// Turns pointer input into history operations, parametrized by the tool
/// state read at gesture start.
#[derive(Debug, Clone)]
pub struct InputController {
    canvas_rect: Rect,
}

impl InputController {
    pub fn new(canvas_rect: Rect) -> Self {
        Self { canvas_rect }
    }

    /// Update the canvas rectangle (e.g. if the window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Creates an InputLocation from a screen position
    pub fn make_location(&self, screen_pos: Pos2) -> InputLocation {
        InputLocation {
            position: (screen_pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(screen_pos),
        }
    }

    /// Collect this frame's primary-button pointer events from egui
    pub fn process_input(&self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| {
            input
                .raw
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMove {
                        location: self.make_location(*pos),
                    }),
                    egui::Event::PointerButton {
                        pos,
                        button: PointerButton::Primary,
                        pressed: true,
                        ..
                    } => Some(InputEvent::PointerDown {
                        location: self.make_location(*pos),
                    }),
                    egui::Event::PointerButton {
                        button: PointerButton::Primary,
                        pressed: false,
                        ..
                    } => Some(InputEvent::PointerUp),
                    _ => None,
                })
                .collect()
        })
    }

    /// Apply one event to the history
    pub fn handle_event(&self, event: &InputEvent, tools: &ToolState, history: &mut HistoryManager) {
        match event {
            InputEvent::PointerDown { location } => {
                if !location.is_in_canvas {
                    return;
                }
                match tools.mode() {
                    ToolMode::Marker => {
                        history.begin_stroke(location.position, tools.thickness(), tools.color());
                    }
                    ToolMode::Sticker(sticker) => {
                        history.begin_stamp(location.position, sticker.symbol(), tools.stamp_size());
                    }
                }
            }
            InputEvent::PointerMove { location } => {
                if location.is_in_canvas && history.is_gesture_active() {
                    history.extend_active_stroke(location.position);
                }
            }
            InputEvent::PointerUp => history.end_gesture(),
        }
    }

    pub fn handle_events(
        &self,
        events: &[InputEvent],
        tools: &ToolState,
        history: &mut HistoryManager,
    ) {
        for event in events {
            self.handle_event(event, tools, history);
        }
    }
}
