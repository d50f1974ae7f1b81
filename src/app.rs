use std::sync::Arc;

use crate::command::Command;
use crate::cursor::CursorPreview;
use crate::error::SketchpadError;
use crate::export;
use crate::history::HistoryManager;
use crate::input::InputController;
use crate::panels::tools_panel;
use crate::renderer::{CANVAS_SIZE, Renderer};
use crate::tool::{DEFAULT_CUSTOM_STICKER, ToolState};

pub const APP_NAME: &str = "Le Sketchpad";

pub struct SketchpadApp {
    history: HistoryManager,
    renderer: Renderer,
    tools: ToolState,
    input: InputController,
    // Custom sticker dialog
    show_sticker_modal: bool,
    sticker_text: String,
    // Waiting for the screenshot requested by an export
    export_pending: bool,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        let mut history = HistoryManager::new();
        let renderer = Renderer::new();
        renderer.attach(&mut history);

        Self {
            history,
            renderer,
            tools: ToolState::new(),
            input: InputController::new(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::Vec2::splat(CANVAS_SIZE),
            )),
            show_sticker_modal: false,
            sticker_text: DEFAULT_CUSTOM_STICKER.to_owned(),
            export_pending: false,
        }
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, SketchpadError> {
        if cc.gl.is_none() {
            return Err(SketchpadError::MissingRenderContext);
        }
        Ok(Self::default())
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolState {
        &mut self.tools
    }

    pub fn is_sticker_modal_open(&self) -> bool {
        self.show_sticker_modal
    }

    pub fn is_export_pending(&self) -> bool {
        self.export_pending
    }

    /// Export grabs the screen, so nothing may be drawn over the canvas
    pub fn can_export(&self) -> bool {
        !self.show_sticker_modal && !self.export_pending
    }

    pub fn open_sticker_modal(&mut self) {
        self.sticker_text = DEFAULT_CUSTOM_STICKER.to_owned();
        self.show_sticker_modal = true;
    }

    pub fn execute_command(&mut self, ctx: &egui::Context, command: Command) {
        log::info!("Command: {}", command.label());
        match command {
            Command::Undo => {
                self.history.undo();
            }
            Command::Redo => {
                self.history.redo();
            }
            Command::Clear => self.history.clear(),
            Command::Export => {
                if !self.can_export() {
                    log::warn!("Export skipped while the canvas is covered or busy");
                    return;
                }
                // The snapshot arrives as an input event on a later frame
                self.export_pending = true;
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
            }
        }
    }

    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if !self.export_pending {
            return;
        }
        let screenshot = ctx.input(|input| {
            input.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(Arc::clone(image)),
                _ => None,
            })
        });
        let Some(screenshot) = screenshot else {
            return;
        };
        self.export_pending = false;

        let canvas = screenshot.region(&self.input.canvas_rect(), Some(ctx.pixels_per_point()));
        let result = export::export_snapshot(&canvas)
            .and_then(|bytes| export::save_png(&bytes, export::EXPORT_FILENAME));
        if let Err(err) = result {
            log::error!("Export failed: {err}");
        }
    }

    fn sticker_modal(&mut self, ctx: &egui::Context) {
        if !self.show_sticker_modal || self.export_pending {
            return;
        }
        egui::Window::new("Custom Sticker")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Enter your custom emoji:");
                let response = ui.text_edit_singleline(&mut self.sticker_text);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || submitted {
                        if let Err(err) = self.tools.set_sticker_symbol(&self.sticker_text) {
                            log::warn!("Ignoring custom sticker {:?}: {err}", self.sticker_text);
                        }
                        self.show_sticker_modal = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.show_sticker_modal = false;
                    }
                });
            });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(
            egui::Vec2::splat(CANVAS_SIZE),
            egui::Sense::click_and_drag(),
        );
        let rect = response.rect;
        self.input.set_canvas_rect(rect);

        if !self.show_sticker_modal {
            let events = self.input.process_input(ui.ctx());
            self.input.handle_events(&events, &self.tools, &mut self.history);
        }

        self.renderer.paint(&painter, rect);

        if let Some(hover) = response.hover_pos().filter(|_| !self.export_pending) {
            CursorPreview::new(&self.tools, hover).paint(&painter.with_clip_rect(rect));
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_screenshot(ctx);

        if !self.show_sticker_modal {
            for command in Command::from_shortcuts(ctx) {
                self.execute_command(ctx, command);
            }
        }

        tools_panel(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_NAME);
            self.canvas(ui);
        });

        self.sticker_modal(ctx);
    }
}
