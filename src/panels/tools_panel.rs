use crate::SketchpadApp;
use crate::command::Command;
use crate::components::SwatchButton;
use crate::element::Drawable;
use crate::tool::{MarkerColor, PRESET_STICKERS, Sticker, THICKNESS_RANGE};

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Choose Your Marker Color");
            ui.horizontal_wrapped(|ui| {
                let current = app.tools().color();
                for color in MarkerColor::ALL {
                    if SwatchButton::new(color, color == current).show(ui).clicked() {
                        app.tools_mut().set_color(color);
                    }
                }
            });
            ui.separator();

            ui.heading("Adjust Marker Thickness");
            let mut thickness = app.tools().thickness();
            if ui
                .add(egui::Slider::new(&mut thickness, THICKNESS_RANGE).step_by(1.0))
                .changed()
            {
                app.tools_mut().set_thickness(thickness);
            }
            ui.separator();

            ui.heading("Stickers");
            ui.horizontal_wrapped(|ui| {
                if ui.selectable_label(app.tools().is_marker(), "Draw Line").clicked() {
                    app.tools_mut().select_marker();
                }

                for (symbol, name) in PRESET_STICKERS {
                    let selected = app.tools().sticker().map(Sticker::symbol) == Some(symbol);
                    let clicked = ui
                        .selectable_label(selected, symbol)
                        .on_hover_text(name)
                        .clicked();
                    if clicked {
                        match Sticker::parse(symbol) {
                            Ok(sticker) => app.tools_mut().select_sticker(sticker),
                            Err(err) => log::warn!("Preset sticker {name} rejected: {err}"),
                        }
                    }
                }

                if ui.button("Custom Sticker").clicked() {
                    app.open_sticker_modal();
                }
            });
            ui.separator();

            ui.heading("Actions");
            ui.horizontal(|ui| {
                let can_undo = app.history().can_undo();
                let can_redo = app.history().can_redo();
                let can_export = app.can_export();

                for command in Command::ALL {
                    let enabled = match command {
                        Command::Undo => can_undo,
                        Command::Redo => can_redo,
                        Command::Clear => true,
                        Command::Export => can_export,
                    };
                    if ui.add_enabled(enabled, egui::Button::new(command.label())).clicked() {
                        app.execute_command(ctx, command);
                    }
                }
            });

            ui.separator();

            let history = app.history();
            ui.horizontal(|ui| {
                ui.label(format!("History: {}", history.items().len()));
                ui.label(format!("Redo: {}", history.redo_items().len()));
            });

            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("History");
                    ui.strong("Redo");
                    ui.end_row();

                    let items = history.items();
                    let redo_items = history.redo_items();
                    let max_len = items.len().max(redo_items.len());

                    for i in 0..max_len {
                        ui.label(items.get(i).map(describe).unwrap_or_default());
                        ui.label(redo_items.get(i).map(describe).unwrap_or_default());
                        ui.end_row();
                    }
                });
        });
}

fn describe(item: &Drawable) -> String {
    match item {
        Drawable::Stroke(stroke) => format!(
            "{} stroke ({} pts)",
            stroke.color().name(),
            stroke.points().len()
        ),
        Drawable::Stamp(stamp) => format!("stamp {}", stamp.symbol()),
    }
}
