use egui::{Key, KeyboardShortcut, Modifiers};

/// Canvas-wide actions, callable at any time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Undo,
    Redo,
    Clear,
    Export,
}

impl Command {
    /// Button order in the actions row
    pub const ALL: [Command; 4] = [Command::Clear, Command::Undo, Command::Redo, Command::Export];

    pub fn label(self) -> &'static str {
        match self {
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear => "Clear",
            Command::Export => "Export",
        }
    }

    /// Keyboard shortcuts, most specific first so Ctrl+Shift+Z is not eaten
    /// by Ctrl+Z
    pub fn shortcuts() -> [(KeyboardShortcut, Command); 3] {
        [
            (
                KeyboardShortcut::new(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z),
                Command::Redo,
            ),
            (KeyboardShortcut::new(Modifiers::COMMAND, Key::Y), Command::Redo),
            (KeyboardShortcut::new(Modifiers::COMMAND, Key::Z), Command::Undo),
        ]
    }

    /// Consume any pressed shortcut from this frame's input
    pub fn from_shortcuts(ctx: &egui::Context) -> Vec<Command> {
        ctx.input_mut(|input| {
            Self::shortcuts()
                .into_iter()
                .filter(|(shortcut, _)| input.consume_shortcut(shortcut))
                .map(|(_, command)| command)
                .collect()
        })
    }
}
