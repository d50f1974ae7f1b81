#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod cursor;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod surface;
pub mod tool;

pub use app::{APP_NAME, SketchpadApp};
pub use command::Command;
pub use element::{Drawable, Point, Stamp, Stroke};
pub use error::SketchpadError;
pub use event::HistoryChange;
pub use history::HistoryManager;
pub use input::{InputController, InputEvent, InputLocation};
pub use renderer::Renderer;
pub use surface::{DisplayList, DrawCommand, Surface};
pub use tool::{MarkerColor, Sticker, ToolMode, ToolState};
