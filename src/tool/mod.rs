mod sticker;

pub use sticker::{
    DEFAULT_CUSTOM_STICKER, MAX_STICKER_CHARS, PRESET_STICKERS, Sticker, StickerError,
};

use egui::Color32;
use std::ops::RangeInclusive;

pub const THICKNESS_RANGE: RangeInclusive<u32> = 1..=10;
pub const DEFAULT_THICKNESS: u32 = 2;

/// Fixed marker palette
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
}

impl MarkerColor {
    pub const ALL: [MarkerColor; 7] = [
        MarkerColor::Black,
        MarkerColor::Red,
        MarkerColor::Blue,
        MarkerColor::Green,
        MarkerColor::Yellow,
        MarkerColor::Orange,
        MarkerColor::Purple,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MarkerColor::Black => "black",
            MarkerColor::Red => "red",
            MarkerColor::Blue => "blue",
            MarkerColor::Green => "green",
            MarkerColor::Yellow => "yellow",
            MarkerColor::Orange => "orange",
            MarkerColor::Purple => "purple",
        }
    }

    /// CSS named-color values
    pub fn color32(self) -> Color32 {
        match self {
            MarkerColor::Black => Color32::from_rgb(0, 0, 0),
            MarkerColor::Red => Color32::from_rgb(255, 0, 0),
            MarkerColor::Blue => Color32::from_rgb(0, 0, 255),
            MarkerColor::Green => Color32::from_rgb(0, 128, 0),
            MarkerColor::Yellow => Color32::from_rgb(255, 255, 0),
            MarkerColor::Orange => Color32::from_rgb(255, 165, 0),
            MarkerColor::Purple => Color32::from_rgb(128, 0, 128),
        }
    }
}

/// What a pointer-down on the canvas creates
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ToolMode {
    #[default]
    Marker,
    Sticker(Sticker),
}

/// Currently selected thickness, color and draw mode.
///
/// Read once at gesture start; changing it mid-gesture never touches items
/// that already exist.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    thickness: u32,
    color: MarkerColor,
    mode: ToolMode,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_THICKNESS,
            color: MarkerColor::default(),
            mode: ToolMode::default(),
        }
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    /// Values outside `THICKNESS_RANGE` are clamped
    pub fn set_thickness(&mut self, thickness: u32) {
        self.thickness = thickness.clamp(*THICKNESS_RANGE.start(), *THICKNESS_RANGE.end());
        log::info!("Marker thickness set to {}", self.thickness);
    }

    pub fn color(&self) -> MarkerColor {
        self.color
    }

    pub fn set_color(&mut self, color: MarkerColor) {
        self.color = color;
        log::info!("Marker color set to {}", color.name());
    }

    pub fn mode(&self) -> &ToolMode {
        &self.mode
    }

    pub fn is_marker(&self) -> bool {
        matches!(self.mode, ToolMode::Marker)
    }

    /// Symbol of the selected sticker, if in sticker mode
    pub fn sticker(&self) -> Option<&Sticker> {
        match &self.mode {
            ToolMode::Sticker(sticker) => Some(sticker),
            ToolMode::Marker => None,
        }
    }

    pub fn select_marker(&mut self) {
        self.mode = ToolMode::Marker;
        log::info!("Marker mode selected");
    }

    pub fn select_sticker(&mut self, sticker: Sticker) {
        log::info!("Sticker mode selected: {}", sticker.symbol());
        self.mode = ToolMode::Sticker(sticker);
    }

    /// Switch to sticker mode with user supplied text. On error the tool
    /// state is left untouched.
    pub fn set_sticker_symbol(&mut self, text: &str) -> Result<(), StickerError> {
        let sticker = Sticker::parse(text)?;
        self.select_sticker(sticker);
        Ok(())
    }

    /// Stamp size derived from the current thickness
    pub fn stamp_size(&self) -> f32 {
        self.thickness as f32
    }
}
