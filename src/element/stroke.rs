use egui::Stroke as EguiStroke;

use super::common::Point;
use crate::surface::Surface;
use crate::tool::MarkerColor;

/// Freehand marker line: an append-only run of points with a fixed style
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    thickness: u32,
    color: MarkerColor,
}

impl Stroke {
    /// Start a stroke at `start`. Thickness and color are frozen from here on.
    pub fn new(start: Point, thickness: u32, color: MarkerColor) -> Self {
        Self {
            points: vec![start],
            thickness,
            color,
        }
    }

    /// Points in drawing order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    pub fn color(&self) -> MarkerColor {
        self.color
    }

    /// Record the next pointer sample. Only the history manager extends
    /// strokes, and only the one owned by the live gesture.
    pub(crate) fn drag(&mut self, point: Point) {
        self.points.push(point);
    }

    pub(crate) fn render(&self, surface: &mut dyn Surface) {
        // A single sample has no segment to show yet
        if self.points.len() < 2 {
            return;
        }

        surface.polyline(
            &self.points,
            EguiStroke::new(self.thickness as f32, self.color.color32()),
        );
    }
}
