use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke};

use crate::element::Point;

/// A 2D drawing target that drawables replay themselves onto.
///
/// Coordinates are canvas-local; whoever presents the surface decides where
/// the canvas origin lands on screen.
pub trait Surface {
    /// Wipe every pixel back to the background
    fn clear(&mut self);

    /// Connected line through `points` in order
    fn polyline(&mut self, points: &[Point], stroke: Stroke);

    /// Text glyph centered on `center`
    fn glyph(&mut self, symbol: &str, center: Point, font_size: f32);
}

/// One recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Polyline { points: Vec<Point>, stroke: Stroke },
    Glyph { symbol: String, center: Point, font_size: f32 },
}

/// Recording surface: keeps the draw calls of the last redraw so they can be
/// presented every frame without replaying the history.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_blank(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of straight line segments across all recorded polylines
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .map(|command| match command {
                DrawCommand::Polyline { points, .. } => points.len().saturating_sub(1),
                DrawCommand::Glyph { .. } => 0,
            })
            .sum()
    }

    /// Present the recorded calls with the canvas origin at `origin` in
    /// screen space.
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for command in &self.commands {
            match command {
                DrawCommand::Polyline { points, stroke } => {
                    let points = points.iter().map(|p| *p + offset).collect();
                    painter.add(Shape::line(points, *stroke));
                }
                DrawCommand::Glyph {
                    symbol,
                    center,
                    font_size,
                } => {
                    painter.text(
                        *center + offset,
                        Align2::CENTER_CENTER,
                        symbol,
                        FontId::proportional(*font_size),
                        Color32::BLACK,
                    );
                }
            }
        }
    }
}

impl Surface for DisplayList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn glyph(&mut self, symbol: &str, center: Point, font_size: f32) {
        self.commands.push(DrawCommand::Glyph {
            symbol: symbol.to_owned(),
            center,
            font_size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_segment_count() {
        let mut list = DisplayList::default();
        list.polyline(
            &[pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(2.0, 0.0)],
            Stroke::new(1.0, Color32::BLACK),
        );
        list.glyph("x", pos2(5.0, 5.0), 16.0);
        assert_eq!(list.segment_count(), 2);
        assert!(!list.is_blank());

        list.clear();
        assert!(list.is_blank());
        assert_eq!(list.segment_count(), 0);
    }
}
