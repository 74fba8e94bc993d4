/*
 * Surface Module
 *
 * The drawing surface the particle field renders into. Surface coordinates
 * have their origin in the top-left corner with y growing downwards, like a
 * page canvas. `NannouSurface` maps them onto nannou's centred, y-up space;
 * `RecordingSurface` keeps the draw calls so a frame can be inspected
 * headless or replayed later from the nannou view.
 */

use nannou::prelude::*;

pub trait Surface {
    /// Wipe the `width` x `height` region starting at the origin. Anything
    /// outside that region is left as it is.
    fn clear(&mut self, width: f32, height: f32);

    fn fill_circle(&mut self, center: Point2, radius: f32, color: Rgba);

    fn line(&mut self, a: Point2, b: Point2, color: Rgba);
}

// Draws into a nannou Draw covering the whole window
pub struct NannouSurface<'a> {
    draw: &'a Draw,
    window_rect: Rect,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self { draw, window_rect }
    }

    // Top-left/y-down surface coordinates to window coordinates
    #[inline]
    pub fn to_window(&self, p: Point2) -> Point2 {
        pt2(self.window_rect.left() + p.x, self.window_rect.top() - p.y)
    }

    /// Window-space rect of the `width` x `height` region at the surface origin.
    pub fn region(&self, width: f32, height: f32) -> Rect {
        let (w, h) = (width.max(0.0), height.max(0.0));
        let top_left = self.to_window(Point2::ZERO);
        Rect::from_x_y_w_h(top_left.x + w / 2.0, top_left.y - h / 2.0, w, h)
    }

    pub fn covers_window(&self, width: f32, height: f32) -> bool {
        width >= self.window_rect.w() && height >= self.window_rect.h()
    }
}

impl Surface for NannouSurface<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        if self.covers_window(width, height) {
            self.draw.background().color(BLACK);
        } else {
            let region = self.region(width, height);
            self.draw.rect().xy(region.xy()).wh(region.wh()).color(BLACK);
        }
    }

    fn fill_circle(&mut self, center: Point2, radius: f32, color: Rgba) {
        self.draw
            .ellipse()
            .xy(self.to_window(center))
            .radius(radius)
            .color(color);
    }

    fn line(&mut self, a: Point2, b: Point2, color: Rgba) {
        self.draw
            .line()
            .start(self.to_window(a))
            .end(self.to_window(b))
            .weight(1.0)
            .color(color);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Circle { center: Point2, radius: f32, color: Rgba },
    Line { a: Point2, b: Point2, color: Rgba },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }

    // Play the recorded frame back onto another surface
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for command in &self.commands {
            match *command {
                DrawCommand::Clear { width, height } => surface.clear(width, height),
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => surface.fill_circle(center, radius, color),
                DrawCommand::Line { a, b, color } => surface.line(a, b, color),
            }
        }
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Point2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, a: Point2, b: Point2, color: Rgba) {
        self.commands.push(DrawCommand::Line { a, b, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_mapping_flips_y() {
        let draw = Draw::new();
        let rect = Rect::from_w_h(800.0, 600.0);
        let surface = NannouSurface::new(&draw, rect);
        assert_eq!(surface.to_window(pt2(0.0, 0.0)), pt2(-400.0, 300.0));
        assert_eq!(surface.to_window(pt2(800.0, 600.0)), pt2(400.0, -300.0));
    }

    #[test]
    fn clear_region_is_anchored_at_the_top_left() {
        let draw = Draw::new();
        let surface = NannouSurface::new(&draw, Rect::from_w_h(800.0, 600.0));

        let region = surface.region(200.0, 100.0);
        assert_eq!(region.left(), -400.0);
        assert_eq!(region.top(), 300.0);
        assert_eq!(region.wh(), vec2(200.0, 100.0));
        assert!(!surface.covers_window(200.0, 100.0));
        assert!(!surface.covers_window(800.0, 100.0));
        assert!(surface.covers_window(800.0, 600.0));
    }

    #[test]
    fn replay_reproduces_the_recording() {
        let mut original = RecordingSurface::new();
        original.clear(10.0, 10.0);
        original.fill_circle(pt2(1.0, 2.0), 1.5, rgba(0.0, 0.5, 1.0, 0.4));
        original.line(pt2(0.0, 0.0), pt2(3.0, 4.0), rgba(0.0, 0.5, 1.0, 0.01));

        let mut copy = RecordingSurface::new();
        original.replay(&mut copy);
        assert_eq!(copy.commands, original.commands);
        assert_eq!(copy.lines().count(), 1);
    }
}
