/*
 * Input Module
 *
 * This module turns nannou window events into page signals: resize,
 * pointer movement, scrolling (mouse wheel) and hamburger clicks.
 * nannou reports positions centred on the window with y up; the page
 * works in viewport coordinates with the origin top-left and y down.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, MouseScrollDelta, TouchPhase};

use crate::app::Model;
use crate::renderer::hamburger_rect;
use crate::SCROLL_LINE_HEIGHT;

// Window coordinates to viewport coordinates
pub fn to_viewport(pos: Point2, window_rect: Rect) -> Point2 {
    pt2(pos.x - window_rect.left(), window_rect.top() - pos.y)
}

// Clamp a scroll offset to the page content
pub fn clamp_scroll(scroll_y: f32, content_height: f32, viewport_height: f32) -> f32 {
    scroll_y.clamp(0.0, (content_height - viewport_height).max(0.0))
}

pub fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.page.resize(size.x, size.y);
}

pub fn mouse_moved(app: &App, model: &mut Model, pos: Point2) {
    let p = to_viewport(pos, app.window_rect());
    model.page.pointer_moved(p.x, p.y);
}

pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let window_rect = app.window_rect();
    if hamburger_rect(window_rect).contains(app.mouse.position()) {
        model.page.menu_clicked();
    }
}

// Mouse wheel event handler for scrolling the page
pub fn mouse_wheel(_app: &App, model: &mut Model, delta: MouseScrollDelta, _phase: TouchPhase) {
    let scroll_delta = match delta {
        MouseScrollDelta::LineDelta(_, y) => y * SCROLL_LINE_HEIGHT,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
    };

    let (_, viewport_height) = model.page.viewport();
    let target = clamp_scroll(
        model.page.scroll_y() - scroll_delta,
        model.content_height,
        viewport_height,
    );
    if target != model.page.scroll_y() {
        model.page.scrolled(target);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_centre_maps_to_viewport_middle() {
        let rect = Rect::from_w_h(800.0, 600.0);
        assert_eq!(to_viewport(pt2(0.0, 0.0), rect), pt2(400.0, 300.0));
        assert_eq!(to_viewport(pt2(-400.0, 300.0), rect), pt2(0.0, 0.0));
    }

    #[test]
    fn scroll_stays_inside_the_content() {
        assert_eq!(clamp_scroll(-20.0, 3000.0, 800.0), 0.0);
        assert_eq!(clamp_scroll(5000.0, 3000.0, 800.0), 2200.0);
        assert_eq!(clamp_scroll(100.0, 500.0, 800.0), 0.0);
    }
}
