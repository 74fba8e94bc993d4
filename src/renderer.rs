/*
 * Renderer Module
 *
 * This module draws the page: the particle frame recorded during update,
 * the glow orb, the hero typewriter line, revealed sections with their
 * skill bars, the counters and the navbar on top.
 *
 * Page elements are laid out in page space (top-left origin, y down) and
 * shifted by the scroll offset; the navbar and the orb are fixed to the
 * viewport.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::page::Page;
use crate::point::rgba_from;
use crate::surface::NannouSurface;
use crate::ui;

const NAVBAR_HEIGHT: f32 = 60.0;
const ACCENT: [u8; 3] = [0, 212, 255];
const HERO_TOP: f32 = 300.0;
const SKILL_BAR_LENGTH: f32 = 320.0;

/// Clickable area of the hamburger button, in window coordinates.
pub fn hamburger_rect(window_rect: Rect) -> Rect {
    Rect::from_x_y_w_h(
        window_rect.right() - 40.0,
        window_rect.top() - NAVBAR_HEIGHT / 2.0,
        32.0,
        32.0,
    )
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let window_rect = app.window_rect();
    let mut surface = NannouSurface::new(&draw, window_rect);

    // The recorded particle frame only clears the field's own region
    draw.background().color(BLACK);
    model.frame.replay(&mut surface);

    let page = &model.page;
    draw_glow_orb(&surface, &draw, page);
    draw_hero(&surface, &draw, page);
    draw_sections(&surface, &draw, page);
    draw_counters(&surface, &draw, page);
    draw_navbar(&draw, window_rect, page);

    if model.controls.show_debug {
        if let Some(particles) = &page.particles {
            ui::draw_debug_info(&draw, particles.stats(), window_rect, page.scroll_y());
        }
    }

    draw.to_frame(app, &frame).expect("Failed to draw the frame");
    model.egui.draw_to_frame(&frame).expect("Failed to draw the UI");
}

fn draw_glow_orb(surface: &NannouSurface, draw: &Draw, page: &Page) {
    if let Some(orb) = &page.glow_orb {
        let center = surface.to_window(orb.center());
        // Stack a few translucent discs for a soft falloff
        for (radius, alpha) in [(200.0, 0.02), (140.0, 0.03), (80.0, 0.04)] {
            draw.ellipse()
                .xy(center)
                .radius(radius)
                .color(rgba_from(ACCENT, alpha));
        }
    }
}

fn draw_hero(surface: &NannouSurface, draw: &Draw, page: &Page) {
    if let Some(typewriter) = &page.typewriter {
        let (width, _) = page.viewport();
        let y = HERO_TOP - page.scroll_y();
        draw.text(&format!("{}|", typewriter.text()))
            .xy(surface.to_window(pt2(width / 2.0, y)))
            .w(width)
            .color(rgba_from(ACCENT, 1.0))
            .font_size(36);
    }
}

fn draw_sections(surface: &NannouSurface, draw: &Draw, page: &Page) {
    let (width, _) = page.viewport();
    let scroll = page.scroll_y();

    for section in page.reveal.sections.iter().filter(|s| s.visible) {
        let top = section.top - scroll;
        draw.text(&section.title)
            .xy(surface.to_window(pt2(width / 2.0, top + 30.0)))
            .w(width)
            .color(WHITE)
            .font_size(28);

        for (i, bar) in section.skill_bars.iter().enumerate() {
            let y = top + 90.0 + i as f32 * 50.0;
            let left = width / 2.0 - SKILL_BAR_LENGTH / 2.0;

            draw.text(&bar.label)
                .xy(surface.to_window(pt2(width / 2.0, y - 16.0)))
                .w(SKILL_BAR_LENGTH)
                .left_justify()
                .color(WHITE)
                .font_size(14);

            draw.rect()
                .xy(surface.to_window(pt2(width / 2.0, y)))
                .w_h(SKILL_BAR_LENGTH, 6.0)
                .color(rgba_from([255, 255, 255], 0.1));

            let filled = SKILL_BAR_LENGTH * bar.width / 100.0;
            draw.rect()
                .xy(surface.to_window(pt2(left + filled / 2.0, y)))
                .w_h(filled, 6.0)
                .color(rgba_from(ACCENT, 0.9));
        }
    }
}

fn draw_counters(surface: &NannouSurface, draw: &Draw, page: &Page) {
    let (width, _) = page.viewport();
    let count = page.counters.len();
    let scroll = page.scroll_y();

    for (i, counter) in page.counters.iter().enumerate() {
        let x = width * (i as f32 + 1.0) / (count as f32 + 1.0);
        let y = counter.top() + counter.height() / 2.0 - scroll;
        draw.text(counter.text())
            .xy(surface.to_window(pt2(x, y)))
            .color(rgba_from(ACCENT, 1.0))
            .font_size(32);
    }
}

fn draw_navbar(draw: &Draw, window_rect: Rect, page: &Page) {
    let navbar = match &page.navbar {
        Some(navbar) => navbar,
        None => return,
    };

    // Scrolled navbars get a solid backdrop
    let backdrop: f32 = if navbar.is_scrolled() { 0.85 } else { 0.0 };
    let bar_y = window_rect.top() - NAVBAR_HEIGHT / 2.0;
    draw.rect()
        .x_y(window_rect.x(), bar_y)
        .w_h(window_rect.w(), NAVBAR_HEIGHT)
        .color(rgba(0.02, 0.02, 0.06, backdrop));

    let show_links = !navbar.has_hamburger() || navbar.is_menu_open();
    if show_links {
        for (i, link) in navbar.links.iter().enumerate() {
            let color = if link.active {
                rgba_from(ACCENT, 1.0)
            } else {
                rgba(0.8, 0.8, 0.8, 1.0)
            };
            // Open menus drop down below the bar
            let (x, y) = if navbar.has_hamburger() {
                (window_rect.right() - 100.0, bar_y - NAVBAR_HEIGHT * (i as f32 + 1.0) * 0.6)
            } else {
                (window_rect.right() - 140.0 * (navbar.links.len() - i) as f32, bar_y)
            };
            draw.text(&link.href)
                .x_y(x, y)
                .w(140.0)
                .color(color)
                .font_size(14);
        }
    }

    if navbar.has_hamburger() {
        let rect = hamburger_rect(window_rect);
        let color = if navbar.is_hamburger_active() {
            rgba_from(ACCENT, 1.0)
        } else {
            rgba(0.9, 0.9, 0.9, 1.0)
        };
        for offset in [-8.0, 0.0, 8.0] {
            draw.rect()
                .x_y(rect.x(), rect.y() + offset)
                .w_h(rect.w() * 0.8, 3.0)
                .color(color);
        }
    }
}
