/*
 * UI Module
 *
 * The egui control panel (pause, reseed, link distance, debug overlay) and
 * the debug overlay drawn on top of the page.
 */

use nannou_egui::{egui, Egui};

use crate::debug::FrameStats;
use crate::page::Page;
use crate::params::FieldParams;

// Values edited through the control panel
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub paused: bool,
    pub show_debug: bool,
    pub link_distance: f32,
}

impl ControlState {
    pub fn from_page(page: &Page) -> Self {
        let link_distance = page
            .particles
            .as_ref()
            .map(|p| p.field().params().link_distance)
            .unwrap_or(FieldParams::default().link_distance);

        Self {
            paused: false,
            show_debug: false,
            link_distance,
        }
    }
}

// Push the panel's values into the page
pub fn apply_controls(controls: &ControlState, page: &mut Page) {
    if page.is_disposed() {
        return;
    }
    if let Some(particles) = &mut page.particles {
        if controls.paused {
            particles.stop();
        } else {
            particles.start();
        }
        particles.field_mut().set_link_distance(controls.link_distance);
    }
}

// Update the UI and return whether the points should be reseeded
pub fn update_ui(egui: &mut Egui, controls: &mut ControlState, page: &Page) -> bool {
    let mut reseed = false;
    let ctx = egui.begin_frame();

    egui::Window::new("Particle Field")
        .default_pos([10.0, 80.0])
        .default_open(false)
        .show(&ctx, |ui| {
            match &page.particles {
                Some(particles) => {
                    ui.checkbox(&mut controls.paused, "Pause Animation");
                    if ui.button("Reseed Points").clicked() {
                        reseed = true;
                    }
                    ui.add(
                        egui::Slider::new(
                            &mut controls.link_distance,
                            FieldParams::get_link_distance_range(),
                        )
                        .text("Link Distance"),
                    );

                    ui.separator();

                    let stats = particles.stats();
                    ui.label(format!("FPS: {:.1}", stats.fps));
                    ui.label(format!(
                        "Frame time: {:.2} ms",
                        stats.frame_time.as_secs_f64() * 1000.0
                    ));
                    ui.label(format!("Points: {}", stats.points));
                    ui.label(format!("Lines: {}", stats.lines));
                }
                None => {
                    ui.label("This page has no particle canvas");
                }
            }

            ui.checkbox(&mut controls.show_debug, "Show Debug Info");
        });

    reseed
}

// Draw debug information in the bottom-left corner of the window
pub fn draw_debug_info(draw: &nannou::Draw, stats: &FrameStats, window_rect: nannou::geom::Rect, scroll_y: f32) {
    let margin = 20.0;
    let line_height = 20.0;

    let debug_texts = [
        format!("FPS: {:.1}", stats.fps),
        format!("Frame time: {:.2} ms", stats.frame_time.as_secs_f64() * 1000.0),
        format!("Points: {}", stats.points),
        format!("Lines: {} ({:.1}% of pairs)", stats.lines, stats.link_density() * 100.0),
        format!("Frames: {}", stats.frames),
        format!("Scroll: {:.0}", scroll_y),
    ];

    let panel_width = 240.0;
    let panel_height = line_height * debug_texts.len() as f32 + margin;
    draw.rect()
        .x_y(
            window_rect.left() + panel_width / 2.0,
            window_rect.bottom() + panel_height / 2.0,
        )
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.bottom() + panel_height - margin;

    for (i, text) in debug_texts.iter().enumerate() {
        draw.text(text)
            .x_y(text_x + 90.0, text_y - i as f32 * line_height)
            .w(200.0)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
