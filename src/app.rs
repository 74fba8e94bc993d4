/*
 * Application Module
 *
 * This module defines the nannou model and the per-frame update. nannou calls
 * `update` and then the view once per display refresh, which is what drives
 * the particle render loop, the typewriter and the counters.
 *
 * The particle frame is stepped in `update`, recorded, and replayed from the
 * view, since the view only gets shared access to the model.
 */

use log::{error, info, warn};
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::input;
use crate::page::Page;
use crate::params::PageConfig;
use crate::renderer;
use crate::surface::RecordingSurface;
use crate::ui::{self, ControlState};
use crate::WINDOW_TITLE;

// Main model for the application
pub struct Model {
    pub page: Page,
    pub egui: Egui,
    pub controls: ControlState,
    /// The last particle frame, replayed by the view.
    pub frame: RecordingSurface,
    /// Bottom edge of the lowest page element, used to bound scrolling.
    pub content_height: f32,
}

// Read the page configuration named on the command line, if any
fn load_config() -> PageConfig {
    match std::env::args().nth(1) {
        Some(path) => match PageConfig::load(&path) {
            Ok(config) => {
                info!("loaded page config from {}", path);
                config
            }
            Err(e) => {
                warn!("could not load {}: {}; using the default page", path, e);
                PageConfig::default()
            }
        },
        None => PageConfig::default(),
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Size the window at 80% of the primary monitor, falling back to a fixed size
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (size.width as f32 * 0.8, size.height as f32 * 0.8)
        }
        None => (1280.0, 800.0),
    };

    let window_id = app
        .new_window()
        .title(WINDOW_TITLE)
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .resized(input::resized)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_wheel(input::mouse_wheel)
        .raw_event(input::raw_window_event)
        .build()
        .expect("Failed to build the main window");

    let window = app.window(window_id).expect("Main window closed during setup");
    let egui = Egui::from_window(&window);
    let (width, height) = window.inner_size_points();

    let config = load_config();
    let content_height = content_height(&config);
    let mut rng = rand::thread_rng();

    let page = match Page::mount(&config, (width, height), app.duration.since_start, &mut rng) {
        Ok(page) => page,
        Err(e) => {
            error!("invalid page config ({}); mounting the default page", e);
            Page::mount(
                &PageConfig::default(),
                (width, height),
                app.duration.since_start,
                &mut rng,
            )
            .expect("Default page config is valid")
        }
    };

    let controls = ControlState::from_page(&page);

    Model {
        page,
        egui,
        controls,
        frame: RecordingSurface::new(),
        content_height,
    }
}

fn content_height(config: &PageConfig) -> f32 {
    let sections = config.sections.iter().map(|s| s.top + s.height);
    let counters = config.counters.iter().map(|c| c.top + c.height);
    sections.chain(counters).fold(0.0, f32::max)
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    if let Some(particles) = &mut model.page.particles {
        let stats = particles.stats_mut();
        stats.fps = app.fps();
        stats.frame_time = update.since_last;
    }

    let reseed = ui::update_ui(&mut model.egui, &mut model.controls, &model.page);
    ui::apply_controls(&model.controls, &mut model.page);

    if reseed {
        if let Some(particles) = &mut model.page.particles {
            particles.field_mut().reseed(&mut rand::thread_rng());
        }
    }

    model.page.advance(update.since_start);

    // A stopped loop leaves the last frame on screen
    let mut frame = RecordingSurface::new();
    if model.page.frame(&mut frame).is_some() {
        model.frame = frame;
    }
}
