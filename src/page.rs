/*
 * Page Module
 *
 * The page owns every effect and routes environment signals to them.
 * Each effect is only mounted when the configuration asks for it; a
 * missing effect simply never receives signals. `dispose` detaches all of
 * them at once, after which every signal is ignored.
 */

use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::counter::Counter;
use crate::error::Result;
use crate::field::ParticleField;
use crate::glow_orb::GlowOrb;
use crate::navbar::Navbar;
use crate::params::PageConfig;
use crate::render_loop::RenderLoop;
use crate::reveal::{visible_ratio, ScrollReveal};
use crate::surface::Surface;
use crate::typewriter::Typewriter;

pub struct Page {
    pub particles: Option<RenderLoop>,
    pub typewriter: Option<Typewriter>,
    pub navbar: Option<Navbar>,
    pub reveal: ScrollReveal,
    pub counters: Vec<Counter>,
    pub glow_orb: Option<GlowOrb>,
    viewport: (f32, f32),
    scroll_y: f32,
    now: Duration,
    disposed: bool,
}

impl Page {
    /// Mount the configured effects on a `width` x `height` viewport at time `now`.
    pub fn mount<R: Rng + ?Sized>(
        config: &PageConfig,
        viewport: (f32, f32),
        now: Duration,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        let (width, height) = viewport;

        let particles = match &config.particles {
            Some(params) => Some(RenderLoop::new(ParticleField::new(
                width,
                height,
                params.clone(),
                rng,
            )?)),
            None => {
                debug!("no particle canvas on this page");
                None
            }
        };

        let typewriter = match &config.typewriter {
            Some(tw_config) => {
                let mut typewriter = Typewriter::from_config(tw_config)?;
                typewriter.start(now);
                Some(typewriter)
            }
            None => {
                debug!("no typing element on this page");
                None
            }
        };

        let navbar = config.navbar.as_ref().map(Navbar::new);
        let duration = Duration::from_millis(config.counter_duration_ms);
        let counters = config
            .counters
            .iter()
            .map(|c| Counter::new(c, duration))
            .collect();

        let mut page = Self {
            particles,
            typewriter,
            navbar,
            reveal: ScrollReveal::new(&config.sections, config.reveal_threshold),
            counters,
            glow_orb: config.glow_orb.then(GlowOrb::new),
            viewport,
            scroll_y: 0.0,
            now,
            disposed: false,
        };

        info!(
            "page mounted: particles={} typewriter={} navbar={} sections={} counters={} glow_orb={}",
            page.particles.is_some(),
            page.typewriter.is_some(),
            page.navbar.is_some(),
            page.reveal.sections.len(),
            page.counters.len(),
            page.glow_orb.is_some()
        );

        // Elements already on screen at load time are observed straight away
        page.observe_visibility();
        Ok(page)
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if self.disposed {
            return;
        }
        self.viewport = (width, height);
        if let Some(particles) = &mut self.particles {
            particles.field_mut().resize(width, height);
        }
        info!("viewport resized to {:.0}x{:.0}", width, height);
        self.observe_visibility();
    }

    /// Pointer position in viewport coordinates (top-left origin, y down).
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.disposed {
            return;
        }
        if let Some(particles) = &mut self.particles {
            particles.field_mut().set_pointer(x, y);
        }
        if let Some(orb) = &mut self.glow_orb {
            orb.on_pointer_move(x, y);
        }
    }

    pub fn scrolled(&mut self, scroll_y: f32) {
        if self.disposed {
            return;
        }
        self.scroll_y = scroll_y.max(0.0);
        if let Some(navbar) = &mut self.navbar {
            navbar.on_scroll(self.scroll_y);
        }
        self.observe_visibility();
    }

    pub fn menu_clicked(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(navbar) = &mut self.navbar {
            navbar.toggle_menu();
        }
    }

    /// Timers: typewriter steps and running counters.
    pub fn advance(&mut self, now: Duration) {
        if self.disposed {
            return;
        }
        self.now = now;
        if let Some(typewriter) = &mut self.typewriter {
            typewriter.update(now);
        }
        for counter in &mut self.counters {
            counter.update(now);
        }
    }

    /// One particle frame. Returns the number of lines drawn, or `None` if the
    /// page has no particle canvas or its loop is stopped.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<usize> {
        if self.disposed {
            return None;
        }
        self.particles.as_mut().and_then(|p| p.frame(surface))
    }

    fn observe_visibility(&mut self) {
        let (_, height) = self.viewport;
        self.reveal.observe(self.scroll_y, height);

        for counter in &mut self.counters {
            if counter.is_observing() {
                let ratio = visible_ratio(counter.top(), counter.height(), self.scroll_y, height);
                counter.on_intersection(ratio > 0.0, self.now);
            }
        }
    }

    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(particles) = &mut self.particles {
            particles.stop();
        }
        if let Some(typewriter) = &mut self.typewriter {
            typewriter.dispose();
        }
        if let Some(navbar) = &mut self.navbar {
            navbar.dispose();
        }
        self.reveal.dispose();
        for counter in &mut self.counters {
            counter.dispose();
        }
        if let Some(orb) = &mut self.glow_orb {
            orb.dispose();
        }
        self.disposed = true;
        info!("page disposed");
    }
}
