/*
 * Render Loop Module
 *
 * Drives one particle field frame by frame. The platform calls `frame` once
 * per display refresh; while the loop is stopped those calls do nothing, so
 * a test can step the field one frame at a time.
 */

use log::{debug, trace};

use crate::debug::FrameStats;
use crate::field::ParticleField;
use crate::surface::Surface;

pub struct RenderLoop {
    field: ParticleField,
    active: bool,
    stats: FrameStats,
}

impl RenderLoop {
    /// Wrap a field. The loop starts running immediately.
    pub fn new(field: ParticleField) -> Self {
        let mut render_loop = Self {
            field,
            active: false,
            stats: FrameStats::default(),
        };
        render_loop.start();
        render_loop
    }

    pub fn start(&mut self) {
        if !self.active {
            self.active = true;
            debug!("render loop started");
        }
    }

    pub fn stop(&mut self) {
        if self.active {
            self.active = false;
            debug!("render loop stopped after {} frames", self.stats.frames);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run a single frame if the loop is active, returning the number of lines drawn.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<usize> {
        if !self.active {
            return None;
        }

        let lines = self.field.frame(surface);
        self.stats.record_frame(self.field.points().len(), lines);
        trace!(
            "frame {}: {} points, {} lines",
            self.stats.frames,
            self.stats.points,
            lines
        );
        Some(lines)
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut FrameStats {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::FieldParams;
    use crate::surface::RecordingSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn running_loop() -> RenderLoop {
        let field = ParticleField::new(600.0, 500.0, FieldParams::default(), &mut StdRng::seed_from_u64(11)).unwrap();
        RenderLoop::new(field)
    }

    #[test]
    fn starts_active() {
        assert!(running_loop().is_active());
    }

    #[test]
    fn stopped_loop_draws_nothing() {
        let mut render_loop = running_loop();
        render_loop.stop();
        let mut surface = RecordingSurface::new();
        assert_eq!(render_loop.frame(&mut surface), None);
        assert!(surface.commands.is_empty());
        assert_eq!(render_loop.stats().frames, 0);
    }

    #[test]
    fn each_call_is_one_frame() {
        let mut render_loop = running_loop();
        let mut surface = RecordingSurface::new();
        for _ in 0..3 {
            surface.reset();
            assert!(render_loop.frame(&mut surface).is_some());
            assert_eq!(surface.circles().count(), 20);
        }
        assert_eq!(render_loop.stats().frames, 3);

        render_loop.stop();
        render_loop.start();
        assert!(render_loop.frame(&mut surface).is_some());
        assert_eq!(render_loop.stats().frames, 4);
    }
}
