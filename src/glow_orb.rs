/*
 * Glow Orb Module
 *
 * A large soft orb that follows the pointer.
 */

use nannou::prelude::*;

/// Half the orb's size; the orb is translated so its centre sits on the pointer.
pub const ORB_OFFSET: f32 = 200.0;

#[derive(Debug)]
pub struct GlowOrb {
    translation: Vec2,
    attached: bool,
}

impl Default for GlowOrb {
    fn default() -> Self {
        Self::new()
    }
}

impl GlowOrb {
    pub fn new() -> Self {
        Self {
            translation: Vec2::ZERO,
            attached: true,
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.attached {
            self.translation = vec2(x - ORB_OFFSET, y - ORB_OFFSET);
        }
    }

    /// Offset of the orb's top-left corner in surface coordinates.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn center(&self) -> Point2 {
        self.translation + vec2(ORB_OFFSET, ORB_OFFSET)
    }

    pub fn dispose(&mut self) {
        self.attached = false;
    }
}
