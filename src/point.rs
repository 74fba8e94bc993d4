/*
 * Point Module
 *
 * This module defines the Point struct, a single particle of the field.
 * A point drifts at constant speed and bounces off the surface edges by
 * flipping the sign of the offending velocity component. Its position is
 * never clamped, so it can overshoot an edge by at most one velocity step.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::FieldParams;
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub position: Point2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Point {
    pub fn new(position: Point2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    // Uniformly random point somewhere on a `width` x `height` surface
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f32,
        height: f32,
        params: &FieldParams,
    ) -> Self {
        let x = rng.gen::<f32>() * width;
        let y = rng.gen::<f32>() * height;
        let vx = rng.gen_range(params.speed_range());
        let vy = rng.gen_range(params.speed_range());

        Self {
            position: pt2(x, y),
            velocity: vec2(vx, vy),
            radius: rng.gen_range(params.radius_range()),
            opacity: rng.gen_range(params.opacity_range()),
        }
    }

    // Move the point by one velocity step
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    // Flip a velocity component when the point lies outside the surface on that
    // axis and is still heading away from it. Points left outside by a shrinking
    // resize therefore drift back in instead of flipping every frame.
    pub fn reflect(&mut self, width: f32, height: f32) {
        if (self.position.x < 0.0 && self.velocity.x < 0.0)
            || (self.position.x > width && self.velocity.x > 0.0)
        {
            self.velocity.x = -self.velocity.x;
        }

        if (self.position.y < 0.0 && self.velocity.y < 0.0)
            || (self.position.y > height && self.velocity.y > 0.0)
        {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: [u8; 3]) {
        surface.fill_circle(self.position, self.radius, rgba_from(color, self.opacity));
    }
}

/// Convert an 8-bit RGB triple plus alpha into a nannou color.
pub fn rgba_from(color: [u8; 3], alpha: f32) -> Rgba {
    rgba(
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        alpha,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_points_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = FieldParams::default();
        for _ in 0..500 {
            let p = Point::random(&mut rng, 800.0, 600.0, &params);
            assert!((0.0..=800.0).contains(&p.position.x));
            assert!((0.0..=600.0).contains(&p.position.y));
            assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
            assert!((0.5..=2.5).contains(&p.radius));
            assert!((0.1..=0.6).contains(&p.opacity));
        }
    }

    #[test]
    fn crossing_the_right_edge_flips_vx_only() {
        let mut p = Point::new(pt2(99.9, 50.0), vec2(0.2, 0.1), 1.0, 0.5);
        p.advance();
        p.reflect(100.0, 100.0);
        assert_eq!(p.velocity, vec2(-0.2, 0.1));
        // Overshoot is not corrected
        assert!(p.position.x > 100.0);

        p.advance();
        p.reflect(100.0, 100.0);
        assert!(p.position.x <= 100.0);
        assert_eq!(p.velocity, vec2(-0.2, 0.1));
    }

    #[test]
    fn crossing_the_top_edge_flips_vy() {
        let mut p = Point::new(pt2(10.0, 0.1), vec2(0.0, -0.25), 1.0, 0.5);
        p.advance();
        p.reflect(100.0, 100.0);
        assert_eq!(p.velocity, vec2(0.0, 0.25));
    }

    #[test]
    fn point_left_outside_by_a_resize_heads_back_in() {
        let mut p = Point::new(pt2(500.0, 50.0), vec2(-0.2, 0.0), 1.0, 0.5);
        for _ in 0..10 {
            p.advance();
            p.reflect(100.0, 100.0);
            assert!(p.velocity.x < 0.0);
        }
        assert!(p.position.x < 500.0);
    }

    #[test]
    fn rgba_keeps_alpha() {
        let c = rgba_from([0, 212, 255], 0.3);
        assert_eq!(c.alpha, 0.3);
        assert_eq!(c.blue, 1.0);
    }
}
