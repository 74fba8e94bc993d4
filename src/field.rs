/*
 * Particle Field Module
 *
 * Owns the points of one drawing surface and advances and renders them
 * once per frame. Nearby points are joined by faint lines whose alpha falls
 * off linearly with distance. The line pass is a plain O(n^2) loop over
 * every unordered pair; the point count is capped so it stays cheap.
 */

use log::{debug, info};
use nannou::prelude::*;
use rand::Rng;

use crate::error::Result;
use crate::params::FieldParams;
use crate::point::{rgba_from, Point};
use crate::surface::Surface;

pub struct ParticleField {
    points: Vec<Point>,
    params: FieldParams,
    width: f32,
    height: f32,
    // Latest pointer position in surface coordinates. Nothing in the field reads
    // it yet; it is kept for pointer interaction with the points.
    pointer: Point2,
}

/// Number of points for a `width` x `height` surface.
pub fn point_count(width: f32, height: f32, params: &FieldParams) -> usize {
    let area = (width.max(0.0) as f64) * (height.max(0.0) as f64);
    let by_area = (area / params.area_per_point as f64).floor() as usize;
    by_area.min(params.max_points)
}

/// Alpha of the line joining two points `distance` apart, or `None` when they
/// are too far apart to be joined.
#[inline]
pub fn link_alpha(distance: f32, params: &FieldParams) -> Option<f32> {
    if distance < params.link_distance {
        Some(params.link_alpha * (1.0 - distance / params.link_distance))
    } else {
        None
    }
}

impl ParticleField {
    /// Build a field and seed it. Fails if `params` has an empty or
    /// inverted range, since seeding samples from those ranges.
    pub fn new<R: Rng + ?Sized>(
        width: f32,
        height: f32,
        params: FieldParams,
        rng: &mut R,
    ) -> Result<Self> {
        let mut field = Self::from_points(width, height, params, Vec::new())?;
        field.reseed(rng);
        Ok(field)
    }

    // Build a field around an explicit set of points
    pub fn from_points(
        width: f32,
        height: f32,
        params: FieldParams,
        points: Vec<Point>,
    ) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            points,
            params,
            width,
            height,
            pointer: Point2::ZERO,
        })
    }

    /// Discard every point and create a fresh batch sized for the current surface.
    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = point_count(self.width, self.height, &self.params);
        let (width, height) = (self.width, self.height);
        let params = &self.params;

        self.points.clear();
        self.points
            .extend((0..count).map(|_| Point::random(rng, width, height, params)));

        info!(
            "seeded {} points on a {:.0}x{:.0} surface",
            count, self.width, self.height
        );
    }

    /// Track a new surface size. Points are kept where they are; any left
    /// outside the new bounds drift back in through the edge reflection.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        debug!("field resized to {:.0}x{:.0}", width, height);
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = pt2(x, y);
    }

    pub fn pointer(&self) -> Point2 {
        self.pointer
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    // Used by the control panel; the point batch is left untouched
    pub fn set_link_distance(&mut self, distance: f32) {
        if distance.is_finite() && distance > 0.0 {
            self.params.link_distance = distance;
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Advance every point by one step and draw the frame. Each point is moved
    /// and drawn before it is linked to the points after it, so those are
    /// linked at their previous-frame positions. Returns the number of lines drawn.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        surface.clear(self.width, self.height);

        let color = self.params.color;
        let mut lines = 0;

        for i in 0..self.points.len() {
            let (head, tail) = self.points.split_at_mut(i + 1);
            let point = &mut head[i];

            point.advance();
            point.reflect(self.width, self.height);
            point.draw(surface, color);

            for other in tail.iter() {
                let distance = point.position.distance(other.position);
                if let Some(alpha) = link_alpha(distance, &self.params) {
                    surface.line(point.position, other.position, rgba_from(color, alpha));
                    lines += 1;
                }
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::surface::RecordingSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f32, y: f32) -> Point {
        Point::new(pt2(x, y), Vec2::ZERO, 1.0, 0.5)
    }

    #[test]
    fn count_is_capped_at_max_points() {
        let params = FieldParams::default();
        assert_eq!(point_count(1200.0, 1000.0, &params), 80);
        assert_eq!(point_count(600.0, 500.0, &params), 20);
        assert_eq!(point_count(100.0, 100.0, &params), 0);
    }

    #[test]
    fn link_alpha_endpoints() {
        let params = FieldParams::default();
        assert_eq!(link_alpha(0.0, &params), Some(0.06));
        assert_eq!(link_alpha(150.0, &params), None);
        assert_eq!(link_alpha(200.0, &params), None);
        let near = link_alpha(149.999, &params).unwrap();
        assert!(near > 0.0 && near < 1e-5);
    }

    #[test]
    fn new_field_is_reproducible_from_a_seed() {
        let a = ParticleField::new(800.0, 600.0, FieldParams::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        let b = ParticleField::new(800.0, 600.0, FieldParams::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.points().len(), 32);
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn frame_clears_then_draws_every_point() {
        let mut field = ParticleField::from_points(
            400.0,
            400.0,
            FieldParams::default(),
            vec![still(10.0, 10.0), still(300.0, 300.0)],
        )
        .unwrap();
        let mut surface = RecordingSurface::new();
        let lines = field.frame(&mut surface);

        assert_eq!(lines, 0);
        assert!(matches!(
            surface.commands[0],
            crate::surface::DrawCommand::Clear { width, height } if width == 400.0 && height == 400.0
        ));
        assert_eq!(surface.circles().count(), 2);
    }

    #[test]
    fn close_pair_gets_one_line_with_falling_alpha() {
        let mut field = ParticleField::from_points(
            400.0,
            400.0,
            FieldParams::default(),
            vec![still(0.0, 0.0), still(75.0, 0.0)],
        )
        .unwrap();
        let mut surface = RecordingSurface::new();
        assert_eq!(field.frame(&mut surface), 1);

        match surface.lines().next() {
            Some(crate::surface::DrawCommand::Line { color, .. }) => {
                assert!((color.alpha - 0.03).abs() < 1e-6)
            }
            other => panic!("expected a line, got {other:?}"),
        }
    }

    #[test]
    fn resize_keeps_points() {
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default(), &mut StdRng::seed_from_u64(1)).unwrap();
        let before = field.points().to_vec();
        field.resize(200.0, 200.0);
        assert_eq!(field.size(), (200.0, 200.0));
        assert_eq!(field.points(), &before[..]);
    }

    #[test]
    fn reseed_uses_the_current_area() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut field = ParticleField::new(800.0, 600.0, FieldParams::default(), &mut rng).unwrap();
        field.resize(600.0, 500.0);
        field.reseed(&mut rng);
        assert_eq!(field.points().len(), 20);
        assert!(field
            .points()
            .iter()
            .all(|p| p.position.x <= 600.0 && p.position.y <= 500.0));
    }

    #[test]
    fn inverted_ranges_are_rejected_before_seeding() {
        let params = FieldParams {
            min_opacity: 0.6,
            max_opacity: 0.1,
            ..FieldParams::default()
        };
        let result = ParticleField::new(800.0, 600.0, params, &mut StdRng::seed_from_u64(4));
        assert!(matches!(result, Err(Error::InvalidParam(_))));

        let params = FieldParams {
            min_radius: 2.5,
            max_radius: 0.5,
            ..FieldParams::default()
        };
        assert!(matches!(
            ParticleField::from_points(800.0, 600.0, params, Vec::new()),
            Err(Error::InvalidParam(_))
        ));
    }

    #[test]
    fn pointer_is_recorded() {
        let mut field = ParticleField::from_points(10.0, 10.0, FieldParams::default(), Vec::new()).unwrap();
        field.set_pointer(4.0, 5.0);
        assert_eq!(field.pointer(), pt2(4.0, 5.0));
    }
}
