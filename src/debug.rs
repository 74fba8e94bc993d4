/*
 * Debug Information Module
 *
 * Per-frame numbers shown in the control panel and the debug overlay:
 * - FPS (frames per second)
 * - Frame time
 * - Number of points and proximity lines in the last frame
 */

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    pub fps: f32,
    pub frame_time: Duration,
    pub points: usize,
    pub lines: usize,
    pub frames: u64,
}

impl FrameStats {
    pub fn record_frame(&mut self, points: usize, lines: usize) {
        self.points = points;
        self.lines = lines;
        self.frames += 1;
    }

    // Lines as a share of every possible pair
    pub fn link_density(&self) -> f32 {
        let pairs = self.points * self.points.saturating_sub(1) / 2;
        if pairs == 0 {
            0.0
        } else {
            self.lines as f32 / pairs as f32
        }
    }
}
