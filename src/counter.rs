/*
 * Counter Module
 *
 * Counts a number up from zero with a cubic ease-out once its element
 * scrolls into view.
 */

use std::time::Duration;

use log::debug;

use crate::params::CounterConfig;

/// Cubic ease-out of a progress value in `0..=1`.
#[inline]
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Value shown at `progress` for a counter running up to `target`.
pub fn value_at(target: i64, progress: f64) -> i64 {
    let p = progress.clamp(0.0, 1.0);
    (target as f64 * ease_out_cubic(p)).floor() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CounterState {
    // Waiting for the element to become visible
    Observing,
    Running { started: Duration },
    Finished,
    Disposed,
}

pub struct Counter {
    target: i64,
    prefix: String,
    suffix: String,
    duration: Duration,
    // Page-space extent of the element
    top: f32,
    height: f32,
    text: String,
    state: CounterState,
}

impl Counter {
    pub fn new(config: &CounterConfig, duration: Duration) -> Self {
        Self {
            target: config.target,
            prefix: config.prefix.clone(),
            suffix: config.suffix.clone(),
            duration,
            top: config.top,
            height: config.height,
            text: format!("{}0{}", config.prefix, config.suffix),
            state: CounterState::Observing,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Page-space offset of the element's top edge.
    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_observing(&self) -> bool {
        self.state == CounterState::Observing
    }

    pub fn is_finished(&self) -> bool {
        self.state == CounterState::Finished
    }

    /// Visibility signal. The first time the element intersects the viewport the
    /// counter starts at `now`; later signals are ignored.
    pub fn on_intersection(&mut self, intersecting: bool, now: Duration) {
        if intersecting && self.state == CounterState::Observing {
            debug!("counter to {} started", self.target);
            self.state = CounterState::Running { started: now };
        }
    }

    pub fn progress(&self, now: Duration) -> f64 {
        match self.state {
            CounterState::Observing | CounterState::Disposed => 0.0,
            CounterState::Finished => 1.0,
            CounterState::Running { started } => {
                let elapsed = now.saturating_sub(started).as_secs_f64();
                (elapsed / self.duration.as_secs_f64()).min(1.0)
            }
        }
    }

    /// Refresh the displayed text for `now`. Returns true while the counter is running.
    pub fn update(&mut self, now: Duration) -> bool {
        if !matches!(self.state, CounterState::Running { .. }) {
            return false;
        }

        let progress = self.progress(now);
        self.text = format!(
            "{}{}{}",
            self.prefix,
            value_at(self.target, progress),
            self.suffix
        );

        if progress >= 1.0 {
            self.state = CounterState::Finished;
            false
        } else {
            true
        }
    }

    pub fn dispose(&mut self) {
        self.state = CounterState::Disposed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(target: i64) -> CounterConfig {
        CounterConfig {
            target,
            prefix: "$".into(),
            suffix: "k".into(),
            top: 0.0,
            height: 10.0,
        }
    }

    #[test]
    fn value_follows_cubic_ease_out() {
        assert_eq!(value_at(150, 0.0), 0);
        assert_eq!(value_at(150, 0.5), (150.0 * 0.875f64).floor() as i64);
        assert_eq!(value_at(150, 1.0), 150);
        for i in 0..=100 {
            let p = i as f64 / 100.0;
            let expected = (150.0 * (1.0 - (1.0 - p).powi(3))).floor() as i64;
            assert_eq!(value_at(150, p), expected);
        }
    }

    #[test]
    fn keeps_the_configured_extent() {
        let counter = Counter::new(
            &CounterConfig {
                top: 550.0,
                height: 80.0,
                ..config(5)
            },
            Duration::from_millis(2000),
        );
        assert_eq!((counter.top(), counter.height()), (550.0, 80.0));
    }

    #[test]
    fn waits_for_visibility() {
        let mut counter = Counter::new(&config(150), Duration::from_millis(2000));
        assert_eq!(counter.text(), "$0k");
        assert!(!counter.update(Duration::from_secs(1)));
        counter.on_intersection(false, Duration::from_secs(1));
        assert!(counter.is_observing());
    }

    #[test]
    fn runs_to_exact_target() {
        let mut counter = Counter::new(&config(150), Duration::from_millis(2000));
        counter.on_intersection(true, Duration::from_secs(1));
        assert!(counter.update(Duration::from_millis(2000)));
        assert_eq!(counter.text(), "$131k");
        assert!(!counter.update(Duration::from_millis(3000)));
        assert!(counter.is_finished());
        assert_eq!(counter.text(), "$150k");
    }

    #[test]
    fn second_intersection_does_not_restart() {
        let mut counter = Counter::new(&config(10), Duration::from_millis(2000));
        counter.on_intersection(true, Duration::ZERO);
        counter.on_intersection(true, Duration::from_millis(1500));
        assert_eq!(counter.progress(Duration::from_millis(1000)), 0.5);
    }
}
