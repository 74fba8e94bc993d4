/*
 * Typewriter Module
 *
 * Types a word one character at a time, holds it, deletes it one character
 * at a time and moves on to the next word, cycling forever.
 */

use std::time::Duration;

use log::debug;

use crate::error::{Error, Result};
use crate::params::TypewriterConfig;

/// Shortest gap between two steps. A zero delay still waits this long so
/// `update` always catches up with `now`.
pub const MIN_STEP: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold: Duration,
    pub next_word: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
            next_word: Duration::from_millis(500),
        }
    }
}

impl TypewriterTiming {
    /// Sum of the four delays.
    pub fn total(&self) -> Duration {
        self.type_delay + self.delete_delay + self.hold + self.next_word
    }
}

pub struct Typewriter {
    words: Vec<String>,
    timing: TypewriterTiming,
    text: String,
    // Length of `text` in characters
    typed: usize,
    word_index: usize,
    deleting: bool,
    // Time of the next step; `None` until started or after dispose
    next_due: Option<Duration>,
}

impl Typewriter {
    pub fn new(words: Vec<String>, timing: TypewriterTiming) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::InvalidParam("typewriter needs at least one word".into()));
        }
        if timing.total().is_zero() {
            return Err(Error::InvalidParam("typewriter delays cannot all be zero".into()));
        }
        Ok(Self {
            words,
            timing,
            text: String::new(),
            typed: 0,
            word_index: 0,
            deleting: false,
            next_due: None,
        })
    }

    pub fn from_config(config: &TypewriterConfig) -> Result<Self> {
        let timing = TypewriterTiming {
            type_delay: Duration::from_millis(config.type_delay_ms),
            delete_delay: Duration::from_millis(config.delete_delay_ms),
            hold: Duration::from_millis(config.hold_ms),
            next_word: Duration::from_millis(config.next_word_ms),
        };
        Self::new(config.words.clone(), timing)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word_index % self.words.len()]
    }

    /// Type or delete one character and return the delay before the next step.
    pub fn step(&mut self) -> Duration {
        let full = &self.words[self.word_index % self.words.len()];
        let full_len = full.chars().count();

        self.typed = if self.deleting {
            self.typed.saturating_sub(1)
        } else {
            (self.typed + 1).min(full_len)
        };
        self.text = full.chars().take(self.typed).collect();

        if !self.deleting && self.typed == full_len {
            self.deleting = true;
            self.timing.hold
        } else if self.deleting && self.typed == 0 {
            self.deleting = false;
            self.word_index = self.word_index.wrapping_add(1);
            self.timing.next_word
        } else if self.deleting {
            self.timing.delete_delay
        } else {
            self.timing.type_delay
        }
    }

    /// Schedule the first step at `now`.
    pub fn start(&mut self, now: Duration) {
        self.next_due = Some(now);
    }

    /// Run every step that has come due by `now`. Returns true if the text changed.
    pub fn update(&mut self, now: Duration) -> bool {
        let mut changed = false;
        while let Some(due) = self.next_due {
            if due > now {
                break;
            }
            let delay = self.step().max(MIN_STEP);
            self.next_due = Some(due + delay);
            changed = true;
        }
        changed
    }

    pub fn dispose(&mut self) {
        if self.next_due.take().is_some() {
            debug!("typewriter stopped at word {}", self.word_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai_dev() -> Typewriter {
        Typewriter::new(vec!["AI".into(), "Dev".into()], TypewriterTiming::default()).unwrap()
    }

    #[test]
    fn passes_through_every_prefix() {
        let mut tw = ai_dev();
        let seen: Vec<String> = (0..12)
            .map(|_| {
                tw.step();
                tw.text().to_string()
            })
            .collect();
        assert_eq!(
            seen,
            ["A", "AI", "A", "", "D", "De", "Dev", "De", "D", "", "A", "AI"]
        );
    }

    #[test]
    fn delays_follow_the_phase() {
        let mut tw = ai_dev();
        let t = TypewriterTiming::default();
        assert_eq!(tw.step(), t.type_delay); // "A"
        assert_eq!(tw.step(), t.hold); // "AI"
        assert_eq!(tw.step(), t.delete_delay); // "A"
        assert_eq!(tw.step(), t.next_word); // ""
        assert_eq!(tw.current_word(), "Dev");
    }

    #[test]
    fn empty_list_is_an_error() {
        assert!(Typewriter::new(Vec::new(), TypewriterTiming::default()).is_err());
    }

    #[test]
    fn all_zero_delays_are_rejected() {
        let timing = TypewriterTiming {
            type_delay: Duration::ZERO,
            delete_delay: Duration::ZERO,
            hold: Duration::ZERO,
            next_word: Duration::ZERO,
        };
        assert!(matches!(
            Typewriter::new(vec!["AI".into()], timing),
            Err(Error::InvalidParam(_))
        ));
    }

    #[test]
    fn zero_delays_still_let_update_return() {
        // Only the hold is non-zero, and an empty word never types anything
        let timing = TypewriterTiming {
            type_delay: Duration::ZERO,
            delete_delay: Duration::ZERO,
            hold: Duration::from_millis(10),
            next_word: Duration::ZERO,
        };
        let mut tw = Typewriter::new(vec!["".into(), "AI".into()], timing).unwrap();
        tw.start(Duration::ZERO);
        assert!(tw.update(Duration::from_millis(50)));
        assert!(!tw.update(Duration::from_millis(50)));
    }

    #[test]
    fn multibyte_words_are_cut_on_char_boundaries() {
        let mut tw = Typewriter::new(vec!["héllo".into()], TypewriterTiming::default()).unwrap();
        tw.step();
        tw.step();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn update_runs_due_steps_only() {
        let mut tw = ai_dev();
        assert!(!tw.update(Duration::from_secs(10)));

        tw.start(Duration::ZERO);
        assert!(tw.update(Duration::ZERO));
        assert_eq!(tw.text(), "A");
        assert!(!tw.update(Duration::from_millis(99)));
        assert!(tw.update(Duration::from_millis(100)));
        assert_eq!(tw.text(), "AI");
        // Held for two seconds
        assert!(!tw.update(Duration::from_millis(2099)));
        assert!(tw.update(Duration::from_millis(2100)));
        assert_eq!(tw.text(), "A");
    }

    #[test]
    fn disposed_typewriter_stops() {
        let mut tw = ai_dev();
        tw.start(Duration::ZERO);
        tw.dispose();
        assert!(!tw.update(Duration::from_secs(5)));
        assert_eq!(tw.text(), "");
    }
}
