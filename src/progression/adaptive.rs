//! Windowed adaptive difficulty
//!
//! Moves a skill level up or down from the accuracy of the last few
//! answers. Between the lower and raise thresholds nothing changes, so a
//! single lucky or unlucky answer cannot make the level flip back and forth.

use serde::{Deserialize, Serialize};

/// Lowest skill level
pub const MIN_LEVEL: u8 = 0;
/// Highest skill level
pub const MAX_LEVEL: u8 = 4;
/// Answers kept per skill group
pub const DEFAULT_WINDOW: usize = 6;

/// Tuning for the controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveConfig {
    /// Answers kept in the window
    pub window_size: usize,
    /// Answers needed before the level may move
    pub min_sample: usize,
    /// Accuracy at or above which the level goes up
    pub raise_threshold: f64,
    /// Accuracy at or below which the level goes down
    pub lower_threshold: f64,
    pub min_level: u8,
    pub max_level: u8,
    /// Level new ability models start at
    pub initial_level: u8,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW,
            min_sample: 4,
            raise_threshold: 0.8,
            lower_threshold: 0.35,
            min_level: MIN_LEVEL,
            max_level: MAX_LEVEL,
            initial_level: 2,
        }
    }
}

/// One answer to fold into a level
#[derive(Debug, Clone, Copy)]
pub struct AdaptiveInput<'a> {
    pub current_level: u8,
    pub recent_answers: &'a [bool],
    pub correct: bool,
    pub window_size: usize,
    pub min_level: u8,
    pub max_level: u8,
}

impl<'a> AdaptiveInput<'a> {
    /// Input with the default window and level bounds
    pub fn new(current_level: u8, recent_answers: &'a [bool], correct: bool) -> Self {
        Self {
            current_level,
            recent_answers,
            correct,
            window_size: DEFAULT_WINDOW,
            min_level: MIN_LEVEL,
            max_level: MAX_LEVEL,
        }
    }
}

/// Result of one controller step
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveOutcome {
    pub next_level: u8,
    /// The window after the new answer, oldest first
    pub next_recent: Vec<bool>,
    /// Accuracy over the window, `None` while the sample is too small
    pub rate: Option<f64>,
}

impl AdaptiveConfig {
    /// Append `correct` to the window and move the level if accuracy warrants it
    pub fn step(&self, current_level: u8, recent_answers: &[bool], correct: bool) -> AdaptiveOutcome {
        let window = self.window_size.max(1);
        let mut next_recent: Vec<bool> = recent_answers.to_vec();
        next_recent.push(correct);
        if next_recent.len() > window {
            next_recent.drain(..next_recent.len() - window);
        }

        if next_recent.len() < self.min_sample {
            return AdaptiveOutcome { next_level: current_level, next_recent, rate: None };
        }

        let hits = next_recent.iter().filter(|&&c| c).count();
        let rate = hits as f64 / next_recent.len() as f64;

        let next_level = if rate >= self.raise_threshold && current_level < self.max_level {
            current_level + 1
        } else if rate <= self.lower_threshold && current_level > self.min_level {
            current_level - 1
        } else {
            current_level
        };

        if next_level != current_level {
            log::trace!("Accuracy {:.2} moves level {} -> {}", rate, current_level, next_level);
        }

        AdaptiveOutcome { next_level, next_recent, rate: Some(rate) }
    }
}

/// Controller step with the default thresholds
pub fn update_adaptive_difficulty(input: AdaptiveInput<'_>) -> AdaptiveOutcome {
    let config = AdaptiveConfig {
        window_size: input.window_size,
        min_level: input.min_level,
        max_level: input.max_level,
        ..AdaptiveConfig::default()
    };
    config.step(input.current_level, input.recent_answers, input.correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_accuracy_raises_level() {
        // Window becomes [T, T, T, T, F]: 0.8
        let out = update_adaptive_difficulty(AdaptiveInput::new(2, &[true, true, true, true], false));
        assert_eq!(out.next_level, 3);
        assert_eq!(out.next_recent, vec![true, true, true, true, false]);
        assert_eq!(out.rate, Some(0.8));
    }

    #[test]
    fn test_low_accuracy_lowers_level() {
        // Window becomes [F, F, T, F, F]: 0.2
        let out = update_adaptive_difficulty(AdaptiveInput::new(3, &[false, false, true, false], false));
        assert_eq!(out.next_level, 2);
    }

    #[test]
    fn test_small_sample_never_moves() {
        let out = update_adaptive_difficulty(AdaptiveInput::new(2, &[true], true));
        assert_eq!(out.next_level, 2);
        assert_eq!(out.rate, None);
        let out = update_adaptive_difficulty(AdaptiveInput::new(2, &[false], false));
        assert_eq!(out.next_level, 2);
    }

    #[test]
    fn test_dead_zone_holds_level() {
        // [T, F, T, F, T, F]: 0.5
        let out = update_adaptive_difficulty(AdaptiveInput::new(2, &[true, false, true, false, true], false));
        assert_eq!(out.next_level, 2);
    }

    #[test]
    fn test_window_truncates_oldest() {
        let history = [false, false, false, true, true, true];
        let out = update_adaptive_difficulty(AdaptiveInput::new(1, &history, true));
        assert_eq!(out.next_recent, vec![false, false, true, true, true, true]);
        // 4/6 sits in the dead zone
        assert_eq!(out.next_level, 1);
    }

    #[test]
    fn test_level_bounds() {
        let top = update_adaptive_difficulty(AdaptiveInput::new(4, &[true; 5], true));
        assert_eq!(top.next_level, 4);
        let bottom = update_adaptive_difficulty(AdaptiveInput::new(0, &[false; 5], false));
        assert_eq!(bottom.next_level, 0);
    }

    #[test]
    fn test_custom_window() {
        let input = AdaptiveInput { window_size: 4, ..AdaptiveInput::new(2, &[false, false, true, true, true], true) };
        let out = update_adaptive_difficulty(input);
        assert_eq!(out.next_recent.len(), 4);
        assert_eq!(out.next_level, 3);
    }
}
