use serde::{Deserialize, Serialize};

use crate::{CarouselError, Result};

/// Most recent navigation intent. Only used to pick the slide animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Single step around the circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Next,
    Previous,
}

impl Step {
    pub fn direction(self) -> Direction {
        match self {
            Step::Next => Direction::Forward,
            Step::Previous => Direction::Backward,
        }
    }
}

/// State of a mounted carousel over `len` items.
///
/// `current_index` always lies in `[0, len)`; every transition normalises
/// through modular arithmetic so no operation can fail once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    direction: Direction,
    paused: bool,
    len: usize,
}

impl CarouselState {
    /// Starts at the first item, moving forward, not paused.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(CarouselError::EmptyCatalog);
        }
        Ok(Self {
            current_index: 0,
            direction: Direction::Forward,
            paused: false,
            len,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Moves one item forward or back, wrapping at either end. Accepted
    /// whether or not the carousel is paused.
    pub fn advance(&mut self, step: Step) {
        self.direction = step.direction();
        self.current_index = match step {
            Step::Next => (self.current_index + 1) % self.len,
            Step::Previous => (self.current_index + self.len - 1) % self.len,
        };
    }

    /// Shows `target` directly. Out-of-range targets are ignored and reported
    /// with `false`.
    ///
    /// A higher index slides forward, a lower one backward, regardless of
    /// wrap-around. Selecting the item already shown keeps the previous
    /// direction.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target >= self.len {
            tracing::debug!(target, len = self.len, "ignoring out-of-range indicator");
            return false;
        }
        if target != self.current_index {
            self.direction = if target > self.current_index {
                Direction::Forward
            } else {
                Direction::Backward
            };
            self.current_index = target;
        }
        true
    }

    /// Suspends or resumes timer-driven advancement.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Timer-driven advance. Returns whether the carousel moved.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.advance(Step::Next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(len: usize) -> CarouselState {
        CarouselState::new(len).unwrap()
    }

    #[test]
    fn starts_at_first_item_moving_forward() {
        let carousel = state(4);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), Direction::Forward);
        assert!(!carousel.is_paused());
    }

    #[test]
    fn rejects_empty_list() {
        assert!(matches!(CarouselState::new(0), Err(CarouselError::EmptyCatalog)));
    }

    #[test]
    fn full_lap_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut carousel = state(len);
                carousel.jump_to(start);
                for _ in 0..len {
                    carousel.advance(Step::Next);
                }
                assert_eq!(carousel.current_index(), start, "len {len}");
            }
        }
    }

    #[test]
    fn next_then_previous_restores_index() {
        for len in 1..=5 {
            for start in 0..len {
                let mut carousel = state(len);
                carousel.jump_to(start);
                carousel.advance(Step::Next);
                carousel.advance(Step::Previous);
                assert_eq!(carousel.current_index(), start);
                assert_eq!(carousel.direction(), Direction::Backward);
            }
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut carousel = state(4);
        carousel.advance(Step::Previous);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn paused_ticks_do_nothing() {
        let mut carousel = state(4);
        carousel.set_paused(true);
        for _ in 0..10 {
            assert!(!carousel.tick());
        }
        assert_eq!(carousel.current_index(), 0);

        carousel.set_paused(false);
        assert!(carousel.tick());
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn manual_navigation_ignores_pause() {
        let mut carousel = state(4);
        carousel.set_paused(true);
        carousel.advance(Step::Next);
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.jump_to(3));
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn jump_sets_exact_index() {
        for prior in [Step::Next, Step::Previous] {
            for target in 0..6 {
                let mut carousel = state(6);
                carousel.advance(prior);
                assert!(carousel.jump_to(target));
                assert_eq!(carousel.current_index(), target);
            }
        }
    }

    #[test]
    fn jump_direction_compares_indices() {
        let mut carousel = state(4);
        carousel.jump_to(2);
        assert_eq!(carousel.direction(), Direction::Forward);

        let mut carousel = state(4);
        carousel.jump_to(3);
        assert_eq!(carousel.direction(), Direction::Forward);

        let mut carousel = state(4);
        carousel.advance(Step::Previous);
        carousel.jump_to(0);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.direction(), Direction::Backward);

        let mut carousel = state(4);
        carousel.jump_to(3);
        carousel.jump_to(1);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn jump_to_current_keeps_direction() {
        let mut carousel = state(4);
        carousel.advance(Step::Previous);
        assert!(carousel.jump_to(3));
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut carousel = state(4);
        carousel.advance(Step::Next);
        assert!(!carousel.jump_to(4));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.direction(), Direction::Forward);
    }
}
