use serde::Serialize;

use crate::{Direction, TransitionConfig};

/// Horizontal side of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Sign of the horizontal offset that places a card on this side.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Which way the incoming and outgoing cards slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionPlan {
    pub enter_from: Side,
    pub exit_toward: Side,
}

impl TransitionPlan {
    pub fn for_direction(direction: Direction) -> Self {
        let enter_from = match direction {
            Direction::Forward => Side::Right,
            Direction::Backward => Side::Left,
        };
        Self {
            enter_from,
            exit_toward: enter_from.opposite(),
        }
    }

    pub fn offsets(&self, config: &TransitionConfig) -> SlideOffsets {
        SlideOffsets {
            enter_x: self.enter_from.sign() * config.offset_px,
            exit_x: self.exit_toward.sign() * config.offset_px,
            stiffness: config.stiffness,
            damping: config.damping,
            opacity_seconds: config.opacity_seconds,
        }
    }
}

/// Concrete animation parameters handed to a renderer. The active card
/// always rests at `x = 0` with full opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlideOffsets {
    pub enter_x: f32,
    pub exit_x: f32,
    pub stiffness: f32,
    pub damping: f32,
    pub opacity_seconds: f32,
}
