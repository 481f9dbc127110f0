use serde::{Deserialize, Serialize};

use crate::{CarouselState, Direction, Step};

/// Keyboard key as reported by the host, using DOM key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Navigation step bound to this key, if any.
    pub fn step(self) -> Option<Step> {
        match self {
            Key::ArrowLeft => Some(Step::Previous),
            Key::ArrowRight => Some(Step::Next),
            Key::Other => None,
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match value {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::from(value.as_str())
    }
}

impl From<Key> for String {
    fn from(value: Key) -> Self {
        match value {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Other => "Unidentified",
        }
        .to_string()
    }
}

/// Everything the environment can deliver to a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CarouselEvent {
    /// Auto-advance timer fired.
    Tick,
    /// Next button.
    Next,
    /// Previous button.
    Previous,
    Key(Key),
    /// Click on indicator dot `i`.
    SelectIndicator(usize),
    PointerEnter,
    PointerLeave,
}

/// Outcome of applying one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// True when a navigation operation ran, even if it landed on the same
    /// index (a one-item carousel).
    pub advanced: bool,
    /// True when the displayed index changed.
    pub changed: bool,
}

impl CarouselState {
    /// Routes a trigger to the matching state operation.
    pub fn apply(&mut self, event: CarouselEvent) -> Transition {
        let from = self.current_index();
        let advanced = match event {
            CarouselEvent::Tick => self.tick(),
            CarouselEvent::Next => {
                self.advance(Step::Next);
                true
            }
            CarouselEvent::Previous => {
                self.advance(Step::Previous);
                true
            }
            CarouselEvent::Key(key) => match key.step() {
                Some(step) => {
                    self.advance(step);
                    true
                }
                None => false,
            },
            CarouselEvent::SelectIndicator(index) => index != from && self.jump_to(index),
            CarouselEvent::PointerEnter => {
                self.set_paused(true);
                false
            }
            CarouselEvent::PointerLeave => {
                self.set_paused(false);
                false
            }
        };

        let to = self.current_index();
        let transition = Transition {
            from,
            to,
            direction: self.direction(),
            advanced,
            changed: from != to,
        };
        if transition.advanced {
            tracing::debug!(?event, from, to, direction = ?transition.direction, "carousel moved");
        }
        transition
    }
}
