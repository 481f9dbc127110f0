use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{CarouselEvent, CarouselState, Transition};

/// Deterministic stand-in for the auto-advance interval timer.
///
/// Elapsed time is fed in explicitly and converted into whole ticks, which
/// lets scripted replays and tests drive the carousel without sleeping.
#[derive(Debug, Clone)]
pub struct AutoAdvanceClock {
    interval: Duration,
    elapsed: Duration,
}

impl AutoAdvanceClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Restarts the interval phase, as re-arming the timer would.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Adds `delta` and returns how many ticks became due.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.elapsed += delta;
        let mut ticks = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            ticks += 1;
        }
        ticks
    }
}

/// One entry of a replay script: either an input event or a pause in
/// wall-clock time during which the timer may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptStep {
    Wait { wait_ms: u64 },
    Event(CarouselEvent),
}

/// Runs `steps` against `state`, returning every transition in which a
/// navigation operation ran.
///
/// The timer is disarmed while hovered and re-armed from zero on pointer
/// leave, so time spent paused never counts towards the next tick.
pub fn replay(
    state: &mut CarouselState,
    clock: &mut AutoAdvanceClock,
    steps: &[ScriptStep],
) -> Vec<Transition> {
    let mut moves = Vec::new();
    for step in steps {
        match *step {
            ScriptStep::Wait { wait_ms } => {
                if state.is_paused() {
                    continue;
                }
                let ticks = clock.advance(Duration::from_millis(wait_ms));
                for _ in 0..ticks {
                    let transition = state.apply(CarouselEvent::Tick);
                    if transition.advanced {
                        moves.push(transition);
                    }
                }
            }
            ScriptStep::Event(event) => {
                if event == CarouselEvent::PointerLeave && state.is_paused() {
                    clock.reset();
                }
                let transition = state.apply(event);
                if transition.advanced {
                    moves.push(transition);
                }
            }
        }
    }
    moves
}
