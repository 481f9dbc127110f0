//! Core library for the testimonial carousel.
//!
//! The carousel shows one testimonial at a time from a fixed, circular list.
//! It advances on a timer, accepts manual navigation from buttons, arrow keys
//! and indicator dots, and suspends the timer while the pointer hovers the
//! viewport. Each module owns one concern; [`session`] ties them together
//! into a mounted component with deterministic teardown.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod session;
pub mod timeline;
pub mod transition;

pub use carousel::{CarouselState, Direction, Step};
pub use catalog::{Testimonial, TestimonialCatalog};
pub use config::{AppConfig, CarouselConfig, TransitionConfig};
pub use error::{CarouselError, Result};
pub use input::{CarouselEvent, Key, Transition};
pub use render::{CarouselView, Indicator};
pub use session::{AdvanceObserver, CarouselSession};
pub use timeline::{replay, AutoAdvanceClock, ScriptStep};
pub use transition::{Side, SlideOffsets, TransitionPlan};
