use std::fmt::Write as _;

use serde::Serialize;

use crate::{CarouselState, Direction, Testimonial, TestimonialCatalog, TransitionPlan};

/// One indicator dot under the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Everything a front end needs to draw the carousel for one state.
#[derive(Debug, Clone, Serialize)]
pub struct CarouselView<'a> {
    pub card: &'a Testimonial,
    pub index: usize,
    pub indicators: Vec<Indicator>,
    pub transition: TransitionPlan,
    pub paused: bool,
}

impl<'a> CarouselView<'a> {
    /// Returns `None` if the catalog is shorter than the state expects.
    pub fn build(state: &CarouselState, catalog: &'a TestimonialCatalog) -> Option<Self> {
        Self::at(
            catalog,
            state.current_index(),
            state.direction(),
            state.is_paused(),
        )
    }

    pub fn at(
        catalog: &'a TestimonialCatalog,
        index: usize,
        direction: Direction,
        paused: bool,
    ) -> Option<Self> {
        let card = catalog.get(index)?;
        let indicators = (0..catalog.len())
            .map(|i| Indicator {
                index: i,
                active: i == index,
            })
            .collect();

        Some(Self {
            card,
            index,
            indicators,
            transition: TransitionPlan::for_direction(direction),
            paused,
        })
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\u{201c} {}", self.card.testimonial);
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", self.card.handle());
        let _ = writeln!(out, "  {}", self.card.affiliation());
        let _ = writeln!(out, "  [{}]", self.card.alt_text());
        let dots: Vec<&str> = self
            .indicators
            .iter()
            .map(|dot| if dot.active { "●" } else { "○" })
            .collect();
        let _ = write!(out, "{}", dots.join(" "));
        if self.paused {
            let _ = write!(out, "  (paused)");
        }
        out
    }
}
