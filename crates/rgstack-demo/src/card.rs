//! Sample card data.

use std::fmt;

use rgstack::{CardInfo, ConfigurableCard, Size};
use serde::Serialize;

/// Card width used by the sample deck; height is 1.5× the width.
pub const SAMPLE_CARD_WIDTH: f64 = 320.0;

const PALETTE: [Color; 5] = [
    Color::Blue,
    Color::Red,
    Color::Orange,
    Color::Green,
    Color::Yellow,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Red,
    Orange,
    Green,
    Yellow,
    Black,
}

impl Color {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// What a demo card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demo {
    pub color: Color,
    pub text: String,
}

impl Default for Demo {
    /// Placeholder for slots past either end of the deck.
    fn default() -> Self {
        Self {
            color: Color::Black,
            text: "*E*".to_string(),
        }
    }
}

/// A rendered demo card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoCard {
    pub demo: Demo,
}

impl ConfigurableCard for DemoCard {
    type Data = Demo;

    fn new(data: Option<&Demo>) -> Self {
        Self {
            demo: data.cloned().unwrap_or_default(),
        }
    }
}

/// `count` cards numbered from 0, cycling through the palette.
#[must_use]
pub fn sample_deck(count: usize) -> Vec<Demo> {
    (0..count)
        .map(|i| Demo {
            color: PALETTE[i % PALETTE.len()],
            text: i.to_string(),
        })
        .collect()
}

/// Geometry of the sample deck: 320×480 cards with a 30pt gap.
#[must_use]
pub fn sample_card_info() -> CardInfo {
    CardInfo::new(Size::new(SAMPLE_CARD_WIDTH, SAMPLE_CARD_WIDTH * 1.5))
        .with_gap_distance(30.0)
        .with_min_scale_for_back_card(0.8)
}
