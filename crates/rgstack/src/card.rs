#![forbid(unsafe_code)]

//! Per-slot render input and the card renderer interface.
//!
//! The stack never draws cards. Each frame it hands the host four
//! [`CardConfiguration`]s, one per slot, and the host builds a card view
//! for each through [`ConfigurableCard`].

use std::borrow::Cow;

use rgstack_core::{Layout, SLOT_COUNT};

/// Layout and data for one slot in one frame.
#[derive(Debug, PartialEq)]
pub struct CardConfiguration<'a, D> {
    /// Where and how to draw the card.
    pub layout: Layout,
    /// Data for the card, or `None` past either end of the deck.
    pub data: Option<&'a D>,
}

// Manual impls: a derive would require `D: Clone`/`D: Copy`.
impl<D> Clone for CardConfiguration<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for CardConfiguration<'_, D> {}

impl<'a, D> CardConfiguration<'a, D> {
    /// Slot data, or the default value past either end of the deck.
    #[must_use]
    pub fn data_or_default(&self) -> Cow<'a, D>
    where
        D: Clone + Default,
    {
        match self.data {
            Some(data) => Cow::Borrowed(data),
            None => Cow::Owned(D::default()),
        }
    }

    /// Whether the layout leaves the card visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.layout.is_hidden()
    }
}

/// One frame of output: a configuration per slot, slot 0 first.
pub type StackConfiguration<'a, D> = [CardConfiguration<'a, D>; SLOT_COUNT];

/// A card view the host can build from optional slot data.
///
/// The `Default` bound on [`Data`](ConfigurableCard::Data) is the fallback
/// capability: cards built from `None` must render a deterministic default.
pub trait ConfigurableCard: Sized {
    /// Value the card displays.
    type Data: Default;

    /// Build a card. `None` means the slot is past either end of the deck.
    fn new(data: Option<&Self::Data>) -> Self;
}

/// A built card paired with its layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCard<C> {
    /// The card view.
    pub card: C,
    /// Where to draw it.
    pub layout: Layout,
}

/// Build the card for one slot.
#[must_use]
pub fn place_card<C: ConfigurableCard>(
    configuration: &CardConfiguration<'_, C::Data>,
) -> PlacedCard<C> {
    PlacedCard {
        card: C::new(configuration.data),
        layout: configuration.layout,
    }
}

/// Build the cards for every slot, slot 0 first.
#[must_use]
pub fn place_cards<C: ConfigurableCard>(
    configuration: &StackConfiguration<'_, C::Data>,
) -> [PlacedCard<C>; SLOT_COUNT] {
    configuration.each_ref().map(place_card::<C>)
}
