//! A single 52 card deck that reshuffles itself when it runs out.

use crate::card::{Card, RANKS, SUITS};
use lazy_static::lazy_static;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Number of cards in a freshly built deck.
pub const DECK_SIZE: usize = 52;

lazy_static! {
    /// Every (suit, rank) pair in suit-major order. Fresh decks are shuffled copies of this.
    static ref FRESH_DECK: Vec<Card> = SUITS
        .iter()
        .flat_map(|&suit| RANKS.iter().map(move |&rank| Card::new(suit, rank)))
        .collect();
}

/// Struct for the table's deck. Cards are drawn from the end of `cards`.
pub struct Deck {
    cards: Vec<Card>,
    rng: StdRng,
    shuffles: u32,
}

impl Deck {
    /// Associated function to create a new shuffled `Deck` seeded from the operating system.
    pub fn new() -> Deck {
        Deck::from_rng(StdRng::from_entropy())
    }

    /// Associated function to create a new shuffled `Deck` whose every shuffle is reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Deck {
        Deck::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates a deck that deals `cards` in the given order, first element first.
    /// Once those cards are gone the deck reshuffles into a full deck using `seed`.
    pub fn stacked<I: IntoIterator<Item = Card>>(cards: I, seed: u64) -> Deck {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Deck {
            cards,
            rng: StdRng::seed_from_u64(seed),
            shuffles: 0,
        }
    }

    fn from_rng(rng: StdRng) -> Deck {
        let mut deck = Deck {
            cards: Vec::with_capacity(DECK_SIZE),
            rng,
            shuffles: 0,
        };
        deck.build();
        deck
    }

    /// Replaces whatever is left with all 52 cards in a uniformly random order.
    pub fn build(&mut self) {
        self.cards.clear();
        self.cards.extend(FRESH_DECK.iter().copied());
        self.cards.shuffle(&mut self.rng);
        self.shuffles += 1;
        debug!(shuffles = self.shuffles, "deck rebuilt and shuffled");
    }

    /// Rebuilds the deck only when it is empty. Returns true if a reshuffle happened.
    pub fn reshuffle_if_needed(&mut self) -> bool {
        if self.cards.is_empty() {
            self.build();
            true
        } else {
            false
        }
    }

    /// Removes and returns the top card, reshuffling first if the deck is exhausted.
    pub fn draw(&mut self) -> Card {
        loop {
            self.reshuffle_if_needed();
            if let Some(card) = self.cards.pop() {
                return card;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards still in the deck, the next card to be drawn last.
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    /// Number of times the deck has been built and shuffled.
    pub fn shuffles(&self) -> u32 {
        self.shuffles
    }
}

impl Default for Deck {
    fn default() -> Self {
        Deck::new()
    }
}
