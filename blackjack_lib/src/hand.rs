use crate::card::Card;
use serde::Serialize;
use std::fmt::Display;

/// Highest score that does not bust.
pub const BLACKJACK: u32 = 21;

/// Points removed when an ace is downgraded from 11 to 1.
const ACE_DOWNGRADE: u32 = 10;

/// An ordered sequence of cards held by one participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Hand {
        Hand { cards: Vec::new() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn first(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Scores the hand. Every ace starts at 11 and is downgraded to 1, one at a time,
    /// while the total is over 21.
    pub fn score(&self) -> u32 {
        let mut total: u32 = self.cards.iter().map(|card| u32::from(card.value())).sum();
        let aces = self.cards.iter().filter(|card| card.is_ace()).count();
        for _ in 0..aces {
            if total <= BLACKJACK {
                break;
            }
            total -= ACE_DOWNGRADE;
        }
        total
    }

    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Renders the first card face up and every other card as `*`.
    pub fn masked(&self) -> String {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if i == 0 {
                    card.to_string()
                } else {
                    "*".to_string()
                }
            })
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards = self
            .cards
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{}", cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Hand {
            cards: iter.into_iter().collect(),
        }
    }
}
