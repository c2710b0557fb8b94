//! Playing cards and their blackjack point values.

use serde::Serialize;
use std::fmt::Display;

/// The four suits of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

/// Every suit, in the order a fresh deck is built.
pub const SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

impl Suit {
    /// The symbol used when a card is rendered.
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

/// The thirteen ranks of a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// Every rank, in the order a fresh deck is built.
pub const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// Short label used when a card is rendered, e.g. `"10"` or `"Q"`.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Base point value of the rank. Aces count as their soft value of 11,
    /// hand scoring downgrades them to 1 when needed.
    pub fn value(&self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }
}

/// A single immutable playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Associated function to create a new `Card` from a suit and a rank.
    pub const fn new(suit: Suit, rank: Rank) -> Card {
        Card { suit, rank }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Blackjack value of the card, always in `2..=11`.
    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_cards_are_worth_ten() {
        for rank in [Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(Card::new(Suit::Clubs, rank).value(), 10);
        }
    }

    #[test]
    fn ace_defaults_to_soft_value() {
        let ace = Card::new(Suit::Hearts, Rank::Ace);
        assert!(ace.is_ace());
        assert_eq!(ace.value(), 11);
    }

    #[test]
    fn every_value_is_in_range() {
        for suit in SUITS {
            for rank in RANKS {
                let value = Card::new(suit, rank).value();
                assert!((2..=11).contains(&value), "{rank:?} has value {value}");
            }
        }
    }

    #[test]
    fn numeric_ranks_match_their_label() {
        for rank in &RANKS[..9] {
            assert_eq!(rank.label().parse::<u8>().ok(), Some(rank.value()));
        }
    }

    #[test]
    fn display_is_rank_then_suit() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ten).to_string(), "10♠");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Queen).to_string(), "Q♦");
    }
}
