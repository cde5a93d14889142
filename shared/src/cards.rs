//! Card-related types and constants for Zheng Shangyou.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Card rank values in game-strength order (0=Three, ..., 11=Ace, 12=Two).
///
/// In Zheng Shangyou the 2 is the strongest single rank and the 3 the
/// weakest, so the derived `Ord` is the comparison used by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardRank {
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Two = 12,
}

impl CardRank {
    /// Convert from u8 to CardRank. Panics if value > 12.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => CardRank::Three,
            1 => CardRank::Four,
            2 => CardRank::Five,
            3 => CardRank::Six,
            4 => CardRank::Seven,
            5 => CardRank::Eight,
            6 => CardRank::Nine,
            7 => CardRank::Ten,
            8 => CardRank::Jack,
            9 => CardRank::Queen,
            10 => CardRank::King,
            11 => CardRank::Ace,
            12 => CardRank::Two,
            _ => panic!("Invalid card rank: {}", value),
        }
    }

    /// Convert to usize for array indexing.
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// Convert to u8 for rank arithmetic (straight runs).
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Card suit values in tie-break strength order (0=Clubs, ..., 3=Spades)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardSuit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl CardSuit {
    /// Convert from u8 to CardSuit. Panics if value > 3.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => CardSuit::Clubs,
            1 => CardSuit::Diamonds,
            2 => CardSuit::Hearts,
            3 => CardSuit::Spades,
            _ => panic!("Invalid card suit: {}", value),
        }
    }

    /// Convert to usize for array indexing.
    pub fn as_usize(self) -> usize {
        self as usize
    }
}

/// A playing card represented as a compact u8 value (`suit * 13 + rank`).
///
/// The u8 doubles as a stable identity: all 52 cards are distinct, so value
/// equality is exact-card equality and hands can remove played cards by
/// plain set difference.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card(pub u8);

/// The 3♣, which decides the starting player when it survives the deal.
pub const THREE_OF_CLUBS: Card = Card(0);

impl Card {
    /// Create a new card from rank and suit
    pub fn new(rank: CardRank, suit: CardSuit) -> Self {
        Card((suit as u8) * 13 + (rank as u8))
    }

    /// Get the rank of this card
    pub fn rank(self) -> CardRank {
        CardRank::from_u8(self.0 % 13)
    }

    /// Get the suit of this card
    pub fn suit(self) -> CardSuit {
        CardSuit::from_u8(self.0 / 13)
    }

    /// Get the rank as a string (3, 4, ..., 10, J, Q, K, A, 2)
    pub fn rank_str(self) -> &'static str {
        match self.rank() {
            CardRank::Three => "3",
            CardRank::Four => "4",
            CardRank::Five => "5",
            CardRank::Six => "6",
            CardRank::Seven => "7",
            CardRank::Eight => "8",
            CardRank::Nine => "9",
            CardRank::Ten => "10",
            CardRank::Jack => "J",
            CardRank::Queen => "Q",
            CardRank::King => "K",
            CardRank::Ace => "A",
            CardRank::Two => "2",
        }
    }

    /// Get the suit as a character (♣, ♦, ♥, ♠)
    pub fn suit_char(self) -> char {
        match self.suit() {
            CardSuit::Clubs => '♣',
            CardSuit::Diamonds => '♦',
            CardSuit::Hearts => '♥',
            CardSuit::Spades => '♠',
        }
    }

    /// Get the card as a string like "3♣", "10♦", etc.
    pub fn label(self) -> String {
        format!("{}{}", self.rank_str(), self.suit_char())
    }

    /// Check if this is a red suit (hearts or diamonds)
    pub fn is_red(self) -> bool {
        matches!(self.suit(), CardSuit::Hearts | CardSuit::Diamonds)
    }
}

// Hands sort ascending by (rank, suit); the raw u8 is suit-major, so the
// derived order would be wrong.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.rank(), self.suit()).cmp(&(other.rank(), other.suit()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Produce the full 52-card deck in a fixed order, no randomness.
pub fn full_deck() -> Vec<Card> {
    (0..52).map(Card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_has_52_unique_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        let pairs: HashSet<(CardSuit, CardRank)> =
            deck.iter().map(|c| (c.suit(), c.rank())).collect();
        assert_eq!(pairs.len(), 52);
    }

    #[test]
    fn rank_order_puts_two_on_top() {
        assert!(CardRank::Two > CardRank::Ace);
        assert!(CardRank::Ace > CardRank::King);
        assert!(CardRank::Three < CardRank::Four);
    }

    #[test]
    fn card_order_is_rank_then_suit() {
        let three_clubs = Card::new(CardRank::Three, CardSuit::Clubs);
        let three_spades = Card::new(CardRank::Three, CardSuit::Spades);
        let two_clubs = Card::new(CardRank::Two, CardSuit::Clubs);
        assert!(three_clubs < three_spades);
        assert!(three_spades < two_clubs);
        assert_eq!(three_clubs, THREE_OF_CLUBS);
    }

    #[test]
    fn round_trip_rank_and_suit() {
        for c in full_deck() {
            assert_eq!(Card::new(c.rank(), c.suit()), c);
        }
    }

    #[test]
    fn labels_match_rank_and_suit() {
        assert_eq!(Card::new(CardRank::Ten, CardSuit::Diamonds).label(), "10♦");
        assert_eq!(THREE_OF_CLUBS.label(), "3♣");
        assert!(Card::new(CardRank::Queen, CardSuit::Hearts).is_red());
        assert!(!Card::new(CardRank::Queen, CardSuit::Spades).is_red());
    }
}
