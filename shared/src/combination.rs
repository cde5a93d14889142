//! Classification of submitted plays into the game's combination shapes.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardSuit};

/// The shape of a play as seen by the validator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Combination {
    Single,
    Pair,
    Straight,
    Bomb,
    Invalid,
}

/// Classify a selection of cards.
///
/// The straight check runs before the bomb check: with only four suits a
/// five-card same-rank run cannot exist, but the rule order is part of the
/// game's definition. Anything that is not a single, a pair, a run of five
/// or more strictly consecutive ranks, or a three/four of a kind falls
/// through to `Invalid` (including empty selections).
pub fn combination_type(cards: &[Card]) -> Combination {
    let same_rank = cards.windows(2).all(|w| w[0].rank() == w[1].rank());

    if cards.len() == 1 {
        return Combination::Single;
    }

    if cards.len() == 2 && same_rank {
        return Combination::Pair;
    }

    if cards.len() >= 5 {
        let mut ranks: Vec<u8> = cards.iter().map(|c| c.rank().as_u8()).collect();
        ranks.sort_unstable();
        if ranks.windows(2).all(|w| w[1] == w[0] + 1) {
            return Combination::Straight;
        }
    }

    if (cards.len() == 3 || cards.len() == 4) && same_rank {
        return Combination::Bomb;
    }

    Combination::Invalid
}

/// Highest suit present in a play, used to break ties between equal-rank
/// bombs (Clubs < Diamonds < Hearts < Spades).
pub fn highest_suit(cards: &[Card]) -> CardSuit {
    cards
        .iter()
        .map(|c| c.suit())
        .max()
        .unwrap_or(CardSuit::Clubs)
}
