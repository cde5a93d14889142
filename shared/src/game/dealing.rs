//! Shuffling, the two-player burn, dealing and starting-player resolution.

use rand::seq::SliceRandom;

use crate::cards::{full_deck, Card, THREE_OF_CLUBS};

use super::{Game, Player};

/// Share of the deck burned before a two-player deal.
const BURN_FRACTION: f64 = 0.25;

impl Game {
    /// Deal a fresh round for 2-4 players from a uniformly shuffled deck.
    ///
    /// `num_players` is pre-constrained to 2..=4 by the setup screen.
    pub fn new(num_players: usize) -> Self {
        let mut deck = full_deck();
        deck.shuffle(&mut rand::rng());
        new_round_from_deck(num_players, deck)
    }

    #[cfg(test)]
    pub fn new_with_seed(num_players: usize, seed: u64) -> Self {
        new_round_from_deck(num_players, shuffled_deck_with_seed(seed))
    }
}

/// Deal a round using the provided deck order.
///
/// For two players the top quarter of the deck (13 cards) is burned and
/// never dealt. Hands get `floor(remaining / num_players)` cards each;
/// leftover cards beyond the floor division are dropped, matching the table
/// rules (3 players on 52 cards leaves one card out of play).
pub(crate) fn new_round_from_deck(num_players: usize, mut deck: Vec<Card>) -> Game {
    let mut three_of_clubs_burned = false;
    if num_players == 2 {
        let cards_to_burn = (deck.len() as f64 * BURN_FRACTION).floor() as usize;
        let burned: Vec<Card> = deck.drain(..cards_to_burn).collect();
        three_of_clubs_burned = burned.contains(&THREE_OF_CLUBS);
    }

    let per_hand = deck.len() / num_players;
    let mut players = Vec::with_capacity(num_players);
    for i in 0..num_players {
        let mut hand: Vec<Card> = deck.drain(..per_hand).collect();
        hand.sort();
        players.push(Player {
            id: i,
            name: format!("Player {}", i + 1),
            hand,
            revealed: false,
        });
    }

    let starting_player = find_starting_player(&players, three_of_clubs_burned);

    Game {
        players,
        play_area: Vec::new(),
        current_player: starting_player,
        starting_player,
        consecutive_passes: 0,
        message: format!("Player {} starts the game!", starting_player + 1),
    }
}

/// Who leads the first trick.
///
/// When the 3♣ survived the deal its holder starts. When it was burned,
/// each hand is reduced to a signature (its most frequent rank, lowest rank
/// on ties) and hands are compared in seat order: a hand takes the lead
/// only on a strictly lower signature rank, or on an equal rank with a
/// strictly higher frequency than the best seen so far. The comparison is
/// order-dependent by design and must stay a running scan, not a sort.
pub(crate) fn find_starting_player(players: &[Player], three_of_clubs_burned: bool) -> usize {
    if !three_of_clubs_burned {
        for (i, p) in players.iter().enumerate() {
            if p.hand.contains(&THREE_OF_CLUBS) {
                return i;
            }
        }
    }

    let mut lowest_player = 0;
    let mut lowest_rank = usize::MAX;
    let mut highest_frequency = 0usize;

    for (idx, p) in players.iter().enumerate() {
        let mut rank_counts = [0usize; 13];
        for card in &p.hand {
            rank_counts[card.rank().as_usize()] += 1;
        }

        // Scanning ranks in ascending order makes the tie on equal
        // frequencies resolve to the lowest rank.
        let mut signature: Option<(usize, usize)> = None;
        for (rank, &count) in rank_counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            match signature {
                Some((_, best)) if count <= best => {}
                _ => signature = Some((rank, count)),
            }
        }

        if let Some((rank, frequency)) = signature {
            if rank < lowest_rank || (rank == lowest_rank && frequency > highest_frequency) {
                lowest_player = idx;
                lowest_rank = rank;
                highest_frequency = frequency;
            }
        }
    }

    lowest_player
}

#[cfg(test)]
pub(crate) fn shuffled_deck_with_seed(seed: u64) -> Vec<Card> {
    // Simple LCG for deterministic shuffling in tests
    fn lcg(next: &mut u64) -> u32 {
        // Constants from Numerical Recipes
        *next = next.wrapping_mul(1664525).wrapping_add(1013904223);
        (*next >> 16) as u32
    }
    let mut deck = full_deck();
    let mut s = seed;
    // Fisher-Yates
    for i in (1..deck.len()).rev() {
        let r = lcg(&mut s) as usize % (i + 1);
        deck.swap(i, r);
    }
    deck
}
