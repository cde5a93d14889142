//! Rule engine and view-facing types for Zheng Shangyou, a turn-based
//! card-shedding game for 2-4 players.
//!
//! The engine owns all round state; the browser frontend only renders
//! [`GameStatePublic`] snapshots and feeds [`PlayerIntent`] values back in.

use serde::{Deserialize, Serialize};

pub mod cards;
pub mod combination;
pub mod game;

pub use cards::{full_deck, Card, CardRank, CardSuit, THREE_OF_CLUBS};
pub use combination::{combination_type, highest_suit, Combination};
pub use game::{Game, Player};

/// One seat as the view layer sees it. `cards` is only populated while the
/// player's hand is revealed; otherwise the view gets just the count.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: usize,
    pub name: String,
    pub cards: Option<Vec<Card>>,
    pub hand_len: usize,
}

/// Per-render snapshot of the table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameStatePublic {
    pub players: Vec<PlayerPublic>,
    pub play_area: Vec<Card>,
    pub current_player: usize,
    pub message: String,
}

/// User intents the view layer dispatches against the engine.
///
/// `Reset` tears the whole round down to the pre-deal state and is handled
/// by the application shell (the `Game` is dropped and the setup screen
/// shown again); the other intents mutate the running round.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PlayerIntent {
    Reveal { player: usize },
    Play { player: usize, cards: Vec<Card> },
    Pass { player: usize },
    Reset,
}
