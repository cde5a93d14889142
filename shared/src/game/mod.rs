//! Round/table state machine: one mutable `Game` owns the hands, play area,
//! turn pointer, pass counter and reveal flags.

pub mod dealing;
pub mod playing;
#[cfg(test)]
mod round_tests;

use crate::cards::Card;
use crate::{GameStatePublic, PlayerIntent, PlayerPublic};

#[derive(Clone, Debug)]
pub struct Player {
    pub id: usize,
    pub name: String,
    /// Sorted ascending by (rank, suit) at all times.
    pub hand: Vec<Card>,
    pub revealed: bool,
}

/// All state of one running round.
///
/// The engine deliberately has no win/end detection: hands may reach zero
/// cards and play continues until the round is externally reset.
#[derive(Clone, Debug)]
pub struct Game {
    // Table
    pub players: Vec<Player>,
    pub play_area: Vec<Card>,

    // Turn state
    pub current_player: usize,
    /// Resolved once at deal time, never recomputed while hands mutate.
    pub starting_player: usize,
    pub consecutive_passes: usize,
    pub message: String,
}

impl Game {
    /// Advance the turn pointer cyclically and hide every hand again; the
    /// now-current player has to explicitly re-reveal their own cards.
    pub fn switch_player(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
        for p in &mut self.players {
            p.revealed = false;
        }
    }

    /// Visibility toggle only; no effect on game state.
    pub fn reveal_hand(&mut self, player_idx: usize) {
        if let Some(p) = self.players.get_mut(player_idx) {
            p.revealed = true;
        }
    }

    /// Snapshot for the view layer. Hidden hands are reduced to a count.
    pub fn public(&self) -> GameStatePublic {
        let players = self
            .players
            .iter()
            .map(|p| PlayerPublic {
                id: p.id,
                name: p.name.clone(),
                cards: if p.revealed {
                    Some(p.hand.clone())
                } else {
                    None
                },
                hand_len: p.hand.len(),
            })
            .collect();

        GameStatePublic {
            players,
            play_area: self.play_area.clone(),
            current_player: self.current_player,
            message: self.message.clone(),
        }
    }

    /// Dispatch a view-layer intent. `Reset` is a no-op here: tearing the
    /// round down is the application shell's job.
    pub fn apply_intent(&mut self, intent: PlayerIntent) {
        match intent {
            PlayerIntent::Reveal { player } => self.reveal_hand(player),
            PlayerIntent::Play { player, cards } => self.play_cards(player, &cards),
            PlayerIntent::Pass { player: _ } => self.pass_turn(),
            PlayerIntent::Reset => {}
        }
    }
}
