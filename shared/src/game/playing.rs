//! Play validation and turn actions: the transition guard plus the
//! play/pass state changes.

use crate::cards::Card;
use crate::combination::{combination_type, highest_suit, Combination};

use super::Game;

impl Game {
    /// Validate `selected` against the current play area.
    ///
    /// Sets the user-facing `message` as a side effect; the message is part
    /// of the contract the view renders. Two rejections are silent: a
    /// combination-type mismatch and a matching-type play that fails the
    /// strength comparison.
    ///
    /// Plays are submitted in ascending hand order, so index 0 is the lead
    /// (lowest) card of the combination.
    pub fn is_valid_play(&mut self, selected: &[Card]) -> bool {
        // The opening constraint only fires for an empty selection from the
        // starting player onto an empty play area. Other empty selections
        // fall through and are rejected as invalid combinations.
        if self.play_area.is_empty()
            && self.current_player == self.starting_player
            && selected.is_empty()
        {
            self.message = "The starting player must make the first move!".to_string();
            return false;
        }

        let play_type = combination_type(selected);

        if play_type == Combination::Invalid {
            self.message = "Invalid play. Try a valid combination!".to_string();
            return false;
        }

        // Bombs are always a legal category; only another bomb constrains them.
        if play_type == Combination::Bomb {
            if !self.play_area.is_empty() && combination_type(&self.play_area) == Combination::Bomb
            {
                let current_rank = self.play_area[0].rank();
                let new_rank = selected[0].rank();
                let new_is_four_card = selected.len() == 4;
                let current_is_four_card = self.play_area.len() == 4;

                if !new_is_four_card && current_is_four_card {
                    self.message =
                        "Your three-card bomb isn't strong enough to beat a four-card bomb! 💥"
                            .to_string();
                    return false;
                }

                if new_is_four_card && !current_is_four_card {
                    self.message =
                        "BOOM! 🔥 A four-card bomb obliterates the three-card bomb!".to_string();
                    return true;
                }

                if new_rank < current_rank {
                    self.message = "Your bomb isn't strong enough! 💥".to_string();
                    return false;
                }

                // Equal ranks: the highest suit present must be strictly higher.
                if new_rank == current_rank
                    && highest_suit(selected) <= highest_suit(&self.play_area)
                {
                    self.message = "Your bomb isn't strong enough! 💥".to_string();
                    return false;
                }
            }

            self.message = "BOOM! 🔥 What a play!".to_string();
            return true;
        }

        // Any valid combination can open an empty play area.
        if self.play_area.is_empty() {
            return true;
        }

        let current_type = combination_type(&self.play_area);
        if play_type == current_type {
            if play_type == Combination::Straight {
                return beats_straight(&self.play_area, selected);
            }
            return beats_lead_rank(&self.play_area, selected);
        }

        false
    }

    /// Apply a play for `player_idx`. Invalid plays leave all state
    /// untouched apart from the rejection message.
    pub fn play_cards(&mut self, player_idx: usize, selected: &[Card]) {
        if !self.is_valid_play(selected) {
            return;
        }

        let hand = &mut self.players[player_idx].hand;
        hand.retain(|c| !selected.contains(c));
        hand.sort();

        self.play_area = selected.to_vec();
        self.consecutive_passes = 0;
        self.message.clear();
        self.switch_player();
    }

    /// Record a pass. Once every other player has passed consecutively the
    /// play area clears and the counter restarts; the turn advances either
    /// way.
    pub fn pass_turn(&mut self) {
        self.consecutive_passes += 1;

        if self.consecutive_passes >= self.players.len() - 1 {
            self.play_area.clear();
            self.message = "All players passed. Play reset.".to_string();
            self.consecutive_passes = 0;
        } else {
            self.message = "Player passed. Next player's turn.".to_string();
        }

        self.switch_player();
    }
}

/// A straight must start on a strictly higher rank and be at least as long
/// as the one it replaces.
fn beats_straight(current: &[Card], next: &[Card]) -> bool {
    if next[0].rank() <= current[0].rank() {
        return false;
    }
    next.len() >= current.len()
}

/// Singles and pairs compare by lead rank, strictly.
fn beats_lead_rank(current: &[Card], next: &[Card]) -> bool {
    next[0].rank() > current[0].rank()
}
