use crate::cards::{Card, CardRank, CardSuit, THREE_OF_CLUBS};
use crate::game::{Game, Player};

use CardRank::*;
use CardSuit::*;

fn c(rank: CardRank, suit: CardSuit) -> Card {
    Card::new(rank, suit)
}

/// Build a table with fixed hands, seat 0 starting, empty play area.
fn game_with_hands(hands: Vec<Vec<Card>>) -> Game {
    let players = hands
        .into_iter()
        .enumerate()
        .map(|(i, mut hand)| {
            hand.sort();
            Player {
                id: i,
                name: format!("Player {}", i + 1),
                hand,
                revealed: false,
            }
        })
        .collect();
    Game {
        players,
        play_area: Vec::new(),
        current_player: 0,
        starting_player: 0,
        consecutive_passes: 0,
        message: String::new(),
    }
}

#[test]
fn starting_player_must_open() {
    let mut g = game_with_hands(vec![vec![THREE_OF_CLUBS], vec![c(King, Spades)]]);
    assert!(!g.is_valid_play(&[]));
    assert_eq!(g.message, "The starting player must make the first move!");
}

#[test]
fn empty_selection_from_non_starter_is_just_invalid() {
    let mut g = game_with_hands(vec![vec![THREE_OF_CLUBS], vec![c(King, Spades)]]);
    g.current_player = 1;
    assert!(!g.is_valid_play(&[]));
    assert_eq!(g.message, "Invalid play. Try a valid combination!");
}

#[test]
fn any_valid_combination_opens_an_empty_play_area() {
    let mut g = game_with_hands(vec![vec![c(King, Spades)], vec![c(Ace, Spades)]]);
    assert!(g.is_valid_play(&[c(King, Spades)]));
    assert!(g.is_valid_play(&[c(Five, Clubs), c(Five, Diamonds)]));
    assert!(!g.is_valid_play(&[c(Five, Clubs), c(Six, Diamonds)]));
}

#[test]
fn bomb_beats_a_non_bomb_play_area() {
    let mut g = game_with_hands(vec![vec![c(King, Spades)], vec![c(Ace, Spades)]]);
    g.play_area = vec![c(Five, Clubs), c(Five, Diamonds)];
    assert!(g.is_valid_play(&[c(Three, Clubs), c(Three, Diamonds), c(Three, Hearts)]));
    assert_eq!(g.message, "BOOM! 🔥 What a play!");
}

#[test]
fn four_card_bomb_beats_three_card_bomb_regardless_of_rank() {
    let mut g = game_with_hands(vec![vec![c(King, Spades)], vec![c(Ace, Spades)]]);
    g.play_area = vec![c(Ace, Clubs), c(Ace, Diamonds), c(Ace, Hearts)];
    assert!(g.is_valid_play(&[
        c(Three, Clubs),
        c(Three, Diamonds),
        c(Three, Hearts),
        c(Three, Spades)
    ]));
    assert_eq!(
        g.message,
        "BOOM! 🔥 A four-card bomb obliterates the three-card bomb!"
    );
}

#[test]
fn three_card_bomb_never_beats_four_card_bomb() {
    let mut g = game_with_hands(vec![vec![c(King, Spades)], vec![c(Ace, Spades)]]);
    g.play_area = vec![
        c(Three, Clubs),
        c(Three, Diamonds),
        c(Three, Hearts),
        c(Three, Spades),
    ];
    assert!(!g.is_valid_play(&[c(Ace, Clubs), c(Ace, Diamonds), c(Ace, Hearts)]));
    assert_eq!(
        g.message,
        "Your three-card bomb isn't strong enough to beat a four-card bomb! 💥"
    );
}

#[test]
fn equal_rank_bombs_tie_break_by_highest_suit() {
    let mut g = game_with_hands(vec![vec![c(King, Spades)], vec![c(Ace, Spades)]]);
    g.play_area = vec![c(Five, Clubs), c(Five, Diamonds), c(Five, Hearts)];
    assert!(g.is_valid_play(&[c(Five, Diamonds), c(Five, Hearts), c(Five, Spades)]));

    g.play_area = vec![c(Five, Diamonds), c(Five, Hearts), c(Five, Spades)];
    assert!(!g.is_valid_play(&[c(Five, Clubs), c(Five, Diamonds), c(Five, Hearts)]));
    assert_eq!(g.message, "Your bomb isn't strong enough! 💥");
}

#[test]
fn lower_rank_bomb_is_rejected() {
    let mut g = game_with_hands(vec![vec![c(King, Spades)], vec![c(Ace, Spades)]]);
    g.play_area = vec![c(Nine, Clubs), c(Nine, Diamonds), c(Nine, Hearts)];
    assert!(!g.is_valid_play(&[c(Four, Clubs), c(Four, Diamonds), c(Four, Hearts)]));
    assert_eq!(g.message, "Your bomb isn't strong enough! 💥");
}

#[test]
fn straights_need_higher_start_and_at_least_equal_length() {
    let mut g = game_with_hands(vec![vec![c(King, Spades)], vec![c(Ace, Spades)]]);
    g.play_area = vec![
        c(Three, Clubs),
        c(Four, Diamonds),
        c(Five, Hearts),
        c(Six, Spades),
        c(Seven, Clubs),
    ];

    // Strictly higher start, same length: accepted.
    assert!(g.is_valid_play(&[
        c(Four, Clubs),
        c(Five, Diamonds),
        c(Six, Hearts),
        c(Seven, Spades),
        c(Eight, Clubs)
    ]));

    // Same start rank: rejected (silently).
    g.message.clear();
    assert!(!g.is_valid_play(&[
        c(Three, Diamonds),
        c(Four, Hearts),
        c(Five, Spades),
        c(Six, Clubs),
        c(Seven, Diamonds)
    ]));
    assert!(g.message.is_empty());

    // Four consecutive cards are not a straight at all.
    assert!(!g.is_valid_play(&[
        c(Four, Clubs),
        c(Five, Diamonds),
        c(Six, Hearts),
        c(Seven, Spades)
    ]));
    assert_eq!(g.message, "Invalid play. Try a valid combination!");

    // A longer straight with a higher start is fine.
    assert!(g.is_valid_play(&[
        c(Four, Clubs),
        c(Five, Diamonds),
        c(Six, Hearts),
        c(Seven, Spades),
        c(Eight, Clubs),
        c(Nine, Diamonds)
    ]));
}

#[test]
fn matching_types_compare_by_lead_rank() {
    let mut g = game_with_hands(vec![vec![c(King, Spades)], vec![c(Ace, Spades)]]);
    g.play_area = vec![c(Nine, Clubs)];
    assert!(g.is_valid_play(&[c(Ten, Diamonds)]));
    assert!(!g.is_valid_play(&[c(Nine, Spades)])); // rank must be strictly higher

    g.play_area = vec![c(Nine, Clubs), c(Nine, Diamonds)];
    assert!(g.is_valid_play(&[c(Queen, Clubs), c(Queen, Diamonds)]));
    assert!(!g.is_valid_play(&[c(Four, Clubs), c(Four, Diamonds)]));
}

#[test]
fn mismatched_types_are_rejected_silently() {
    let mut g = game_with_hands(vec![vec![c(King, Spades)], vec![c(Ace, Spades)]]);
    g.play_area = vec![c(Nine, Clubs), c(Nine, Diamonds)];
    g.message = "previous message".to_string();
    assert!(!g.is_valid_play(&[c(Ace, Spades)]));
    assert_eq!(g.message, "previous message");
}

#[test]
fn playing_cards_removes_them_and_advances_the_turn() {
    let mut g = game_with_hands(vec![
        vec![c(Three, Clubs), c(Seven, Hearts), c(King, Spades)],
        vec![c(Four, Diamonds), c(Ace, Spades)],
    ]);
    g.reveal_hand(0);
    g.play_cards(0, &[c(Seven, Hearts)]);

    assert_eq!(g.players[0].hand, vec![c(Three, Clubs), c(King, Spades)]);
    assert_eq!(g.play_area, vec![c(Seven, Hearts)]);
    assert_eq!(g.consecutive_passes, 0);
    assert_eq!(g.current_player, 1);
    assert!(g.message.is_empty());
    // Every hand is hidden again after the turn switch.
    assert!(g.players.iter().all(|p| !p.revealed));
}

#[test]
fn invalid_play_leaves_state_unchanged() {
    let mut g = game_with_hands(vec![
        vec![c(Three, Clubs), c(Seven, Hearts)],
        vec![c(Four, Diamonds), c(Ace, Spades)],
    ]);
    g.play_area = vec![c(King, Spades)];
    g.play_cards(0, &[c(Seven, Hearts)]); // too low against a King

    assert_eq!(g.players[0].hand, vec![c(Three, Clubs), c(Seven, Hearts)]);
    assert_eq!(g.play_area, vec![c(King, Spades)]);
    assert_eq!(g.current_player, 0);
}

#[test]
fn pass_cycle_clears_the_play_area_with_three_players() {
    let mut g = game_with_hands(vec![
        vec![c(Three, Clubs)],
        vec![c(Four, Diamonds)],
        vec![c(Five, Hearts)],
    ]);
    g.play_area = vec![c(King, Spades)];
    g.current_player = 1;

    g.pass_turn();
    assert_eq!(g.consecutive_passes, 1);
    assert_eq!(g.message, "Player passed. Next player's turn.");
    assert_eq!(g.play_area, vec![c(King, Spades)]);
    assert_eq!(g.current_player, 2);

    // Second consecutive pass reaches numPlayers - 1: play area clears.
    g.pass_turn();
    assert_eq!(g.consecutive_passes, 0);
    assert_eq!(g.message, "All players passed. Play reset.");
    assert!(g.play_area.is_empty());
    assert_eq!(g.current_player, 0);

    // A later pass starts a fresh count, not a continuation.
    g.pass_turn();
    assert_eq!(g.consecutive_passes, 1);
}

#[test]
fn reveal_is_only_a_visibility_toggle() {
    let mut g = game_with_hands(vec![vec![c(Three, Clubs)], vec![c(Four, Diamonds)]]);
    let before = g.players[0].hand.clone();
    g.reveal_hand(0);
    assert!(g.players[0].revealed);
    assert_eq!(g.players[0].hand, before);
    assert_eq!(g.consecutive_passes, 0);

    g.switch_player();
    assert!(!g.players[0].revealed);
}

#[test]
fn public_snapshot_hides_unrevealed_hands() {
    let mut g = game_with_hands(vec![
        vec![c(Three, Clubs), c(Four, Diamonds)],
        vec![c(Five, Hearts)],
    ]);
    g.reveal_hand(0);
    let public = g.public();

    assert_eq!(
        public.players[0].cards,
        Some(vec![c(Three, Clubs), c(Four, Diamonds)])
    );
    assert_eq!(public.players[0].hand_len, 2);
    assert_eq!(public.players[1].cards, None);
    assert_eq!(public.players[1].hand_len, 1);
    assert_eq!(public.current_player, 0);
}

#[test]
fn no_win_detection_when_a_hand_empties() {
    let mut g = game_with_hands(vec![vec![c(King, Spades)], vec![c(Four, Diamonds)]]);
    g.play_cards(0, &[c(King, Spades)]);

    assert!(g.players[0].hand.is_empty());
    // Play simply continues; the next player is on turn.
    assert_eq!(g.current_player, 1);
    assert!(g.is_valid_play(&[c(Ace, Spades), c(Ace, Hearts), c(Ace, Diamonds)]));
}

#[test]
fn fresh_deal_after_reset_has_no_residual_state() {
    let mut g = Game::new_with_seed(3, 11);
    let starter = g.current_player;
    let lead = g.players[starter].hand[0];
    g.play_cards(starter, &[lead]);
    g.pass_turn();
    drop(g);

    // The view layer drops the old round and deals a new one.
    let g = Game::new_with_seed(3, 12);
    assert!(g.play_area.is_empty());
    assert_eq!(g.consecutive_passes, 0);
    assert!(g.players.iter().all(|p| p.hand.len() == 17));
    assert!(g.players.iter().all(|p| !p.revealed));
    assert_eq!(g.current_player, g.starting_player);
}

#[test]
fn apply_intent_dispatches_engine_commands() {
    use crate::PlayerIntent;

    let mut g = game_with_hands(vec![
        vec![c(Three, Clubs), c(Seven, Hearts)],
        vec![c(Four, Diamonds)],
    ]);
    g.apply_intent(PlayerIntent::Reveal { player: 0 });
    assert!(g.players[0].revealed);

    g.apply_intent(PlayerIntent::Play {
        player: 0,
        cards: vec![c(Three, Clubs)],
    });
    assert_eq!(g.play_area, vec![c(Three, Clubs)]);
    assert_eq!(g.current_player, 1);

    g.apply_intent(PlayerIntent::Pass { player: 1 });
    // With two players a single pass is a full cycle.
    assert!(g.play_area.is_empty());
    assert_eq!(g.current_player, 0);
}
