//! Game integration tests.

use bjrules::{
    Action, ActionError, Card, Deck, Game, GameOptions, GameState, Outcome, Rank, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn stacked(draws: &[Card]) -> Deck {
    Deck::from_cards(draws.to_vec()).unwrap()
}

fn new_game() -> Game {
    Game::new(GameOptions::default(), 1)
}

#[test]
fn both_naturals_tie_on_the_deal() {
    let mut game = new_game();
    let result = game
        .deal_from(stacked(&[
            card(Suit::Spades, Rank::Ace),  // player
            card(Suit::Hearts, Rank::Ace),  // dealer up
            card(Suit::Spades, Rank::King), // player
            card(Suit::Hearts, Rank::Queen), // dealer hole
        ]))
        .unwrap();

    assert!(result.is_tie());
    assert!(!result.is_player_blackjack());
    assert!(!result.is_dealer_blackjack());
    assert_eq!(result.player_score(), 21);
    assert_eq!(result.dealer_final_score(), Some(21));
    assert_eq!(game.state(), GameState::Resolved);
}

#[test]
fn player_natural_wins_on_the_deal() {
    let mut game = new_game();
    let result = game
        .deal_from(stacked(&[
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Diamonds, Rank::King),
            card(Suit::Spades, Rank::Seven),
        ]))
        .unwrap();

    assert!(result.is_player_blackjack());
    assert_eq!(result.player_score(), 21);
    assert!(result.outcome().player_wins());
    assert_eq!(result.dealer_cards(), &[card(Suit::Hearts, Rank::Nine)]);
    assert_eq!(result.dealer_final_score(), None);
    assert_eq!(game.state(), GameState::Resolved);
}

#[test]
fn dealer_natural_wins_on_the_deal() {
    let mut game = new_game();
    let result = game
        .deal_from(stacked(&[
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Hearts, Rank::Ace),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Spades, Rank::King),
        ]))
        .unwrap();

    assert!(result.is_dealer_blackjack());
    assert_eq!(result.player_score(), 16);
    assert_eq!(result.dealer_cards().len(), 2);
    assert_eq!(result.dealer_final_score(), Some(21));
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn deal_conceals_the_hole_card() {
    let mut game = new_game();
    let result = game
        .deal_from(stacked(&[
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Hearts, Rank::Six),
            card(Suit::Diamonds, Rank::Eight),
            card(Suit::Spades, Rank::Ten),
        ]))
        .unwrap();

    assert!(result.is_in_progress());
    assert!(!result.is_resolved());
    assert!(!result.is_soft());
    assert_eq!(result.player_score(), 18);
    assert_eq!(result.dealer_showing(), 6);
    assert_eq!(result.dealer_up_card(), card(Suit::Hearts, Rank::Six));
    assert_eq!(result.dealer_cards(), &[card(Suit::Hearts, Rank::Six)]);
    assert_eq!(result.dealer_final_score(), None);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn soft_hand_turns_hard_instead_of_busting() {
    let mut game = new_game();
    let dealt = game
        .deal_from(stacked(&[
            card(Suit::Clubs, Rank::Ace),
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Diamonds, Rank::Six),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Spades, Rank::King), // player hit
        ]))
        .unwrap();

    assert!(dealt.is_soft());
    assert_eq!(dealt.player_score(), 17);

    let hit = game.hit().unwrap();
    assert!(hit.is_in_progress());
    assert!(!hit.is_soft());
    assert!(!hit.is_player_bust());
    assert_eq!(hit.player_score(), 17);
    assert_eq!(hit.player_cards().len(), 3);
    assert_eq!(hit.dealer_cards().len(), 1);
}

#[test]
fn bust_ends_the_round_until_next_deal() {
    let mut game = new_game();
    game.deal_from(stacked(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Spades, Rank::King), // player hit
    ]))
    .unwrap();

    let result = game.hit().unwrap();
    assert!(result.is_player_bust());
    assert_eq!(result.player_score(), 25);
    assert_eq!(game.state(), GameState::Resolved);

    let hand_before = game.player_hand().clone();
    let remaining_before = game.cards_remaining();

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);

    assert_eq!(game.player_hand(), &hand_before);
    assert_eq!(game.cards_remaining(), remaining_before);
    assert_eq!(game.state(), GameState::Resolved);

    game.deal().unwrap();
    assert_ne!(game.state(), GameState::NotStarted);
}

#[test]
fn bust_keeps_the_hole_card_hidden() {
    let mut game = new_game();
    game.deal_from(stacked(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Spades, Rank::Ten),  // dealer hole
        card(Suit::Spades, Rank::King), // player hit
    ]))
    .unwrap();

    let result = game.hit().unwrap();
    assert!(result.is_player_bust());
    assert!(result.is_resolved());
    assert_eq!(result.dealer_cards(), &[card(Suit::Hearts, Rank::Six)]);
    assert_eq!(result.dealer_up_card(), card(Suit::Hearts, Rank::Six));
    assert_eq!(result.dealer_showing(), 6);
    assert_eq!(result.dealer_final_score(), None);
}

#[test]
fn actions_before_deal_are_rejected() {
    let mut game = new_game();

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.state(), GameState::NotStarted);
    assert!(game.player_hand().is_empty());
    assert_eq!(game.dealer_up_card(), None);
}

#[test]
fn dealer_stops_at_first_total_of_seventeen_or_more() {
    let mut game = new_game();
    game.deal_from(stacked(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Five),
        card(Suit::Hearts, Rank::Nine), // dealer draw
        card(Suit::Clubs, Rank::Two),   // left in the deck
    ]))
    .unwrap();

    let result = game.stand().unwrap();
    assert_eq!(
        result.dealer_cards(),
        &[
            card(Suit::Hearts, Rank::Six),
            card(Suit::Spades, Rank::Five),
            card(Suit::Hearts, Rank::Nine),
        ]
    );
    assert_eq!(result.dealer_final_score(), Some(20));
    assert!(result.is_dealer_win());
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.state(), GameState::Resolved);
}

#[test]
fn dealer_bust_is_reported_as_dealer_bust() {
    let mut game = new_game();
    game.deal_from(stacked(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Six),
        card(Suit::Hearts, Rank::King), // dealer draw
    ]))
    .unwrap();

    let result = game.stand().unwrap();
    assert!(result.is_dealer_bust());
    assert!(!result.is_player_win());
    assert!(result.outcome().player_wins());
    assert_eq!(result.dealer_final_score(), Some(26));
}

#[test]
fn stand_compares_totals() {
    let mut tie = new_game();
    tie.deal_from(stacked(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Eight),
    ]))
    .unwrap();
    let result = tie.stand().unwrap();
    assert!(result.is_tie());
    assert_eq!(result.player_score(), 18);
    assert_eq!(result.dealer_final_score(), Some(18));

    let mut win = new_game();
    win.deal_from(stacked(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Spades, Rank::Seven),
    ]))
    .unwrap();
    let result = win.stand().unwrap();
    assert!(result.is_player_win());
    assert_eq!(result.outcome(), Outcome::PlayerWin);
    assert_eq!(result.dealer_final_score(), Some(17));
}

#[test]
fn soft_seventeen_follows_table_rule() {
    let draws = [
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Six),
        card(Suit::Hearts, Rank::Two), // dealer draw when hitting soft 17
    ];

    let mut stands = Game::new(GameOptions::default(), 3);
    stands.deal_from(stacked(&draws)).unwrap();
    let result = stands.stand().unwrap();
    assert_eq!(result.dealer_final_score(), Some(17));
    assert!(result.is_player_win());

    let options = GameOptions::default().with_stand_on_soft_17(false);
    let mut hits = Game::new(options, 3);
    hits.deal_from(stacked(&draws)).unwrap();
    let result = hits.stand().unwrap();
    assert_eq!(result.dealer_final_score(), Some(19));
    assert!(result.is_dealer_win());
}

#[test]
fn failed_stand_leaves_game_untouched() {
    let mut game = new_game();
    game.deal_from(stacked(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Three),
    ]))
    .unwrap();

    assert_eq!(game.stand().unwrap_err(), ActionError::EmptyDeck);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.dealer_up_card(), Some(card(Suit::Hearts, Rank::Two)));
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut game = new_game();
    game.deal_from(stacked(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Six),
        card(Suit::Diamonds, Rank::Seven),
    ]))
    .unwrap();

    assert_eq!(game.hit().unwrap_err(), ActionError::EmptyDeck);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn short_deck_is_rejected_without_changes() {
    let mut game = new_game();
    let err = game
        .deal_from(stacked(&[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::Six),
        ]))
        .unwrap_err();

    assert_eq!(err, ActionError::EmptyDeck);
    assert_eq!(game.state(), GameState::NotStarted);
    assert!(game.player_hand().is_empty());
    assert_eq!(game.cards_remaining(), bjrules::DECK_SIZE);
}

#[test]
fn same_seed_deals_same_rounds() {
    let mut first = Game::new(GameOptions::default(), 42);
    let mut second = Game::new(GameOptions::default(), 42);

    for _ in 0..5 {
        assert_eq!(first.deal().unwrap(), second.deal().unwrap());
    }
}

#[test]
fn deck_refreshes_each_round_by_default() {
    let mut game = new_game();

    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), bjrules::DECK_SIZE - 4);
    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), bjrules::DECK_SIZE - 4);
}

#[test]
fn deck_carries_over_when_configured() {
    let options = GameOptions::default().with_fresh_shoe_each_round(false);
    let mut game = Game::new(options, 9);

    game.deal().unwrap();
    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), bjrules::DECK_SIZE - 8);

    for _ in 0..11 {
        game.deal().unwrap();
    }
    // 13 deals use the whole deck, the next one starts a new deck.
    assert_eq!(game.cards_remaining(), 0);
    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), bjrules::DECK_SIZE - 4);
}

#[test]
fn dealing_mid_round_starts_over() {
    let mut game = new_game();
    game.deal_from(stacked(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Diamonds, Rank::Five),
        card(Suit::Spades, Rank::Ten),
    ]))
    .unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);

    let result = game
        .deal_from(stacked(&[
            card(Suit::Clubs, Rank::Two),
            card(Suit::Hearts, Rank::Three),
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Spades, Rank::Five),
        ]))
        .unwrap();
    assert_eq!(result.player_score(), 6);
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn apply_dispatches_actions() {
    let mut game = new_game();
    assert_eq!(game.apply(Action::Hit).unwrap_err(), ActionError::InvalidState);

    let mut last = Action::Deal;
    let mut result = game.apply(last).unwrap();
    while result.is_in_progress() {
        last = if result.player_score() < 17 {
            Action::Hit
        } else {
            Action::Stand
        };
        result = game.apply(last).unwrap();
    }

    assert!(result.is_resolved());
    if last == Action::Stand {
        assert!(result.dealer_final_score().is_some());
        assert!(result.dealer_cards().len() >= 2);
    }
    assert_eq!(game.state(), GameState::Resolved);
}

#[test]
fn resolved_results_have_exactly_one_outcome() {
    let mut game = new_game();
    for _ in 0..50 {
        let mut result = game.deal().unwrap();
        while result.is_in_progress() {
            result = if result.player_score() < 15 {
                game.hit().unwrap()
            } else {
                game.stand().unwrap()
            };
        }

        let flags = [
            result.is_tie(),
            result.is_player_blackjack(),
            result.is_dealer_blackjack(),
            result.is_player_bust(),
            result.is_dealer_bust(),
            result.is_player_win(),
            result.is_dealer_win(),
        ];
        assert_eq!(flags.iter().filter(|flag| **flag).count(), 1);
    }
}
