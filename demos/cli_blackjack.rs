//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjrules::{Action, Card, Game, GameOptions, Outcome, Rank, RoundResult, Suit};

const RULES: &str = "This game uses a standard 52 card deck. \
Try to beat the dealer by getting a total as close to 21 as possible without going over. \
You and the dealer each get two cards; one of the dealer's cards stays face down. \
Hit to take another card or stand to keep your total. \
Once you stand, the dealer turns the hidden card over and must keep drawing \
until reaching 17 or more.";

const HELP: &str = "Say deal to start a round, hit or stand while playing, \
rules to hear how to play, or quit to leave.";

/// Everything the player can type at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play(Action),
    Rules,
    Help,
    Quit,
    Unsupported,
}

impl Command {
    fn parse(input: &str) -> Self {
        match input {
            "d" | "deal" | "new" => Self::Play(Action::Deal),
            "h" | "hit" => Self::Play(Action::Hit),
            "s" | "stand" => Self::Play(Action::Stand),
            "r" | "rules" => Self::Rules,
            "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Unsupported,
        }
    }
}

fn main() {
    println!("Blackjack CLI example (type 'help' for commands)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    println!("Would you like to start a new game or hear the rules?");

    loop {
        let command = Command::parse(&prompt_line("> "));

        match command {
            Command::Play(action) => match game.apply(action) {
                Ok(result) => {
                    print_table(&result);
                    println!("{}", describe(action, &result));
                }
                Err(err) => println!("Can't {action:?} right now: {err}."),
            },
            Command::Rules => println!("{RULES}"),
            Command::Help => println!("{HELP}"),
            Command::Quit => {
                println!("Goodbye.");
                break;
            }
            Command::Unsupported => println!("That is unsupported. Please try something else."),
        }
    }
}

fn describe(action: Action, result: &RoundResult) -> String {
    let again = "Would you like to start a new game or hear the rules?";
    let player = result.player_score();

    match result.outcome() {
        Outcome::InProgress => {
            let kind = if result.is_soft() { "a soft" } else { "a" };
            let verb = if action == Action::Deal {
                "were dealt"
            } else {
                "now have"
            };
            format!(
                "You {verb} {kind} {player}. The dealer is showing {}. Hit or stand?",
                result.dealer_showing()
            )
        }
        Outcome::Tie if action == Action::Deal => {
            format!("Both you and the dealer have blackjack. It's a tie! {again}")
        }
        Outcome::Tie => format!("You and the dealer tied at {player}. {again}"),
        Outcome::PlayerBlackjack => format!("Blackjack! You win! {again}"),
        Outcome::DealerBlackjack => format!("The dealer has blackjack. You lose. {again}"),
        Outcome::PlayerBust => format!("You busted with {player}. You lose. {again}"),
        Outcome::DealerBust => format!("The dealer busted. You win! {again}"),
        Outcome::PlayerWin | Outcome::DealerWin => {
            let dealer = result.dealer_final_score().unwrap_or_default();
            let verdict = if result.is_player_win() {
                "You won"
            } else {
                "You lost"
            };
            format!("{verdict}! Your score was {player} and the dealer's was {dealer}. {again}")
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "quit".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn print_table(result: &RoundResult) {
    let mut dealer = format_cards(result.dealer_cards());
    if result.dealer_final_score().is_none() {
        dealer.push_str(" ??");
    }
    match result.dealer_final_score() {
        Some(total) => println!("\nDealer: {dealer} (value {total})"),
        None => println!("\nDealer: {dealer} (showing {})", result.dealer_showing()),
    }

    println!(
        "You:    {} (value {})\n",
        format_cards(result.player_cards()),
        result.player_score()
    );
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => other.value().to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
