//! CLI poker solitaire example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pokersol::{Card, Game, GameOptions, HandCategory, Suit};

fn main() {
    println!("Poker solitaire CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    loop {
        print_table(&game);

        if game.hand().is_empty() {
            println!("No cards left. Final score: {}", game.score());
            break;
        }

        let input = prompt_line("Action (card number toggles, [p]lay, [d]iscard, [q]uit): ");
        match input.as_str() {
            "q" | "quit" => {
                println!("Final score: {}", game.score());
                break;
            }
            "p" | "play" => match game.submit() {
                Ok(result) => println!(
                    "{}: {} x {} = {} (total {})",
                    result.category.label(),
                    result.card_sum,
                    result.multiplier,
                    result.score_delta,
                    result.total_score
                ),
                Err(err) => println!("Play error: {err}"),
            },
            "d" | "discard" => {
                let result = game.discard();
                if result.cards_discarded == 0 {
                    println!("Nothing selected.");
                } else {
                    println!(
                        "Discarded {} card(s), drew {}.",
                        result.cards_discarded, result.cards_drawn
                    );
                }
            }
            other => match other.parse::<usize>() {
                Ok(index) if index >= 1 && index <= game.hand().len() => {
                    let card = game.hand()[index - 1];
                    if !game.toggle_select(card) {
                        println!("Selection is full (5 cards).");
                    }
                }
                _ => println!("Unknown action."),
            },
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!(
        "\nScore: {} | Deck: {} cards | Discarded: {}",
        game.score(),
        game.cards_remaining(),
        game.discards().len()
    );

    let labels: Vec<String> = game
        .hand()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            let marker = if game.is_selected(*card) { "*" } else { " " };
            format!("{}:{marker}{}", index + 1, format_card(card))
        })
        .collect();
    println!("Hand: {}", labels.join("  "));

    let category = game.category().map_or("none selected", HandCategory::label);
    println!("Selected hand: {category}");
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

    let (rank, is_face) = match card.rank {
        1 => ("A".to_string(), true),
        11 => ("J".to_string(), true),
        12 => ("Q".to_string(), true),
        13 => ("K".to_string(), true),
        _ => (card.rank.to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}
