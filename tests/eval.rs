//! Hand evaluator and scoring tests.

use pokersol::{Card, HandCategory, Suit, evaluate, hand_score};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Builds a selection from ranks, cycling suits so no flush can form.
fn offsuit(ranks: &[u8]) -> Vec<Card> {
    ranks
        .iter()
        .enumerate()
        .map(|(index, &rank)| card(Suit::ALL[index % 4], rank))
        .collect()
}

fn suited(suit: Suit, ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(suit, rank)).collect()
}

#[test]
fn empty_selection_has_no_category() {
    assert_eq!(evaluate(&[]), None);
}

#[test]
fn single_card_is_high_card() {
    assert_eq!(
        evaluate(&[card(Suit::Hearts, 12)]),
        Some(HandCategory::HighCard)
    );
}

#[test]
fn pair_counts() {
    assert_eq!(
        evaluate(&offsuit(&[4, 4, 9, 12])),
        Some(HandCategory::OnePair)
    );
    assert_eq!(
        evaluate(&offsuit(&[4, 4, 9, 9, 12])),
        Some(HandCategory::TwoPair)
    );
    assert_eq!(
        evaluate(&offsuit(&[4, 4, 4, 9, 12])),
        Some(HandCategory::ThreeOfAKind)
    );
    assert_eq!(
        evaluate(&offsuit(&[4, 4, 4, 4, 12])),
        Some(HandCategory::FourOfAKind)
    );
}

#[test]
fn full_house_outranks_three_of_a_kind() {
    // Rank counts {3, 2} must never report as trips.
    assert_eq!(
        evaluate(&offsuit(&[4, 4, 4, 9, 9])),
        Some(HandCategory::FullHouse)
    );
}

#[test]
fn ace_high_straight() {
    assert_eq!(
        evaluate(&offsuit(&[10, 11, 12, 13, 1])),
        Some(HandCategory::Straight)
    );
}

#[test]
fn ace_low_straight() {
    // {A, 2, 3, 4, 5} is a straight even though Ace sorts high.
    assert_eq!(
        evaluate(&[
            card(Suit::Spades, 1),
            card(Suit::Hearts, 2),
            card(Suit::Clubs, 3),
            card(Suit::Diamonds, 4),
            card(Suit::Spades, 5),
        ]),
        Some(HandCategory::Straight)
    );
}

#[test]
fn middle_straight() {
    assert_eq!(
        evaluate(&offsuit(&[5, 6, 7, 8, 9])),
        Some(HandCategory::Straight)
    );
}

#[test]
fn four_card_run_is_not_a_straight() {
    assert_eq!(
        evaluate(&offsuit(&[2, 3, 4, 5])),
        Some(HandCategory::HighCard)
    );
}

#[test]
fn duplicate_ranks_do_not_block_a_straight() {
    assert_eq!(
        evaluate(&offsuit(&[2, 3, 4, 5, 6, 6])),
        Some(HandCategory::Straight)
    );
}

#[test]
fn flush_needs_exactly_five_suited_cards() {
    // Four suited cards never flush, even though every card shares a suit.
    assert_eq!(
        evaluate(&suited(Suit::Spades, &[2, 5, 9, 12])),
        Some(HandCategory::HighCard)
    );
    assert_eq!(
        evaluate(&suited(Suit::Spades, &[2, 5, 9, 11, 13])),
        Some(HandCategory::Flush)
    );
}

#[test]
fn straight_flush_outranks_flush_and_straight() {
    assert_eq!(
        evaluate(&suited(Suit::Hearts, &[5, 6, 7, 8, 9])),
        Some(HandCategory::StraightFlush)
    );
}

#[test]
fn ace_low_straight_flush() {
    assert_eq!(
        evaluate(&suited(Suit::Clubs, &[1, 2, 3, 4, 5])),
        Some(HandCategory::StraightFlush)
    );
}

#[test]
fn royal_flush_needs_matching_suits() {
    assert_eq!(
        evaluate(&suited(Suit::Spades, &[10, 11, 12, 13, 1])),
        Some(HandCategory::RoyalFlush)
    );

    // Same ranks with a mixed suit break the flush and fall back to a
    // plain straight.
    assert_eq!(
        evaluate(&[
            card(Suit::Spades, 10),
            card(Suit::Spades, 11),
            card(Suit::Spades, 12),
            card(Suit::Spades, 13),
            card(Suit::Hearts, 1),
        ]),
        Some(HandCategory::Straight)
    );
}

#[test]
fn evaluation_is_deterministic() {
    let cards = offsuit(&[4, 4, 9, 12, 13]);
    assert_eq!(evaluate(&cards), evaluate(&cards));
}

#[test]
fn multiplier_table_is_fixed() {
    let expected: [u64; 10] = [1, 2, 3, 4, 6, 7, 9, 11, 12, 14];
    for (category, multiplier) in HandCategory::ALL.into_iter().zip(expected) {
        assert_eq!(category.multiplier(), multiplier);
    }
}

#[test]
fn flush_scores_value_sum_times_seven() {
    let cards = suited(Suit::Spades, &[2, 3, 4, 5, 9]);
    assert_eq!(hand_score(&cards, HandCategory::Flush), 23 * 7);
}

#[test]
fn ace_scores_low() {
    assert_eq!(
        hand_score(&[card(Suit::Spades, 1)], HandCategory::HighCard),
        1
    );
}
