//! Poker hand ranking for five-card hands.

use crate::error::{KataError, Result};
use std::fmt;

/// Rank of a five-card poker hand, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PokerRank {
    HighCard = 0,
    OnePair = 1,
    TwoPairs = 2,
    ThreeOfKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfKind = 7,
    StraightFlush = 8,
}

impl fmt::Display for PokerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PokerRank::HighCard => "high card",
            PokerRank::OnePair => "one pair",
            PokerRank::TwoPairs => "two pairs",
            PokerRank::ThreeOfKind => "three of a kind",
            PokerRank::Straight => "straight",
            PokerRank::Flush => "flush",
            PokerRank::FullHouse => "full house",
            PokerRank::FourOfKind => "four of a kind",
            PokerRank::StraightFlush => "straight flush",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Card {
    value: u8,
    suit: Suit,
}

impl Card {
    /// Parses cards such as `10♥`, `A♠` or `QS`.
    fn parse(card: &str) -> Result<Card> {
        let invalid = || KataError::InvalidInput(format!("not a playing card: {:?}", card));
        let mut chars = card.trim().chars();
        let suit = match chars.next_back().ok_or_else(invalid)? {
            '♠' | 'S' | 's' => Suit::Spades,
            '♥' | 'H' | 'h' => Suit::Hearts,
            '♦' | 'D' | 'd' => Suit::Diamonds,
            '♣' | 'C' | 'c' => Suit::Clubs,
            _ => return Err(invalid()),
        };
        let value = match chars.as_str() {
            "A" => 14,
            "K" => 13,
            "Q" => 12,
            "J" => 11,
            "10" => 10,
            digit => match digit.parse::<u8>() {
                Ok(v) if (2..=9).contains(&v) && digit.len() == 1 => v,
                _ => return Err(invalid()),
            },
        };
        Ok(Card { value, suit })
    }
}

/// Returns the rank of a five-card hand.
///
/// Aces count high or low, so `A 2 3 4 5` is a straight.
///
/// # Errors
/// `KataError::InvalidInput` if the hand does not hold exactly five
/// recognizable cards.
///
/// # Examples
/// ```
/// use kata_solver::poker::{get_poker_hand_rank, PokerRank};
///
/// let rank = get_poker_hand_rank(&["4♣", "4♦", "5♦", "5♠", "5♥"]).unwrap();
/// assert_eq!(rank, PokerRank::FullHouse);
/// ```
pub fn get_poker_hand_rank(hand: &[&str]) -> Result<PokerRank> {
    if hand.len() != 5 {
        return Err(KataError::InvalidInput(format!(
            "a poker hand has 5 cards, got {}",
            hand.len()
        )));
    }
    let cards = hand
        .iter()
        .map(|card| Card::parse(card))
        .collect::<Result<Vec<_>>>()?;

    let mut values: Vec<u8> = cards.iter().map(|card| card.value).collect();
    values.sort_unstable();

    let mut counts: Vec<usize> = Vec::new();
    for run in values.chunk_by(|a, b| a == b) {
        counts.push(run.len());
    }
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|card| card.suit == cards[0].suit);
    let straight = counts.len() == 5
        && (values[4] - values[0] == 4 || values == [2, 3, 4, 5, 14]);

    let rank = match (straight, flush, counts.as_slice()) {
        (true, true, _) => PokerRank::StraightFlush,
        (_, _, [4, ..]) => PokerRank::FourOfKind,
        (_, _, [3, 2]) => PokerRank::FullHouse,
        (_, true, _) => PokerRank::Flush,
        (true, _, _) => PokerRank::Straight,
        (_, _, [3, ..]) => PokerRank::ThreeOfKind,
        (_, _, [2, 2, ..]) => PokerRank::TwoPairs,
        (_, _, [2, ..]) => PokerRank::OnePair,
        _ => PokerRank::HighCard,
    };
    Ok(rank)
}
