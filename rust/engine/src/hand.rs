use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_ranks, Card, Rank};
use crate::errors::GameError;

/// Hand categories, weakest first. Declaration order is the ranking order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

/// Strength of the best five-card hand found in seven cards.
///
/// `primary_ranks` are the ranks that make up the category (the quad rank,
/// trips then pair, the straight's high card, ...) and `kickers` are the
/// side cards that break ties. Both are ordered strongest first, and their
/// lengths are fixed per category, so two rankings of the same category
/// always compare element by element.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandRanking {
    pub category: HandCategory,
    pub primary_ranks: Vec<Rank>,
    pub kickers: Vec<Rank>,
}

impl HandRanking {
    fn new(category: HandCategory, primary_ranks: Vec<Rank>, kickers: Vec<Rank>) -> Self {
        Self {
            category,
            primary_ranks,
            kickers,
        }
    }
}

impl Ord for HandRanking {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl PartialOrd for HandRanking {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks: Vec<String> = self
            .primary_ranks
            .iter()
            .chain(self.kickers.iter())
            .map(Rank::to_string)
            .collect();
        write!(f, "{:?} [{}]", self.category, ranks.join(", "))
    }
}

/// Category first, then primary ranks, then kickers. `Equal` is a tie.
pub fn compare_hands(a: &HandRanking, b: &HandRanking) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.primary_ranks.cmp(&b.primary_ranks))
        .then_with(|| a.kickers.cmp(&b.kickers))
}

/// Ranks the best five-card hand among exactly seven distinct cards.
///
/// # Panics
///
/// Panics if a card appears twice. Use [`try_evaluate`] for unchecked input.
///
/// # Examples
///
/// ```
/// use limitduel_engine::cards::parse_cards;
/// use limitduel_engine::hand::{evaluate, HandCategory};
///
/// let cards: [_; 7] = parse_cards("As Ks Qs Js Ts 2c 3h").unwrap().try_into().unwrap();
/// assert_eq!(evaluate(&cards).category, HandCategory::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card; 7]) -> HandRanking {
    if let Some(dup) = find_duplicate(cards) {
        panic!("evaluate called with duplicate card {dup}");
    }
    evaluate_distinct(cards)
}

/// Checked variant of [`evaluate`] for input coming from outside the engine.
pub fn try_evaluate(cards: &[Card]) -> Result<HandRanking, GameError> {
    let seven: &[Card; 7] = cards
        .try_into()
        .map_err(|_| GameError::InvalidHandSize { got: cards.len() })?;
    if let Some(dup) = find_duplicate(seven) {
        return Err(GameError::DuplicateCard(dup));
    }
    Ok(evaluate_distinct(seven))
}

fn find_duplicate(cards: &[Card]) -> Option<Card> {
    let mut seen = 0u64;
    for &c in cards {
        let bit = 1u64 << c.index();
        if seen & bit != 0 {
            return Some(c);
        }
        seen |= bit;
    }
    None
}

fn evaluate_distinct(cards: &[Card; 7]) -> HandRanking {
    // Count ranks and suits
    let mut rank_counts = [0u8; 15]; // 2..=14 used
    let mut suit_counts = [0u8; 4];
    for c in cards {
        rank_counts[usize::from(c.rank.value())] += 1;
        suit_counts[c.suit.index()] += 1;
    }
    let flush_suit = suit_counts.iter().position(|&n| n >= 5);
    let straight = straight_high(cards.iter().map(|c| c.rank));

    if let (Some(s), Some(_)) = (flush_suit, straight) {
        let suited = cards.iter().filter(|c| c.suit.index() == s).map(|c| c.rank);
        if let Some(high) = straight_high(suited) {
            let category = if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandRanking::new(category, vec![high], vec![]);
        }
    }

    // Ranks holding exactly n cards, highest first.
    let with_count = |n: u8| -> Vec<Rank> {
        all_ranks()
            .into_iter()
            .rev()
            .filter(|r| rank_counts[usize::from(r.value())] == n)
            .collect()
    };
    let quads = with_count(4);
    let trips = with_count(3);
    let pairs = with_count(2);

    if let Some(&quad) = quads.first() {
        let primary = vec![quad];
        let kickers = kickers(cards, &primary, 1);
        return HandRanking::new(HandCategory::FourOfAKind, primary, kickers);
    }

    if let Some(&trip) = trips.first() {
        // A second set of trips outranks nothing but can still fill the pair.
        let pair = trips.get(1).into_iter().chain(pairs.first()).max();
        if let Some(&pair) = pair {
            return HandRanking::new(HandCategory::FullHouse, vec![trip, pair], vec![]);
        }
    }

    if let Some(s) = flush_suit {
        let mut ranks: Vec<Rank> = cards
            .iter()
            .filter(|c| c.suit.index() == s)
            .map(|c| c.rank)
            .collect();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        ranks.truncate(5);
        return HandRanking::new(HandCategory::Flush, ranks, vec![]);
    }

    if let Some(high) = straight {
        return HandRanking::new(HandCategory::Straight, vec![high], vec![]);
    }

    if let Some(&trip) = trips.first() {
        let primary = vec![trip];
        let kickers = kickers(cards, &primary, 2);
        return HandRanking::new(HandCategory::ThreeOfAKind, primary, kickers);
    }

    if pairs.len() >= 2 {
        let primary = pairs[..2].to_vec();
        let kickers = kickers(cards, &primary, 1);
        return HandRanking::new(HandCategory::TwoPair, primary, kickers);
    }

    if let Some(&pair) = pairs.first() {
        let primary = vec![pair];
        let kickers = kickers(cards, &primary, 3);
        return HandRanking::new(HandCategory::OnePair, primary, kickers);
    }

    HandRanking::new(HandCategory::HighCard, vec![], kickers(cards, &[], 5))
}

/// Highest `count` card ranks not already used by `primary`.
fn kickers(cards: &[Card; 7], primary: &[Rank], count: usize) -> Vec<Rank> {
    let mut rest: Vec<Rank> = cards
        .iter()
        .map(|c| c.rank)
        .filter(|r| !primary.contains(r))
        .collect();
    rest.sort_unstable_by(|a, b| b.cmp(a));
    rest.truncate(count);
    rest
}

/// High card of the best straight among `ranks`; the wheel counts as
/// five-high.
fn straight_high(ranks: impl Iterator<Item = Rank>) -> Option<Rank> {
    let mut mask: u16 = 0;
    for r in ranks {
        mask |= 1 << r.value();
    }
    // Ace also plays low
    if mask & (1 << Rank::Ace.value()) != 0 {
        mask |= 1 << 1;
    }
    (5..=14u8).rev().find_map(|high| {
        let window = 0b11111u16 << (high - 4);
        if mask & window == window {
            Rank::from_value(high)
        } else {
            None
        }
    })
}
