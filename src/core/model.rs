//! # Data Model
//!
//! Decks and cards as the dashboard sees them. Scheduling fields (`interval`,
//! `rating`, `last_reviewed`) are written by whatever runs the review sessions;
//! everything in `core::stats` only reads them.
//!
//! ```text
//! Deck
//! ├── id: String
//! ├── name: String
//! ├── last_studied: Option<DateTime<Utc>>   // None = never studied
//! └── cards: Vec<Card>
//!     ├── interval: u32                      // days until next review
//!     ├── rating: u8                         // raw score of last review (1..=5)
//!     └── last_reviewed: Option<DateTime<Utc>>
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cards with an interval at or above this many days count as mature.
pub const MATURE_INTERVAL_DAYS: u32 = 21;

/// Outcome of a single review, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    Blackout = 1,
    Wrong = 2,
    Hard = 3,
    Good = 4,
    Easy = 5,
}

impl Rating {
    /// All ratings in display order (1 → 5).
    pub const ALL: [Rating; 5] = [
        Rating::Blackout,
        Rating::Wrong,
        Rating::Hard,
        Rating::Good,
        Rating::Easy,
    ];

    /// Map a raw score to a rating. Anything outside 1..=5 is `None`.
    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            1 => Some(Rating::Blackout),
            2 => Some(Rating::Wrong),
            3 => Some(Rating::Hard),
            4 => Some(Rating::Good),
            5 => Some(Rating::Easy),
            _ => None,
        }
    }

    pub fn score(self) -> u8 {
        self as u8
    }

    /// Zero-based position, for indexing fixed-size per-rating tables.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Blackout => "Blackout",
            Rating::Wrong => "Wrong",
            Rating::Hard => "Hard",
            Rating::Good => "Good",
            Rating::Easy => "Easy",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    #[serde(default)]
    pub front: String,
    #[serde(default)]
    pub back: String,
    /// Days until the next review; 0 if never scheduled.
    #[serde(default)]
    pub interval: u32,
    /// Raw score of the last review. Meaningless while `last_reviewed` is `None`.
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub last_reviewed: Option<DateTime<Utc>>,
}

impl Card {
    pub fn is_mature(&self) -> bool {
        self.interval >= MATURE_INTERVAL_DAYS
    }

    pub fn is_reviewed(&self) -> bool {
        self.last_reviewed.is_some()
    }

    /// The last review's rating, if the card was reviewed with an in-range score.
    pub fn last_rating(&self) -> Option<Rating> {
        self.last_reviewed.and_then(|_| Rating::from_score(self.rating))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub last_studied: Option<DateTime<Utc>>,
}

impl Deck {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Recompute `last_studied` as the latest card review.
    pub fn refresh_last_studied(&mut self) {
        self.last_studied = self.cards.iter().filter_map(|c| c.last_reviewed).max();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_rating_from_score_bounds() {
        assert_eq!(Rating::from_score(0), None);
        assert_eq!(Rating::from_score(1), Some(Rating::Blackout));
        assert_eq!(Rating::from_score(5), Some(Rating::Easy));
        assert_eq!(Rating::from_score(6), None);
    }

    #[test]
    fn test_rating_order_and_index() {
        for (i, rating) in Rating::ALL.iter().enumerate() {
            assert_eq!(rating.index(), i);
            assert_eq!(rating.score() as usize, i + 1);
        }
        assert!(Rating::Wrong < Rating::Hard);
    }

    #[test]
    fn test_last_rating_requires_review() {
        let mut card = Card {
            rating: 4,
            ..Default::default()
        };
        assert_eq!(card.last_rating(), None);

        card.last_reviewed = Some(Utc::now());
        assert_eq!(card.last_rating(), Some(Rating::Good));

        card.rating = 9;
        assert_eq!(card.last_rating(), None);
    }

    #[test]
    fn test_mature_threshold() {
        let young = Card {
            interval: MATURE_INTERVAL_DAYS - 1,
            ..Default::default()
        };
        let mature = Card {
            interval: MATURE_INTERVAL_DAYS,
            ..Default::default()
        };
        assert!(!young.is_mature());
        assert!(mature.is_mature());
    }

    #[test]
    fn test_refresh_last_studied_takes_latest_review() {
        let now = Utc::now();
        let mut deck = Deck::new("d", "Deck");
        assert_eq!(deck.last_studied, None);

        deck.cards = vec![
            Card {
                last_reviewed: Some(now - TimeDelta::days(3)),
                ..Default::default()
            },
            Card {
                last_reviewed: Some(now),
                ..Default::default()
            },
            Card::default(),
        ];
        deck.refresh_last_studied();
        assert_eq!(deck.last_studied, Some(now));
    }

    #[test]
    fn test_deck_json_sparse_fields() {
        let json = r#"{"id":"go","name":"Go Basics","cards":[{"id":"c1"}]}"#;
        let deck: Deck = serde_json::from_str(json).unwrap();
        assert_eq!(deck.cards.len(), 1);
        assert_eq!(deck.cards[0].interval, 0);
        assert!(deck.cards[0].last_reviewed.is_none());
        assert!(deck.last_studied.is_none());
    }
}
