//! # Deck Store
//!
//! Read-only access to the deck collection. Screens hold the store through
//! [`SharedStore`] and only ever ask two questions of it: "give me deck X"
//! and "give me every deck".
//!
//! Decks live as one JSON file per deck in the data directory
//! (`~/.deckhand/decks/` by default). When that directory has nothing to
//! offer, a built-in sample collection is used instead.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info, warn};

use crate::core::model::{Card, Deck};

/// Lookup surface the dashboard consumes.
pub trait DeckStore {
    /// Find a deck by identifier. `None` means "unknown id", not a failure.
    fn get_deck(&self, id: &str) -> Option<&Deck>;

    /// Every deck, in no particular order.
    fn get_decks(&self) -> &[Deck];
}

/// Shared, non-owning handle passed to every screen.
pub type SharedStore = Arc<dyn DeckStore>;

/// In-memory deck collection.
#[derive(Debug, Default, Clone)]
pub struct Store {
    decks: Vec<Deck>,
}

impl Store {
    pub fn from_decks(decks: Vec<Deck>) -> Self {
        Self { decks }
    }

    /// Load every `*.json` deck file in `dir`.
    ///
    /// Unreadable or malformed files are skipped with a warning. Each loaded
    /// deck gets its `last_studied` recomputed from its cards.
    pub fn load_dir(dir: &Path) -> io::Result<Self> {
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut decks = Vec::with_capacity(paths.len());
        for path in paths {
            let json = match fs::read_to_string(&path) {
                Ok(json) => json,
                Err(e) => {
                    warn!("Failed to read deck file {}: {}", path.display(), e);
                    continue;
                }
            };
            match serde_json::from_str::<Deck>(&json) {
                Ok(mut deck) => {
                    deck.refresh_last_studied();
                    debug!("Loaded deck '{}' ({} cards)", deck.id, deck.cards.len());
                    decks.push(deck);
                }
                Err(e) => warn!("Skipping malformed deck file {}: {}", path.display(), e),
            }
        }

        info!("Loaded {} deck(s) from {}", decks.len(), dir.display());
        Ok(Self { decks })
    }

    /// Load from `dir`, falling back to the sample collection when the
    /// directory is missing, unreadable or empty.
    pub fn open(dir: &Path, now: DateTime<Utc>) -> Self {
        match Self::load_dir(dir) {
            Ok(store) if !store.decks.is_empty() => store,
            Ok(_) => {
                info!("No decks in {}, using sample decks", dir.display());
                Self::sample(now)
            }
            Err(e) => {
                info!("Could not read {} ({}), using sample decks", dir.display(), e);
                Self::sample(now)
            }
        }
    }

    /// A small demo collection with review history relative to `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        let days_ago = |d: i64| Some(now - TimeDelta::days(d));

        let mut rust = Deck::new("rust-ownership", "Rust Ownership");
        rust.cards = vec![
            sample_card("r1", "What does `&mut T` guarantee?", "Exclusive access", 34, 5, days_ago(0)),
            sample_card("r2", "When is a value dropped?", "When its owner goes out of scope", 21, 4, days_ago(1)),
            sample_card("r3", "What does `Rc<T>` provide?", "Shared ownership, single thread", 8, 3, days_ago(2)),
            sample_card("r4", "Can `Copy` types implement `Drop`?", "No", 3, 2, days_ago(4)),
            sample_card("r5", "What is a lifetime?", "The region a reference is valid for", 1, 1, days_ago(6)),
            sample_card("r6", "What does `Box<T>` do?", "Heap-allocates a value", 0, 0, None),
        ];

        let mut spanish = Deck::new("spanish-verbs", "Spanish Verbs");
        spanish.cards = vec![
            sample_card("s1", "hablar", "to speak", 45, 5, days_ago(3)),
            sample_card("s2", "comer", "to eat", 25, 4, days_ago(3)),
            sample_card("s3", "vivir", "to live", 12, 4, days_ago(12)),
            sample_card("s4", "tener", "to have", 2, 2, days_ago(40)),
            sample_card("s5", "ir", "to go", 0, 0, None),
        ];

        let mut chemistry = Deck::new("chemistry", "Periodic Table");
        chemistry.cards = vec![
            sample_card("c1", "Symbol for sodium", "Na", 0, 0, None),
            sample_card("c2", "Symbol for iron", "Fe", 0, 0, None),
            sample_card("c3", "Atomic number of carbon", "6", 0, 0, None),
        ];

        let mut decks = vec![rust, spanish, chemistry];
        for deck in &mut decks {
            deck.refresh_last_studied();
        }
        Self { decks }
    }
}

fn sample_card(
    id: &str,
    front: &str,
    back: &str,
    interval: u32,
    rating: u8,
    last_reviewed: Option<DateTime<Utc>>,
) -> Card {
    Card {
        id: id.to_string(),
        front: front.to_string(),
        back: back.to_string(),
        interval,
        rating,
        last_reviewed,
    }
}

impl DeckStore for Store {
    fn get_deck(&self, id: &str) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.id == id)
    }

    fn get_decks(&self) -> &[Deck] {
        &self.decks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_deck_by_id() {
        let store = Store::sample(Utc::now());
        assert_eq!(
            store.get_deck("spanish-verbs").map(|d| d.name.as_str()),
            Some("Spanish Verbs")
        );
        assert!(store.get_deck("missing").is_none());
    }

    #[test]
    fn test_sample_decks_uphold_last_studied() {
        let now = Utc::now();
        let store = Store::sample(now);
        let rust = store.get_deck("rust-ownership").unwrap();
        assert_eq!(rust.last_studied, Some(now));

        let chemistry = store.get_deck("chemistry").unwrap();
        assert_eq!(chemistry.last_studied, None);
    }

    #[test]
    fn test_load_dir_reads_json_and_skips_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let reviewed = "2026-01-05T10:00:00Z";
        fs::write(
            dir.path().join("a.json"),
            format!(
                r#"{{"id":"a","name":"Alpha","cards":[{{"id":"1","interval":30,"rating":4,"last_reviewed":"{reviewed}"}}]}}"#
            ),
        )
        .unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let store = Store::load_dir(dir.path()).unwrap();
        assert_eq!(store.get_decks().len(), 1);

        let deck = store.get_deck("a").unwrap();
        assert_eq!(deck.cards[0].interval, 30);
        assert_eq!(
            deck.last_studied,
            Some(reviewed.parse::<DateTime<Utc>>().unwrap())
        );
    }

    #[test]
    fn test_open_falls_back_to_sample() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(&dir.path().join("missing"), Utc::now());
        assert!(!store.get_decks().is_empty());

        let store = Store::open(dir.path(), Utc::now());
        assert!(store.get_deck("rust-ownership").is_some());
    }
}
