//! # Deck Statistics
//!
//! Pure aggregation over a deck snapshot. Nothing here fails: empty decks,
//! decks without reviews and unknown ids all map to zero values or
//! placeholder text.
//!
//! Windowed metrics (success rate, rating distribution) only look at cards
//! reviewed within the last [`REVIEW_WINDOW_DAYS`] days before `now`. The
//! caller passes `now` in, so results depend on when the screen is drawn.

use std::fmt;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::core::model::{Card, Deck, Rating};
use crate::core::store::DeckStore;

/// Trailing window for success rate and rating distribution.
pub const REVIEW_WINDOW_DAYS: i64 = 30;

/// Widest bar the ratings chart draws, in cells.
pub const DEFAULT_MAX_BAR_WIDTH: usize = 30;

// ============================================================================
// Deck resolution
// ============================================================================

/// Outcome of picking the deck to report on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckLookup<'a> {
    Found(&'a Deck),
    /// An id was resolved but the store doesn't know it.
    NotFound,
    /// No explicit id, and no deck has ever been studied.
    NoDeck,
}

impl DeckLookup<'_> {
    /// Text shown in place of the report when there is no deck.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            DeckLookup::Found(_) => None,
            DeckLookup::NotFound => Some("Selected deck not found."),
            DeckLookup::NoDeck => Some("No deck available to show statistics."),
        }
    }
}

/// Pick a deck id: the explicit one if non-empty, else the most recently
/// studied deck. Ties keep the first deck encountered.
pub fn resolve_deck_id<'a>(explicit: Option<&'a str>, decks: &'a [Deck]) -> Option<&'a str> {
    if let Some(id) = explicit.filter(|id| !id.is_empty()) {
        return Some(id);
    }

    let mut latest: Option<(&DateTime<Utc>, &str)> = None;
    for deck in decks {
        if let Some(studied) = &deck.last_studied
            && latest.is_none_or(|(best, _)| studied > best)
        {
            latest = Some((studied, deck.id.as_str()));
        }
    }
    latest.map(|(_, id)| id)
}

/// Resolve the deck id and fetch it from the store.
pub fn lookup_deck<'a>(store: &'a dyn DeckStore, explicit: Option<&str>) -> DeckLookup<'a> {
    let decks = store.get_decks();
    match resolve_deck_id(explicit, decks) {
        None => DeckLookup::NoDeck,
        Some(id) => store
            .get_deck(id)
            .map_or(DeckLookup::NotFound, DeckLookup::Found),
    }
}

// ============================================================================
// Metrics
// ============================================================================

fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    now - TimeDelta::days(REVIEW_WINDOW_DAYS)
}

/// Whether the card's last review falls inside the trailing window.
pub fn reviewed_within_window(card: &Card, now: DateTime<Utc>) -> bool {
    let start = window_start(now);
    card.last_reviewed.is_some_and(|at| at > start)
}

/// Cards with an interval of at least 21 days.
pub fn mature_card_count(deck: &Deck) -> usize {
    deck.cards.iter().filter(|card| card.is_mature()).count()
}

/// Percentage (truncated) of recently reviewed cards rated Hard or better.
/// Zero when nothing was reviewed in the window.
pub fn success_rate(deck: &Deck, now: DateTime<Utc>) -> u32 {
    let (reviewed, successful) = deck
        .cards
        .iter()
        .filter(|card| reviewed_within_window(card, now))
        .fold((0usize, 0usize), |(reviewed, successful), card| {
            let ok = card.rating >= Rating::Hard.score();
            (reviewed + 1, successful + usize::from(ok))
        });

    if reviewed == 0 {
        return 0;
    }
    (successful * 100 / reviewed) as u32
}

/// Mean interval over cards that have been reviewed and have a positive
/// interval. Not windowed.
pub fn average_interval(deck: &Deck) -> f64 {
    let (count, total) = deck
        .cards
        .iter()
        .filter(|card| card.is_reviewed() && card.interval > 0)
        .fold((0u64, 0u64), |(count, total), card| {
            (count + 1, total + u64::from(card.interval))
        });

    if count == 0 {
        return 0.0;
    }
    total as f64 / count as f64
}

/// Review counts per rating within the trailing window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RatingDistribution {
    counts: [usize; 5],
}

impl RatingDistribution {
    pub fn from_counts(counts: [usize; 5]) -> Self {
        Self { counts }
    }

    pub fn record(&mut self, rating: Rating) {
        self.counts[rating.index()] += 1;
    }

    pub fn count(&self, rating: Rating) -> usize {
        self.counts[rating.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(rating, count)` pairs in rating order.
    pub fn iter(&self) -> impl Iterator<Item = (Rating, usize)> + '_ {
        Rating::ALL.iter().map(|&rating| (rating, self.count(rating)))
    }
}

/// Bucket recent reviews by rating. Stale reviews and out-of-range scores
/// are left out.
pub fn rating_distribution(deck: &Deck, now: DateTime<Utc>) -> RatingDistribution {
    let mut distribution = RatingDistribution::default();
    for card in deck
        .cards
        .iter()
        .filter(|card| reviewed_within_window(card, now))
    {
        if let Some(rating) = Rating::from_score(card.rating) {
            distribution.record(rating);
        }
    }
    distribution
}

// ============================================================================
// Chart layout
// ============================================================================

/// One bar of the ratings chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRow {
    pub rating: Rating,
    pub count: usize,
    /// Share of all recent reviews, truncated.
    pub percent: usize,
    /// Bar length in cells. At least 1 whenever `percent` is non-zero.
    pub bar_width: usize,
}

/// Lay out the five chart bars. `None` when there is no data to chart.
pub fn chart_rows(distribution: &RatingDistribution, max_width: usize) -> Option<[ChartRow; 5]> {
    let total = distribution.total();
    if total == 0 {
        return None;
    }

    Some(Rating::ALL.map(|rating| {
        let count = distribution.count(rating);
        let percent = count * 100 / total;
        let mut bar_width = percent * max_width / 100;
        if percent > 0 && bar_width == 0 {
            bar_width = 1;
        }
        ChartRow {
            rating,
            count,
            percent,
            bar_width,
        }
    }))
}

// ============================================================================
// Formatting
// ============================================================================

/// "Never", "Today", "Yesterday" or a short date like "Mar 7".
///
/// Days are compared as calendar dates in `now`'s timezone, not as elapsed
/// 24-hour spans.
pub fn format_last_studied<Tz>(last: Option<DateTime<Utc>>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let Some(last) = last else {
        return "Never".to_string();
    };

    let last = last.with_timezone(&now.timezone());
    let today = now.date_naive();
    let day = last.date_naive();

    if day == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(day) {
        "Yesterday".to_string()
    } else {
        last.format("%b %-d").to_string()
    }
}

// ============================================================================
// Report
// ============================================================================

/// Everything the deck review screen shows for one deck.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckReport {
    pub deck_name: String,
    pub total_cards: usize,
    pub mature_cards: usize,
    pub new_cards: usize,
    pub success_rate: u32,
    pub average_interval: f64,
    pub last_studied: String,
    pub distribution: RatingDistribution,
}

impl DeckReport {
    pub fn build<Tz>(deck: &Deck, now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let utc_now = now.with_timezone(&Utc);
        let total_cards = deck.cards.len();
        let mature_cards = mature_card_count(deck);

        Self {
            deck_name: deck.name.clone(),
            total_cards,
            mature_cards,
            new_cards: total_cards - mature_cards,
            success_rate: success_rate(deck, utc_now),
            average_interval: average_interval(deck),
            last_studied: format_last_studied(deck.last_studied, now),
            distribution: rating_distribution(deck, utc_now),
        }
    }

    /// Average interval with one decimal, e.g. "12.5 days".
    pub fn average_interval_text(&self) -> String {
        format!("{:.1} days", self.average_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::Store;
    use crate::test_support::{card, reviewed_card};

    fn now() -> DateTime<Utc> {
        "2026-03-15T12:00:00Z".parse().unwrap()
    }

    /// 10 cards, 4 reviewed in the window at ratings 3, 4, 5, 2.
    fn scenario_deck(now: DateTime<Utc>) -> Deck {
        let mut deck = Deck::new("scenario", "Scenario");
        deck.cards = vec![
            reviewed_card(5, 3, now - TimeDelta::days(1)),
            reviewed_card(10, 4, now - TimeDelta::days(5)),
            reviewed_card(25, 5, now - TimeDelta::days(10)),
            reviewed_card(1, 2, now - TimeDelta::days(29)),
            // Outside the window
            reviewed_card(30, 1, now - TimeDelta::days(31)),
            reviewed_card(40, 5, now - TimeDelta::days(90)),
            card(0),
            card(0),
            card(0),
            card(0),
        ];
        deck.refresh_last_studied();
        deck
    }

    #[test]
    fn test_scenario_success_rate_and_distribution() {
        let deck = scenario_deck(now());
        assert_eq!(success_rate(&deck, now()), 75);
        assert_eq!(
            rating_distribution(&deck, now()),
            RatingDistribution::from_counts([0, 1, 1, 1, 1])
        );
    }

    #[test]
    fn test_success_rate_zero_without_recent_reviews() {
        let mut deck = Deck::new("d", "D");
        assert_eq!(success_rate(&deck, now()), 0);

        deck.cards = vec![reviewed_card(3, 5, now() - TimeDelta::days(45)), card(0)];
        assert_eq!(success_rate(&deck, now()), 0);
        assert_eq!(rating_distribution(&deck, now()).total(), 0);
    }

    #[test]
    fn test_success_rate_truncates() {
        let mut deck = Deck::new("d", "D");
        deck.cards = vec![
            reviewed_card(1, 4, now()),
            reviewed_card(1, 1, now()),
            reviewed_card(1, 1, now()),
        ];
        assert_eq!(success_rate(&deck, now()), 33);
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut deck = Deck::new("d", "D");
        deck.cards = vec![reviewed_card(1, 5, now() - TimeDelta::days(REVIEW_WINDOW_DAYS))];
        assert!(!reviewed_within_window(&deck.cards[0], now()));
        assert_eq!(success_rate(&deck, now()), 0);
    }

    #[test]
    fn test_mature_plus_new_equals_total() {
        let deck = scenario_deck(now());
        let report = DeckReport::build(&deck, &now());
        assert_eq!(report.mature_cards, 3);
        assert_eq!(report.mature_cards + report.new_cards, report.total_cards);
        assert_eq!(report.total_cards, 10);
    }

    #[test]
    fn test_average_interval_filters_unreviewed_and_zero() {
        let mut deck = Deck::new("d", "D");
        assert_eq!(average_interval(&deck), 0.0);

        deck.cards = vec![
            reviewed_card(10, 4, now() - TimeDelta::days(200)),
            reviewed_card(20, 4, now()),
            reviewed_card(0, 2, now()),
            // Scheduled but never reviewed
            card(99),
        ];
        assert_eq!(average_interval(&deck), 15.0);
    }

    #[test]
    fn test_distribution_skips_out_of_range_ratings() {
        let mut deck = Deck::new("d", "D");
        deck.cards = vec![
            reviewed_card(1, 0, now()),
            reviewed_card(1, 6, now()),
            reviewed_card(1, 4, now()),
        ];
        let dist = rating_distribution(&deck, now());
        assert_eq!(dist.total(), 1);
        assert_eq!(dist.count(Rating::Good), 1);
        // Out-of-range ratings still count as reviews for the success rate
        assert_eq!(success_rate(&deck, now()), 66);
    }

    #[test]
    fn test_chart_rows_empty_distribution() {
        assert!(chart_rows(&RatingDistribution::default(), DEFAULT_MAX_BAR_WIDTH).is_none());
    }

    #[test]
    fn test_chart_rows_widths_and_order() {
        let dist = RatingDistribution::from_counts([0, 1, 1, 1, 1]);
        let rows = chart_rows(&dist, DEFAULT_MAX_BAR_WIDTH).unwrap();

        let ratings: Vec<_> = rows.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, Rating::ALL.to_vec());
        assert_eq!(rows[0].percent, 0);
        assert_eq!(rows[0].bar_width, 0);
        assert_eq!(rows[1].percent, 25);
        assert_eq!(rows[1].bar_width, 7);
    }

    #[test]
    fn test_chart_rows_minimum_visible_bar() {
        // 1 of 99 is 1%, which floors to 0 cells at width 30
        let dist = RatingDistribution::from_counts([1, 0, 0, 0, 98]);
        let rows = chart_rows(&dist, DEFAULT_MAX_BAR_WIDTH).unwrap();
        assert_eq!(rows[0].percent, 1);
        assert_eq!(rows[0].bar_width, 1);
        assert_eq!(rows[4].percent, 98);
        assert_eq!(rows[4].bar_width, 29);
    }

    #[test]
    fn test_format_last_studied() {
        let now = now();
        assert_eq!(format_last_studied(None, &now), "Never");
        assert_eq!(format_last_studied(Some(now), &now), "Today");
        assert_eq!(
            format_last_studied(Some(now - TimeDelta::days(1)), &now),
            "Yesterday"
        );
        assert_eq!(
            format_last_studied(Some(now - TimeDelta::days(8)), &now),
            "Mar 7"
        );
    }

    #[test]
    fn test_format_last_studied_uses_calendar_days() {
        let now: DateTime<Utc> = "2026-03-15T00:30:00Z".parse().unwrap();
        // Only an hour ago, but on the previous calendar day
        let last: DateTime<Utc> = "2026-03-14T23:30:00Z".parse().unwrap();
        assert_eq!(format_last_studied(Some(last), &now), "Yesterday");
    }

    #[test]
    fn test_resolve_prefers_explicit_id() {
        let store = Store::sample(now());
        assert_eq!(
            resolve_deck_id(Some("chemistry"), store.get_decks()),
            Some("chemistry")
        );
        // Empty id counts as absent
        assert_eq!(
            resolve_deck_id(Some(""), store.get_decks()),
            Some("rust-ownership")
        );
    }

    #[test]
    fn test_resolve_most_recent_deck() {
        let mut older = Deck::new("older", "Older");
        older.last_studied = Some(now() - TimeDelta::days(3));
        let mut newer = Deck::new("newer", "Newer");
        newer.last_studied = Some(now());
        let never = Deck::new("never", "Never");

        let decks = vec![older, never, newer];
        assert_eq!(resolve_deck_id(None, &decks), Some("newer"));
    }

    #[test]
    fn test_lookup_outcomes() {
        let store = Store::sample(now());
        assert!(matches!(
            lookup_deck(&store, None),
            DeckLookup::Found(deck) if deck.id == "rust-ownership"
        ));

        let missing = lookup_deck(&store, Some("nope"));
        assert_eq!(missing, DeckLookup::NotFound);
        assert_eq!(missing.message(), Some("Selected deck not found."));

        let unstudied = Store::from_decks(vec![Deck::new("fresh", "Fresh")]);
        let none = lookup_deck(&unstudied, None);
        assert_eq!(none, DeckLookup::NoDeck);
        assert_eq!(none.message(), Some("No deck available to show statistics."));
    }

    #[test]
    fn test_report_text_fields() {
        let deck = scenario_deck(now());
        let report = DeckReport::build(&deck, &now());
        assert_eq!(report.deck_name, "Scenario");
        assert_eq!(report.last_studied, "Yesterday");
        assert_eq!(report.average_interval_text(), "18.5 days");
    }
}
