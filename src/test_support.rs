//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::model::Card;
use crate::core::store::{SharedStore, Store};

/// A never-reviewed card with the given interval.
pub fn card(interval: u32) -> Card {
    Card {
        interval,
        ..Default::default()
    }
}

/// A card last reviewed at `at` with the given interval and raw rating.
pub fn reviewed_card(interval: u32, rating: u8, at: DateTime<Utc>) -> Card {
    Card {
        interval,
        rating,
        last_reviewed: Some(at),
        ..Default::default()
    }
}

/// The sample deck collection, shared the way screens receive it.
pub fn sample_store() -> SharedStore {
    Arc::new(Store::sample(Utc::now()))
}

/// Flatten a test backend buffer into one string for `contains` checks.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
