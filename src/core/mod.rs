//! # Core Application Logic
//!
//! This module contains Deckhand's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck / Card / Rating │
//!                    │  • DeckStore (lookup)   │
//!                    │  • stats (aggregation)  │
//!                    │                         │
//!                    │  No UI. Pure stats.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: Decks, cards and the closed `Rating` scale
//! - [`store`]: The `DeckStore` lookup trait and the JSON-backed `Store`
//! - [`stats`]: Per-deck statistics for the review dashboard
//! - [`config`]: `~/.deckhand/config.toml` loading and resolution

pub mod config;
pub mod model;
pub mod stats;
pub mod store;
