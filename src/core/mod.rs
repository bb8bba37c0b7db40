//! # Core Navigation Logic
//!
//! This module owns all "where am I" state for the app.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (stacks)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • deep links, restore  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Tests    │      │   Other    │
//!     │   Shell    │      │            │      │  shells    │
//!     │ (ratatui)  │      │            │      │  (future)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: the static landmark catalog (read-only input)
//! - [`destination`]: `Tab` and the `Destination` screen model
//! - [`stack`]: the per-tab LIFO back-stack
//! - [`navigator`]: the `Navigator` that owns the three stacks
//! - [`deep_link`]: URL → destinations
//! - [`restoration`]: snapshot + JSON codec for persistence
//! - [`store`]: key-value stores holding the persisted snapshot
//! - [`action`]: the `Action` enum and `update()` reducer
//! - [`config`]: settings from file, env and CLI

pub mod action;
pub mod catalog;
pub mod config;
pub mod deep_link;
pub mod destination;
pub mod navigator;
pub mod restoration;
pub mod stack;
pub mod store;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, Category, Landmark, LandmarkId};
pub use destination::{DeepLinksScreen, Destination, FavoritesScreen, LandmarksScreen, Tab};
pub use navigator::{NavigationError, Navigator};
pub use restoration::NavigatorState;
pub use stack::NavigationStack;
pub use store::{FileStateStore, MemoryStateStore, StateStore};
