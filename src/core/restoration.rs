//! # State Restoration
//!
//! Snapshot of everything the navigator knows (selected tab plus all three
//! stacks) and its persisted JSON form.
//!
//! ```text
//! NavigatorState ──encode──▶ RestorationRecord (JSON bytes) ──▶ StateStore["NavigatorState"]
//! NavigatorState ◀─decode─── RestorationRecord (JSON bytes) ◀── StateStore["NavigatorState"]
//! ```
//!
//! There is no schema version. A record that no longer parses, or that puts
//! a destination on the wrong tab's stack, is rejected as a whole.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::destination::{Destination, Tab};
use crate::core::stack::NavigationStack;

/// Key of the single record the navigator keeps in its `StateStore`.
pub const STATE_KEY: &str = "NavigatorState";

/// The navigator's full observable state. Always holds exactly one stack per tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigatorState {
    selected_tab: Tab,
    stacks: [NavigationStack; 3],
}

impl Default for NavigatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigatorState {
    /// Initial state: first tab selected, every stack at its root.
    pub fn new() -> Self {
        Self {
            selected_tab: Tab::default(),
            stacks: Tab::ALL.map(NavigationStack::new),
        }
    }

    /// Builds a state from raw per-tab paths, checking that every destination
    /// belongs to the stack it is placed on.
    pub fn from_paths(
        selected_tab: Tab,
        landmarks: Vec<Destination>,
        favorites: Vec<Destination>,
        deep_links: Vec<Destination>,
    ) -> Result<Self, CodecError> {
        let paths = [landmarks, favorites, deep_links];
        for (tab, path) in Tab::ALL.into_iter().zip(&paths) {
            if let Some(stray) = path.iter().find(|d| d.tab() != tab) {
                return Err(CodecError::Invariant {
                    stack: tab,
                    found: stray.tab(),
                });
            }
        }
        let [landmarks, favorites, deep_links] = paths;
        Ok(Self {
            selected_tab,
            stacks: [
                NavigationStack::from_entries(Tab::Landmarks, landmarks),
                NavigationStack::from_entries(Tab::Favorites, favorites),
                NavigationStack::from_entries(Tab::DeepLinks, deep_links),
            ],
        })
    }

    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    pub(crate) fn set_selected_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
    }

    pub fn stack(&self, tab: Tab) -> &NavigationStack {
        &self.stacks[tab.index()]
    }

    pub(crate) fn stack_mut(&mut self, tab: Tab) -> &mut NavigationStack {
        &mut self.stacks[tab.index()]
    }

    pub fn current_stack(&self) -> &NavigationStack {
        self.stack(self.selected_tab)
    }

    /// Total number of pushed screens across all tabs.
    pub fn depth(&self) -> usize {
        self.stacks.iter().map(NavigationStack::len).sum()
    }
}

/// Persisted form of a [`NavigatorState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestorationRecord {
    pub selected_tab: Tab,
    pub landmarks_path: Vec<Destination>,
    pub favorites_path: Vec<Destination>,
    pub deep_links_path: Vec<Destination>,
    /// When the record was written. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl RestorationRecord {
    pub fn from_state(state: &NavigatorState, saved_at: Option<DateTime<Utc>>) -> Self {
        Self {
            selected_tab: state.selected_tab,
            landmarks_path: state.stack(Tab::Landmarks).to_vec(),
            favorites_path: state.stack(Tab::Favorites).to_vec(),
            deep_links_path: state.stack(Tab::DeepLinks).to_vec(),
            saved_at,
        }
    }

    pub fn into_state(self) -> Result<NavigatorState, CodecError> {
        NavigatorState::from_paths(
            self.selected_tab,
            self.landmarks_path,
            self.favorites_path,
            self.deep_links_path,
        )
    }
}

#[derive(Debug)]
pub enum CodecError {
    /// The bytes are not a record this build understands.
    Json(serde_json::Error),
    /// A destination sits on a stack other than its owning tab's.
    Invariant { stack: Tab, found: Tab },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Json(e) => write!(f, "malformed restoration record: {e}"),
            CodecError::Invariant { stack, found } => {
                write!(f, "{found} destination stored on the {stack} stack")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Encodes `state` as a restoration record stamped with the current time.
pub fn encode(state: &NavigatorState) -> Result<Vec<u8>, CodecError> {
    let record = RestorationRecord::from_state(state, Some(Utc::now()));
    serde_json::to_vec_pretty(&record).map_err(CodecError::Json)
}

pub fn decode_record(bytes: &[u8]) -> Result<RestorationRecord, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::Json)
}

pub fn decode(bytes: &[u8]) -> Result<NavigatorState, CodecError> {
    decode_record(bytes)?.into_state()
}
