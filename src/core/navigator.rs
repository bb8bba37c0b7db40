//! # Navigator
//!
//! Owns all "where am I" state: the selected tab and one back-stack per tab.
//! Every mutation is synchronous and immediately visible through
//! [`Navigator::state`].
//!
//! ```text
//! Navigator
//! ├── state: NavigatorState         // selected tab + 3 stacks
//! ├── catalog: Arc<Catalog>         // read-only, for deep links
//! └── store: Box<dyn StateStore>    // holds the single restoration record
//! ```
//!
//! A navigator is constructed once and passed explicitly to whoever drives
//! it. It is not `Sync`; callers serialize access on one thread.
//!
//! Failure policy: unresolvable links, missing or corrupt saved state and
//! store I/O errors leave the in-memory state untouched and are only
//! logged. Operations that would put a destination on another tab's stack
//! are refused with a [`NavigationError`].

use log::{debug, info, warn};
use std::fmt;
use std::sync::Arc;

use crate::core::catalog::Catalog;
use crate::core::deep_link;
use crate::core::destination::{Destination, Tab};
use crate::core::restoration::{self, NavigatorState, STATE_KEY};
use crate::core::stack::NavigationStack;
use crate::core::store::StateStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The destination belongs to a different tab than the one being modified.
    WrongTab { expected: Tab, found: Tab },
    /// A multi-screen navigation spans more than one tab.
    MixedTabs { first: Tab, found: Tab },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::WrongTab { expected, found } => {
                write!(f, "{found} screen cannot go on the {expected} stack")
            }
            NavigationError::MixedTabs { first, found } => {
                write!(f, "navigation to {first} also contains a {found} screen")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

pub struct Navigator {
    state: NavigatorState,
    catalog: Arc<Catalog>,
    store: Box<dyn StateStore>,
}

impl Navigator {
    pub fn new(catalog: Arc<Catalog>, store: Box<dyn StateStore>) -> Self {
        Self {
            state: NavigatorState::new(),
            catalog,
            store,
        }
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn selected_tab(&self) -> Tab {
        self.state.selected_tab()
    }

    pub fn stack(&self, tab: Tab) -> &NavigationStack {
        self.state.stack(tab)
    }

    pub fn current_stack(&self) -> &NavigationStack {
        self.state.current_stack()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!("select_tab: {:?} -> {:?}", self.selected_tab(), tab);
        self.state.set_selected_tab(tab);
    }

    // ── Programmatic navigation ─────────────────────────────────────────────

    /// Switches to the tab owning the first screen and replaces that tab's
    /// stack with `screens`. Empty input is a no-op.
    pub fn navigate(&mut self, screens: Vec<Destination>) -> Result<(), NavigationError> {
        let Some(first) = screens.first() else {
            return Ok(());
        };
        let tab = first.tab();
        if let Some(stray) = screens.iter().find(|d| d.tab() != tab) {
            warn!("navigate rejected: {} screen in a {} batch", stray.tab(), tab);
            return Err(NavigationError::MixedTabs {
                first: tab,
                found: stray.tab(),
            });
        }
        debug!("navigate: {:?} <- {} screen(s)", tab, screens.len());
        self.state.set_selected_tab(tab);
        self.state.stack_mut(tab).replace(screens);
        Ok(())
    }

    pub fn navigate_to(&mut self, screen: Destination) -> Result<(), NavigationError> {
        self.navigate(vec![screen])
    }

    /// Pushes onto the selected tab's stack without switching tabs.
    pub fn push(&mut self, screen: Destination) -> Result<(), NavigationError> {
        let expected = self.selected_tab();
        if screen.tab() != expected {
            warn!("push rejected: {} onto {:?}", screen, expected);
            return Err(NavigationError::WrongTab {
                expected,
                found: screen.tab(),
            });
        }
        debug!("push: {:?} <- {}", expected, screen);
        self.state.stack_mut(expected).push(screen);
        Ok(())
    }

    /// Pops the selected tab's stack. At the root this does nothing.
    pub fn pop(&mut self) {
        let tab = self.selected_tab();
        if let Some(popped) = self.state.stack_mut(tab).pop() {
            debug!("pop: {:?} -> {}", tab, popped);
        }
    }

    pub fn pop_to_root(&mut self) {
        let tab = self.selected_tab();
        debug!("pop_to_root: {:?} (depth {})", tab, self.stack(tab).len());
        self.state.stack_mut(tab).reset();
    }

    /// Replaces the selected tab's history wholesale, so the old screens
    /// can't be reached with back navigation.
    pub fn replace_stack(&mut self, screens: Vec<Destination>) -> Result<(), NavigationError> {
        let expected = self.selected_tab();
        if let Some(stray) = screens.iter().find(|d| d.tab() != expected) {
            warn!("replace_stack rejected: {} onto {:?}", stray, expected);
            return Err(NavigationError::WrongTab {
                expected,
                found: stray.tab(),
            });
        }
        debug!("replace_stack: {:?} <- {} screen(s)", expected, screens.len());
        self.state.stack_mut(expected).replace(screens);
        Ok(())
    }

    /// Resolves `url` and navigates to it. Returns whether anything happened.
    pub fn handle_deep_link(&mut self, url: &str) -> bool {
        let Some(screens) = deep_link::resolve(url, &self.catalog) else {
            info!("Deep link did not resolve: {}", url);
            return false;
        };
        info!("Deep link {} -> {} screen(s)", url, screens.len());
        self.navigate(screens).is_ok()
    }

    // ── State restoration ───────────────────────────────────────────────────

    pub fn capture(&self) -> NavigatorState {
        self.state.clone()
    }

    pub fn restore(&mut self, state: NavigatorState) {
        debug!(
            "restore: tab {:?}, {} screen(s)",
            state.selected_tab(),
            state.depth()
        );
        self.state = state;
    }

    /// Writes the current state to the store, overwriting any previous record.
    pub fn save_state(&self) -> bool {
        let bytes = match restoration::encode(&self.state) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to encode navigation state: {}", e);
                return false;
            }
        };
        match self.store.write(STATE_KEY, &bytes) {
            Ok(()) => {
                info!("Navigation state saved ({} screen(s))", self.state.depth());
                true
            }
            Err(e) => {
                warn!("Failed to save navigation state: {}", e);
                false
            }
        }
    }

    /// Restores the saved record if there is a readable one. Otherwise the
    /// current state is left as is.
    pub fn load_state(&mut self) -> bool {
        let bytes = match self.store.read(STATE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("No saved navigation state");
                return false;
            }
            Err(e) => {
                warn!("Failed to read navigation state: {}", e);
                return false;
            }
        };
        match restoration::decode(&bytes) {
            Ok(state) => {
                self.restore(state);
                info!("Navigation state restored");
                true
            }
            Err(e) => {
                warn!("Ignoring saved navigation state: {}", e);
                false
            }
        }
    }

    pub fn clear_saved_state(&self) {
        match self.store.remove(STATE_KEY) {
            Ok(()) => info!("Saved navigation state cleared"),
            Err(e) => warn!("Failed to clear navigation state: {}", e),
        }
    }
}
