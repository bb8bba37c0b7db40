//! # Actions
//!
//! Everything that can happen to navigation becomes an `Action`.
//! User taps a landmark? That's `Action::Push(..)`.
//! The OS hands us a URL? That's `Action::OpenUrl(url)`.
//!
//! `update()` applies the navigation part directly and returns an `Effect`
//! for anything that needs I/O. Persistence is executed by the caller, so the
//! reducer itself never touches the state store.
//!
//! ```text
//! Navigator + Action  →  update()  →  Navigator' + Effect
//! ```

use log::debug;

use crate::core::destination::{Destination, Tab};
use crate::core::navigator::{NavigationError, Navigator};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A URL was opened from outside the app.
    OpenUrl(String),
    Navigate(Vec<Destination>),
    Push(Destination),
    Pop,
    PopToRoot,
    ReplaceStack(Vec<Destination>),
    SelectTab(Tab),
    /// App launched; restore whatever was saved.
    Launched,
    /// App is leaving the foreground; persist navigation.
    EnteredBackground,
    ClearSavedState,
    Quit,
}

/// Follow-up work for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    SaveState,
    LoadState,
    ClearSavedState,
    /// The operation was refused; state is unchanged.
    Rejected(NavigationError),
    /// The URL did not resolve; state is unchanged.
    Unresolved(String),
    Quit,
}

pub fn update(nav: &mut Navigator, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::OpenUrl(url) => {
            if nav.handle_deep_link(&url) {
                Effect::None
            } else {
                Effect::Unresolved(url)
            }
        }
        Action::Navigate(screens) => rejected_or_none(nav.navigate(screens)),
        Action::Push(screen) => rejected_or_none(nav.push(screen)),
        Action::Pop => {
            nav.pop();
            Effect::None
        }
        Action::PopToRoot => {
            nav.pop_to_root();
            Effect::None
        }
        Action::ReplaceStack(screens) => rejected_or_none(nav.replace_stack(screens)),
        Action::SelectTab(tab) => {
            nav.select_tab(tab);
            Effect::None
        }
        Action::Launched => Effect::LoadState,
        Action::EnteredBackground => Effect::SaveState,
        Action::ClearSavedState => Effect::ClearSavedState,
        Action::Quit => Effect::Quit,
    }
}

fn rejected_or_none(result: Result<(), NavigationError>) -> Effect {
    match result {
        Ok(()) => Effect::None,
        Err(e) => Effect::Rejected(e),
    }
}
