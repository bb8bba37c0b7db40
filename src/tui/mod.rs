//! # TUI Adapter
//!
//! The ratatui-specific shell. Handles terminal I/O, renders the current
//! screen, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! navigator and everything it owns stay UI-agnostic.
//!
//! ## Lifecycle
//!
//! ```text
//! launch    → Action::Launched          → Effect::LoadState   (if restore_on_launch)
//! --open    → Action::OpenUrl(url)
//! quit      → Action::EnteredBackground → Effect::SaveState   (if save_on_background)
//! ```
//!
//! ## Input Modes
//!
//! - **Browse**: arrows move the menu selection, Enter activates, single
//!   keys are shortcuts (see the help line).
//! - **Prompt**: the URL prompt owns every key until Enter or Esc.
//!
//! Redraws happen only after an event arrives; there is nothing to animate.

pub mod component;
pub mod components;
pub mod event;
pub mod favorites;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::destination::{Destination, Tab};
use crate::core::navigator::Navigator;
use crate::core::store::{FileStateStore, MemoryStateStore, StateStore};
use crate::tui::component::EventHandler;
use crate::tui::components::screen::screen_content;
use crate::tui::components::{
    Command, MenuEvent, MenuState, PromptEvent, ScreenContext, ScreenView, UrlPrompt,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::favorites::Favorites;

/// TUI-specific presentation state (not part of navigation state)
pub struct TuiState {
    pub menu: MenuState,
    pub favorites: Favorites,
    pub status_message: String,
    /// URL prompt overlay (None = hidden, browse mode)
    pub url_prompt: Option<UrlPrompt>,
    pub url_scheme: String,
}

impl TuiState {
    pub fn new(url_scheme: String) -> Self {
        Self {
            menu: MenuState::new(),
            favorites: Favorites::new(),
            status_message: String::new(),
            url_prompt: None,
            url_scheme,
        }
    }

    fn screen_context<'a>(&'a self, catalog: &'a Catalog) -> ScreenContext<'a> {
        ScreenContext {
            catalog,
            favorites: &self.favorites,
            url_scheme: &self.url_scheme,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Release events are filtered in event.rs; the flags are ignored by
        // terminals without the keyboard enhancement protocol
        execute!(
            stdout(),
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

/// Picks the on-disk store when a state directory is configured, otherwise
/// keeps navigation state for this process only.
pub fn build_store(config: &ResolvedConfig) -> Box<dyn StateStore> {
    match &config.state_dir {
        Some(dir) => {
            info!("Navigation state stored in {}", dir.display());
            Box::new(FileStateStore::new(dir.clone()))
        }
        None => {
            info!("Navigation state kept in memory only");
            Box::new(MemoryStateStore::new())
        }
    }
}

pub fn run(config: ResolvedConfig, open_url: Option<String>) -> std::io::Result<()> {
    let mut nav = Navigator::new(Catalog::sample(), build_store(&config));
    let mut tui = TuiState::new(config.url_scheme.clone());
    launch(&mut nav, &mut tui, &config, open_url);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();
    if let Err(e) = &terminal_mode_guard {
        warn!("Failed to enable terminal modes: {}", e);
    }

    let result = event_loop(&mut terminal, &mut nav, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    shutdown(&mut nav, &mut tui, &config);
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    nav: &mut Navigator,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, nav, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }
        // Drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(nav, tui, event) {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}

/// Runs the launch lifecycle: restore saved state, then open the URL the
/// app was started with, if any.
pub fn launch(
    nav: &mut Navigator,
    tui: &mut TuiState,
    config: &ResolvedConfig,
    open_url: Option<String>,
) {
    let effect = update(nav, Action::Launched);
    if config.restore_on_launch {
        apply_effect(nav, tui, effect);
    } else {
        debug!("Skipping restore on launch ({:?})", effect);
    }
    if let Some(url) = open_url {
        run_command(nav, tui, Command::Run(Action::OpenUrl(url)));
    }
}

/// Runs the exit lifecycle: persist navigation unless configured not to.
pub fn shutdown(nav: &mut Navigator, tui: &mut TuiState, config: &ResolvedConfig) {
    let effect = update(nav, Action::EnteredBackground);
    if config.save_on_background {
        apply_effect(nav, tui, effect);
    } else {
        debug!("Skipping save on exit ({:?})", effect);
    }
}

/// Handles one input event. Returns `true` when the app should quit.
pub fn handle_event(nav: &mut Navigator, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Resize => return false,
        // Ctrl+C always quits, even with the prompt open
        TuiEvent::ForceQuit => return run_command(nav, tui, Command::Run(Action::Quit)),
        _ => {}
    }

    let visible_before = visible_screen(nav);
    let prompt_event = tui.url_prompt.as_mut().map(|prompt| prompt.handle_event(&event));
    let quit = match prompt_event {
        Some(Some(PromptEvent::Submit(url))) => {
            tui.url_prompt = None;
            run_command(nav, tui, Command::Run(Action::OpenUrl(url)))
        }
        Some(Some(PromptEvent::Cancel)) => {
            tui.url_prompt = None;
            false
        }
        Some(None) => false,
        None => handle_browse_event(nav, tui, event),
    };
    if visible_screen(nav) != visible_before {
        tui.menu.reset();
    }
    quit
}

fn visible_screen(nav: &Navigator) -> (Tab, Option<Destination>) {
    (nav.selected_tab(), nav.current_stack().top().cloned())
}

fn handle_browse_event(nav: &mut Navigator, tui: &mut TuiState, event: TuiEvent) -> bool {
    let command = match event {
        TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::Submit => {
            let content = screen_content(
                &tui.screen_context(nav.catalog()),
                nav.selected_tab(),
                nav.current_stack().top(),
            );
            match ScreenView::new(&content, &mut tui.menu).handle_event(&event) {
                Some(MenuEvent::Activate(command)) => command,
                None => return false,
            }
        }
        TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::CursorLeft => Command::Run(Action::Pop),
        TuiEvent::NextTab => Command::Run(Action::SelectTab(nav.selected_tab().next())),
        TuiEvent::PrevTab => Command::Run(Action::SelectTab(nav.selected_tab().prev())),
        TuiEvent::InputChar(c) => match shortcut(nav, c) {
            Some(command) => command,
            None => return false,
        },
        TuiEvent::Paste(_) | TuiEvent::Resize | TuiEvent::ForceQuit => return false,
    };
    tui.status_message.clear();
    run_command(nav, tui, command)
}

fn shortcut(nav: &Navigator, c: char) -> Option<Command> {
    let command = match c {
        'q' => Command::Run(Action::Quit),
        'h' => Command::Run(Action::PopToRoot),
        '1'..='3' => {
            let index = c as usize - '1' as usize;
            Command::Run(Action::SelectTab(Tab::ALL[index]))
        }
        ':' | 'o' => Command::PromptUrl,
        'f' => Command::ToggleFavorite(nav.current_stack().top()?.landmark_id()?),
        's' => Command::Perform(Effect::SaveState),
        'r' => Command::Perform(Effect::LoadState),
        'x' => Command::Run(Action::ClearSavedState),
        _ => return None,
    };
    Some(command)
}

/// Executes a menu or shortcut command. Returns `true` to quit.
fn run_command(nav: &mut Navigator, tui: &mut TuiState, command: Command) -> bool {
    match command {
        Command::Run(action) => {
            let effect = update(nav, action);
            apply_effect(nav, tui, effect)
        }
        Command::Perform(effect) => apply_effect(nav, tui, effect),
        Command::ToggleFavorite(id) => {
            let name = nav
                .catalog()
                .get(id)
                .map(|l| l.name.clone())
                .unwrap_or_else(|| id.to_string());
            tui.status_message = if tui.favorites.toggle(id) {
                format!("Added {name} to favorites")
            } else {
                format!("Removed {name} from favorites")
            };
            false
        }
        Command::PromptUrl => {
            tui.url_prompt = Some(UrlPrompt::with_scheme(&tui.url_scheme));
            false
        }
    }
}

/// Executes an effect returned by `update()`. Returns `true` to quit.
pub fn apply_effect(nav: &mut Navigator, tui: &mut TuiState, effect: Effect) -> bool {
    match effect {
        Effect::None => {}
        Effect::SaveState => {
            tui.status_message = if nav.save_state() {
                "Navigation state saved".to_string()
            } else {
                "Could not save navigation state".to_string()
            };
        }
        Effect::LoadState => {
            tui.status_message = if nav.load_state() {
                "Navigation state restored".to_string()
            } else {
                "No saved navigation state to restore".to_string()
            };
        }
        Effect::ClearSavedState => {
            nav.clear_saved_state();
            tui.status_message = "Saved navigation state cleared".to_string();
        }
        Effect::Rejected(e) => tui.status_message = e.to_string(),
        Effect::Unresolved(url) => tui.status_message = format!("No destination for {url}"),
        Effect::Quit => return true,
    }
    false
}
