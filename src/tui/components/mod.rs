//! # TUI Components
//!
//! Stateless components take everything as props:
//! - `TitleBar`: breadcrumb trail and status message
//! - `TabBar`: the three tabs and their stack depths
//!
//! Stateful components own a bit of local state and emit events:
//! - `ScreenView`: the visible screen and its menu (`MenuEvent`)
//! - `UrlPrompt`: modal URL input (`PromptEvent`)
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── screen.rs      (destination → screen content, menu)
//! ├── tab_bar.rs
//! ├── title_bar.rs
//! └── url_prompt.rs
//! ```

pub mod screen;
mod tab_bar;
mod title_bar;
mod url_prompt;

pub use screen::{Command, MenuEvent, MenuState, ScreenContent, ScreenContext, ScreenView};
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;
pub use url_prompt::{PromptEvent, UrlPrompt};
