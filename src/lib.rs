//! Landmarks: tabbed, stack-based navigation with deep links and state
//! restoration, driven from a terminal UI.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
