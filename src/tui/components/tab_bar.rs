//! # TabBar Component
//!
//! One entry per tab, highlighting the selected one. Tabs with pushed
//! screens show their depth, since switching tabs never discards history.

use crate::core::destination::Tab;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

pub struct TabBar {
    pub selected: Tab,
    /// Stack depth per tab, indexed like `Tab::ALL`.
    pub depths: [usize; 3],
}

impl TabBar {
    pub fn new(selected: Tab, depths: [usize; 3]) -> Self {
        Self { selected, depths }
    }

    fn label(tab: Tab, depth: usize) -> String {
        let number = tab.index() + 1;
        if depth == 0 {
            format!("{number} {}", tab.title())
        } else {
            format!("{number} {} ({depth})", tab.title())
        }
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Tab::ALL.map(|tab| Self::label(tab, self.depths[tab.index()]));
        let tabs = Tabs::new(titles)
            .select(self.selected.index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("│");
        frame.render_widget(tabs, area);
    }
}
