//! # TitleBar Component
//!
//! Top line: where the user is (tab plus breadcrumb trail) and the most
//! recent status message.
//!
//! Purely presentational. All data arrives as props so the bar can be
//! rendered and tested without a navigator:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(vec!["Landmarks".into(), "Lakes".into()], "Saved".into());
//! title_bar.render(frame, area);
//! ```
//!
//! Output looks like `Landmarks › Lakes › Lake Tahoe | Navigation state saved`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SEPARATOR: &str = " › ";

pub struct TitleBar {
    /// Tab title followed by one label per pushed screen.
    pub crumbs: Vec<String>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(crumbs: Vec<String>, status_message: String) -> Self {
        Self {
            crumbs,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let last = self.crumbs.len().saturating_sub(1);
        let mut spans = Vec::with_capacity(self.crumbs.len() * 2 + 2);
        for (i, crumb) in self.crumbs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            }
            let style = if i == last {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(crumb.clone(), style));
        }
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| title_bar.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_breadcrumb_with_status() {
        let mut title_bar = TitleBar::new(
            vec![
                "Landmarks".to_string(),
                "Lakes".to_string(),
                "Lake Tahoe".to_string(),
            ],
            "Navigation state saved".to_string(),
        );
        let text = rendered(&mut title_bar);
        assert!(text.contains("Landmarks › Lakes › Lake Tahoe"));
        assert!(text.contains("| Navigation state saved"));
    }

    #[test]
    fn test_root_without_status() {
        let mut title_bar = TitleBar::new(vec!["Favorites".to_string()], String::new());
        let text = rendered(&mut title_bar);
        assert!(text.contains("Favorites"));
        assert!(!text.contains('›'));
        assert!(!text.contains('|'));
    }
}
