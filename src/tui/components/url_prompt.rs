//! # UrlPrompt Component
//!
//! Single-line modal input for typing a URL to open, as if another app had
//! handed it over. Enter submits, Esc cancels.
//!
//! The buffer is internal state. Editing is append-only (typing, paste,
//! backspace), which is all a URL prompt needs.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum PromptEvent {
    /// Enter with a non-blank buffer. Carries the trimmed URL.
    Submit(String),
    Cancel,
}

#[derive(Debug, Default)]
pub struct UrlPrompt {
    pub buffer: String,
}

impl UrlPrompt {
    /// A prompt pre-filled with `scheme://` so only the path needs typing.
    pub fn with_scheme(scheme: &str) -> Self {
        Self {
            buffer: format!("{scheme}://"),
        }
    }
}

impl EventHandler for UrlPrompt {
    type Event = PromptEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PromptEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            // Pasted text may carry a trailing newline
            TuiEvent::Paste(text) => {
                self.buffer.push_str(text.trim_end_matches(['\r', '\n']));
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Submit => {
                let url = self.buffer.trim();
                if url.is_empty() {
                    None
                } else {
                    Some(PromptEvent::Submit(url.to_string()))
                }
            }
            TuiEvent::Escape => Some(PromptEvent::Cancel),
            _ => None,
        }
    }
}

impl Component for UrlPrompt {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Open URL (Enter to open, Esc to cancel) ");
        let input = Paragraph::new(self.buffer.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green));

        frame.render_widget(Clear, area);
        frame.render_widget(input, area);

        let width = self.buffer.chars().count() as u16;
        let x = (area.x + 1 + width).min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_submit() {
        let mut prompt = UrlPrompt::with_scheme("landmarks");
        for c in "category/lakes".chars() {
            assert_eq!(prompt.handle_event(&TuiEvent::InputChar(c)), None);
        }
        assert_eq!(
            prompt.handle_event(&TuiEvent::Submit),
            Some(PromptEvent::Submit("landmarks://category/lakes".to_string()))
        );
    }

    #[test]
    fn test_paste_strips_newline() {
        let mut prompt = UrlPrompt::default();
        prompt.handle_event(&TuiEvent::Paste("x://landmark/y\n".to_string()));
        assert_eq!(prompt.buffer, "x://landmark/y");
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut prompt = UrlPrompt::default();
        prompt.handle_event(&TuiEvent::InputChar(' '));
        assert_eq!(prompt.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_backspace_and_cancel() {
        let mut prompt = UrlPrompt::with_scheme("a");
        prompt.handle_event(&TuiEvent::Backspace);
        assert_eq!(prompt.buffer, "a:/");
        assert_eq!(prompt.handle_event(&TuiEvent::Escape), Some(PromptEvent::Cancel));
    }
}
