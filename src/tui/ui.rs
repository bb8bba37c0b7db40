use crate::core::destination::Tab;
use crate::core::navigator::Navigator;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::screen::{crumb, screen_content};
use crate::tui::components::{ScreenView, TabBar, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const HELP: &str = "↑↓ select · Enter open · Esc back · h root · 1-3 tabs · f fav · : URL · s/r save/restore · q quit";
const PROMPT_HEIGHT: u16 = 3;

pub fn draw_ui(frame: &mut Frame, nav: &Navigator, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, tabs_area, main_area, help_area] = layout.areas(frame.area());

    let tab = nav.selected_tab();
    let stack = nav.current_stack();

    let mut crumbs = vec![tab.title().to_string()];
    crumbs.extend(stack.iter().map(|d| crumb(nav.catalog(), d)));
    TitleBar::new(crumbs, tui.status_message.clone()).render(frame, title_area);

    let depths = Tab::ALL.map(|t| nav.stack(t).len());
    TabBar::new(tab, depths).render(frame, tabs_area);

    let content = screen_content(&tui.screen_context(nav.catalog()), tab, stack.top());
    ScreenView::new(&content, &mut tui.menu).render(frame, main_area);

    frame.render_widget(
        Span::styled(HELP, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(prompt) = tui.url_prompt.as_mut() {
        prompt.render(frame, prompt_area(main_area));
    }
}

/// A full-width strip vertically centered in `area`.
fn prompt_area(area: Rect) -> Rect {
    let height = PROMPT_HEIGHT.min(area.height);
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::destination::Destination;
    use crate::test_support::{landmark_id, test_navigator};
    use crate::tui::components::UrlPrompt;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(nav: &Navigator, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, nav, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_root() {
        let nav = test_navigator();
        let mut tui = TuiState::new("landmarks".to_string());
        let text = draw(&nav, &mut tui);
        assert!(text.contains("1 Landmarks"));
        assert!(text.contains("2 Favorites"));
        assert!(text.contains("Golden Gate Bridge"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_draw_breadcrumb_for_deep_stack() {
        let mut nav = test_navigator();
        let id = landmark_id("Yosemite Valley");
        nav.navigate(vec![
            Destination::category(crate::core::catalog::Category::Mountains),
            Destination::detail(id),
        ])
        .unwrap();
        let mut tui = TuiState::new("landmarks".to_string());
        let text = draw(&nav, &mut tui);
        assert!(text.contains("Landmarks › Mountains › Yosemite Valley"));
        assert!(text.contains("Landmarks (2)"));
        assert!(text.contains("landmarks://landmark/yosemite-valley"));
    }

    #[test]
    fn test_draw_prompt_overlay() {
        let nav = test_navigator();
        let mut tui = TuiState::new("landmarks".to_string());
        tui.url_prompt = Some(UrlPrompt::with_scheme("landmarks"));
        let text = draw(&nav, &mut tui);
        assert!(text.contains("Open URL"));
        assert!(text.contains("landmarks://"));
    }
}
