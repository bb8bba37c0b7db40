//! # Screen Content
//!
//! Maps the top of the selected tab's stack to what the user sees: a title,
//! some body text and a menu of things to do next.
//!
//! `screen_content` is the single dispatcher over [`Destination`]. Each match
//! is exhaustive, so adding a variant to the destination model fails to
//! compile until it has a screen here.
//!
//! The menu entries carry a [`Command`]: most are plain core `Action`s, the
//! rest are shell-local (favorites, the URL prompt, persistence buttons).

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, Paragraph, Wrap};

use crate::core::action::{Action, Effect};
use crate::core::catalog::{Catalog, Category, Landmark, LandmarkId};
use crate::core::deep_link;
use crate::core::destination::{
    DeepLinksScreen, Destination, FavoritesScreen, LandmarksScreen, Tab,
};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::favorites::Favorites;

/// What a menu entry does when activated.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Feed an action to the core reducer.
    Run(Action),
    /// Execute a persistence effect directly (the "State Restoration" buttons).
    Perform(Effect),
    ToggleFavorite(LandmarkId),
    /// Open the URL prompt.
    PromptUrl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    pub command: Command,
}

impl MenuItem {
    fn new(label: impl Into<String>, command: Command) -> Self {
        Self {
            label: label.into(),
            command,
        }
    }

    fn run(label: impl Into<String>, action: Action) -> Self {
        Self::new(label, Command::Run(action))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScreenContent {
    pub title: String,
    pub body: Vec<Line<'static>>,
    pub items: Vec<MenuItem>,
}

/// Everything a screen may read besides its destination.
pub struct ScreenContext<'a> {
    pub catalog: &'a Catalog,
    pub favorites: &'a Favorites,
    pub url_scheme: &'a str,
}

pub fn screen_content(ctx: &ScreenContext, tab: Tab, top: Option<&Destination>) -> ScreenContent {
    match top {
        None => root_content(ctx, tab),
        Some(Destination::Landmarks(screen)) => landmarks_content(ctx, screen),
        Some(Destination::Favorites(screen)) => favorites_content(ctx, screen),
        Some(Destination::DeepLinks(screen)) => deep_links_content(screen),
    }
}

/// Short label for the breadcrumb trail.
pub fn crumb(catalog: &Catalog, destination: &Destination) -> String {
    let name = |id: &LandmarkId| {
        catalog
            .get(*id)
            .map(|l| l.name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    };
    match destination {
        Destination::Landmarks(LandmarksScreen::Detail(id)) => name(id),
        Destination::Landmarks(LandmarksScreen::Category(c)) => c.name().to_string(),
        Destination::Landmarks(LandmarksScreen::VisitConfirmation(_)) => "Visit".to_string(),
        Destination::Landmarks(LandmarksScreen::Edit(_)) => "Edit".to_string(),
        Destination::Favorites(FavoritesScreen::Detail(id)) => name(id),
        Destination::DeepLinks(DeepLinksScreen::UrlResult(_)) => "URL".to_string(),
    }
}

// ── Tab roots ───────────────────────────────────────────────────────────────

fn root_content(ctx: &ScreenContext, tab: Tab) -> ScreenContent {
    match tab {
        Tab::Landmarks => landmark_list(ctx),
        Tab::Favorites => favorites_list(ctx),
        Tab::DeepLinks => deep_links_root(ctx),
    }
}

fn landmark_list(ctx: &ScreenContext) -> ScreenContent {
    let mut items: Vec<MenuItem> = Category::ALL
        .into_iter()
        .map(|c| {
            let count = ctx.catalog.by_category(c).count();
            MenuItem::run(
                format!("{} {} ({count})", c.glyph(), c.name()),
                Action::Push(Destination::category(c)),
            )
        })
        .collect();
    items.extend(ctx.catalog.iter().map(|l| {
        MenuItem::run(landmark_label(ctx, l), Action::Push(Destination::detail(l.id)))
    }));

    let featured: Vec<&str> = ctx.catalog.featured().map(|l| l.name.as_str()).collect();
    let mut body = vec![dim_line("Browse by category or pick a landmark.")];
    if !featured.is_empty() {
        body.push(Line::from(format!("Featured: {}", featured.join(", "))));
    }
    ScreenContent {
        title: "Landmarks".to_string(),
        body,
        items,
    }
}

fn favorites_list(ctx: &ScreenContext) -> ScreenContent {
    let items: Vec<MenuItem> = ctx
        .favorites
        .in_catalog(ctx.catalog)
        .map(|l| {
            MenuItem::run(
                format!("♥ {}", l.name),
                Action::Push(Destination::favorite_detail(l.id)),
            )
        })
        .collect();
    let body = if items.is_empty() {
        vec![dim_line("No favorites yet. Press f on a landmark to add one.")]
    } else {
        Vec::new()
    };
    ScreenContent {
        title: "Favorites".to_string(),
        body,
        items,
    }
}

fn deep_links_root(ctx: &ScreenContext) -> ScreenContent {
    let mut items = Vec::new();

    for landmark in ctx.catalog.iter().take(3) {
        items.push(MenuItem::run(
            format!("Go to {}", landmark.name),
            Action::Navigate(vec![Destination::detail(landmark.id)]),
        ));
    }
    for category in Category::ALL {
        items.push(MenuItem::run(
            format!("Go to {}", category.name()),
            Action::Navigate(vec![Destination::category(category)]),
        ));
    }
    if let Some(mountain) = ctx.catalog.by_category(Category::Mountains).next() {
        items.push(MenuItem::run(
            format!("Mountains → {} (two screens)", mountain.name),
            Action::Navigate(vec![
                Destination::category(Category::Mountains),
                Destination::detail(mountain.id),
            ]),
        ));
    }

    let scheme = ctx.url_scheme;
    let sample_urls = [
        format!("{scheme}://landmark/golden-gate-bridge"),
        format!("{scheme}://category/lakes"),
    ];
    for url in sample_urls {
        items.push(MenuItem::run(format!("Open {url}"), Action::OpenUrl(url.clone())));
        items.push(MenuItem::run(
            format!("Inspect {url}"),
            Action::Push(Destination::url_result(url)),
        ));
    }
    items.push(MenuItem::new("Open a URL…", Command::PromptUrl));

    if let Some(first) = ctx.catalog.iter().next() {
        items.push(MenuItem::run(
            format!("Edit {}", first.name),
            Action::Navigate(vec![Destination::edit(first.id)]),
        ));
    }

    items.push(MenuItem::new("Save navigation state", Command::Perform(Effect::SaveState)));
    items.push(MenuItem::new("Restore navigation state", Command::Perform(Effect::LoadState)));
    items.push(MenuItem::run("Clear saved state", Action::ClearSavedState));

    ScreenContent {
        title: "Deep Links".to_string(),
        body: vec![dim_line(
            "Programmatic navigation: each entry simulates a link, a notification or another \
             external trigger.",
        )],
        items,
    }
}

// ── Pushed screens ──────────────────────────────────────────────────────────

fn landmarks_content(ctx: &ScreenContext, screen: &LandmarksScreen) -> ScreenContent {
    match screen {
        LandmarksScreen::Detail(id) => {
            let Some(landmark) = ctx.catalog.get(*id) else {
                return not_found();
            };
            let mut content = detail_content(ctx, landmark);
            let link = deep_link::link_for(&Destination::detail(*id), ctx.catalog, ctx.url_scheme);
            if let Some(link) = link {
                content.body.push(Line::default());
                content.body.push(dim_line(format!("Link: {link}")));
            }
            content.items.push(MenuItem::run(
                "Plan a visit",
                Action::Push(Destination::visit_confirmation(*id)),
            ));
            content
                .items
                .push(MenuItem::run("Edit", Action::Push(Destination::edit(*id))));
            content
        }
        LandmarksScreen::Category(category) => {
            let items = ctx
                .catalog
                .by_category(*category)
                .map(|l| MenuItem::run(landmark_label(ctx, l), Action::Push(Destination::detail(l.id))))
                .collect();
            let mut body = Vec::new();
            if let Some(link) =
                deep_link::link_for(&Destination::category(*category), ctx.catalog, ctx.url_scheme)
            {
                body.push(dim_line(format!("Link: {link}")));
            }
            ScreenContent {
                title: format!("{} {}", category.glyph(), category.name()),
                body,
                items,
            }
        }
        LandmarksScreen::VisitConfirmation(id) => {
            let Some(landmark) = ctx.catalog.get(*id) else {
                return not_found();
            };
            ScreenContent {
                title: "Visit planned".to_string(),
                body: vec![
                    Line::from(format!("You're going to {}!", landmark.name)),
                    dim_line(landmark.location.clone()),
                ],
                items: vec![
                    MenuItem::run("Done", Action::PopToRoot),
                    MenuItem::run("Back", Action::Pop),
                ],
            }
        }
        LandmarksScreen::Edit(id) => {
            let Some(landmark) = ctx.catalog.get(*id) else {
                return not_found();
            };
            ScreenContent {
                title: format!("Edit {}", landmark.name),
                body: vec![
                    Line::from(format!("Name:     {}", landmark.name)),
                    Line::from(format!("Location: {}", landmark.location)),
                    Line::from(format!("Category: {}", landmark.category)),
                ],
                items: vec![
                    MenuItem::run("Save", Action::Pop),
                    MenuItem::run("Discard", Action::Pop),
                ],
            }
        }
    }
}

fn favorites_content(ctx: &ScreenContext, screen: &FavoritesScreen) -> ScreenContent {
    match screen {
        FavoritesScreen::Detail(id) => {
            let Some(landmark) = ctx.catalog.get(*id) else {
                return not_found();
            };
            let mut content = detail_content(ctx, landmark);
            // Landmark-owned screens can't go on this stack; hand over to that tab instead
            content.items.push(MenuItem::run(
                "Show in Landmarks",
                Action::Navigate(vec![Destination::detail(*id)]),
            ));
            content
        }
    }
}

fn deep_links_content(screen: &DeepLinksScreen) -> ScreenContent {
    match screen {
        DeepLinksScreen::UrlResult(url) => ScreenContent {
            title: "URL".to_string(),
            body: vec![Line::from(format!("Navigated from: {url}"))],
            items: vec![MenuItem::run("Open this link", Action::OpenUrl(url.clone()))],
        },
    }
}

fn detail_content(ctx: &ScreenContext, landmark: &Landmark) -> ScreenContent {
    let heart = if ctx.favorites.contains(landmark.id) { " ♥" } else { "" };
    let featured = if landmark.is_featured { " · Featured" } else { "" };
    let favorite_label = if ctx.favorites.contains(landmark.id) {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };
    ScreenContent {
        title: format!("{}{heart}", landmark.name),
        body: vec![
            Line::from(Span::styled(
                format!("{} · {}{featured}", landmark.location, landmark.category),
                Style::default().fg(Color::Cyan),
            )),
            Line::default(),
            Line::from(landmark.description.clone()),
        ],
        items: vec![MenuItem::new(
            favorite_label,
            Command::ToggleFavorite(landmark.id),
        )],
    }
}

fn not_found() -> ScreenContent {
    ScreenContent {
        title: "Not found".to_string(),
        body: vec![dim_line("This landmark is not in the catalog.")],
        items: vec![MenuItem::run("Back", Action::Pop)],
    }
}

fn landmark_label(ctx: &ScreenContext, landmark: &Landmark) -> String {
    let heart = if ctx.favorites.contains(landmark.id) { " ♥" } else { "" };
    format!("{} {}{heart}", landmark.category.glyph(), landmark.name)
}

fn dim_line(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::DarkGray)))
}

// ── Rendering ───────────────────────────────────────────────────────────────

/// Events emitted by the screen menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    Activate(Command),
}

/// Persistent selection state for the current screen's menu.
#[derive(Debug, Default)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the first entry, e.g. after the visible screen changed.
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

/// Transient render wrapper: built each frame from the current content.
pub struct ScreenView<'a> {
    pub content: &'a ScreenContent,
    pub state: &'a mut MenuState,
}

impl<'a> ScreenView<'a> {
    pub fn new(content: &'a ScreenContent, state: &'a mut MenuState) -> Self {
        Self { content, state }
    }
}

impl EventHandler for ScreenView<'_> {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        let len = self.content.items.len();
        match event {
            TuiEvent::CursorUp => {
                self.state.selected = self.state.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown => {
                if len > 0 {
                    self.state.selected = (self.state.selected + 1).min(len - 1);
                }
                None
            }
            TuiEvent::Submit => self
                .content
                .items
                .get(self.state.selected)
                .map(|item| MenuEvent::Activate(item.command.clone())),
            _ => None,
        }
    }
}

impl Component for ScreenView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let len = self.content.items.len();
        if len > 0 && self.state.selected >= len {
            self.state.selected = len - 1;
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.content.title));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let body_height = if self.content.body.is_empty() {
            0
        } else {
            let width = inner.width.max(1) as usize;
            let wrapped: usize = self
                .content
                .body
                .iter()
                .map(|line| line.width().div_ceil(width).max(1))
                .sum();
            (wrapped as u16 + 1).min(inner.height / 2)
        };
        let [body_area, menu_area] =
            Layout::vertical([Constraint::Length(body_height), Constraint::Min(0)]).areas(inner);

        frame.render_widget(
            Paragraph::new(self.content.body.clone()).wrap(Wrap { trim: true }),
            body_area,
        );

        let items: Vec<ListItem> = self
            .content
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(Span::styled(format!(" {} ", item.label), style)))
            })
            .collect();

        let mut list_state = ratatui::widgets::ListState::default();
        if len > 0 {
            list_state.select(Some(self.state.selected));
        }
        frame.render_stateful_widget(List::new(items), menu_area, &mut list_state);
    }
}
