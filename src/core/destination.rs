//! # Destinations
//!
//! The navigation contract for the whole app: every reachable screen has a
//! variant here, grouped by the tab that owns it.
//!
//! ```text
//! Destination
//! ├── Landmarks(LandmarksScreen)   detail · category · visit_confirmation · edit
//! ├── Favorites(FavoritesScreen)   detail
//! └── DeepLinks(DeepLinksScreen)   url_result
//! ```
//!
//! The outer variant alone decides the owning [`Tab`]. Construction is total:
//! ids are not checked against the catalog here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::catalog::{Category, LandmarkId};

/// One of the three independent navigation stacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Landmarks,
    Favorites,
    DeepLinks,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Landmarks, Tab::Favorites, Tab::DeepLinks];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Landmarks => "Landmarks",
            Tab::Favorites => "Favorites",
            Tab::DeepLinks => "Deep Links",
        }
    }

    /// Cycles to the next tab (wraps around)
    pub fn next(self) -> Tab {
        match self {
            Tab::Landmarks => Tab::Favorites,
            Tab::Favorites => Tab::DeepLinks,
            Tab::DeepLinks => Tab::Landmarks,
        }
    }

    pub fn prev(self) -> Tab {
        match self {
            Tab::Landmarks => Tab::DeepLinks,
            Tab::Favorites => Tab::Landmarks,
            Tab::DeepLinks => Tab::Favorites,
        }
    }

    /// Position in the tab bar.
    pub fn index(self) -> usize {
        match self {
            Tab::Landmarks => 0,
            Tab::Favorites => 1,
            Tab::DeepLinks => 2,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Landmarks(LandmarksScreen),
    Favorites(FavoritesScreen),
    DeepLinks(DeepLinksScreen),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarksScreen {
    Detail(LandmarkId),
    Category(Category),
    VisitConfirmation(LandmarkId),
    Edit(LandmarkId),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoritesScreen {
    Detail(LandmarkId),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeepLinksScreen {
    UrlResult(String),
}

impl Destination {
    /// The tab whose stack this destination belongs on.
    pub fn tab(&self) -> Tab {
        match self {
            Destination::Landmarks(_) => Tab::Landmarks,
            Destination::Favorites(_) => Tab::Favorites,
            Destination::DeepLinks(_) => Tab::DeepLinks,
        }
    }

    pub fn detail(id: LandmarkId) -> Self {
        Destination::Landmarks(LandmarksScreen::Detail(id))
    }

    pub fn category(category: Category) -> Self {
        Destination::Landmarks(LandmarksScreen::Category(category))
    }

    pub fn visit_confirmation(id: LandmarkId) -> Self {
        Destination::Landmarks(LandmarksScreen::VisitConfirmation(id))
    }

    pub fn edit(id: LandmarkId) -> Self {
        Destination::Landmarks(LandmarksScreen::Edit(id))
    }

    pub fn favorite_detail(id: LandmarkId) -> Self {
        Destination::Favorites(FavoritesScreen::Detail(id))
    }

    pub fn url_result(url: impl Into<String>) -> Self {
        Destination::DeepLinks(DeepLinksScreen::UrlResult(url.into()))
    }

    /// The landmark this screen is about, if any.
    pub fn landmark_id(&self) -> Option<LandmarkId> {
        match self {
            Destination::Landmarks(LandmarksScreen::Detail(id))
            | Destination::Landmarks(LandmarksScreen::VisitConfirmation(id))
            | Destination::Landmarks(LandmarksScreen::Edit(id))
            | Destination::Favorites(FavoritesScreen::Detail(id)) => Some(*id),
            Destination::Landmarks(LandmarksScreen::Category(_))
            | Destination::DeepLinks(DeepLinksScreen::UrlResult(_)) => None,
        }
    }
}

/// Short breadcrumb label, e.g. `detail(…)` or `category(Lakes)`.
impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Landmarks(LandmarksScreen::Detail(id)) => write!(f, "detail({id})"),
            Destination::Landmarks(LandmarksScreen::Category(c)) => write!(f, "category({c})"),
            Destination::Landmarks(LandmarksScreen::VisitConfirmation(id)) => {
                write!(f, "visit({id})")
            }
            Destination::Landmarks(LandmarksScreen::Edit(id)) => write!(f, "edit({id})"),
            Destination::Favorites(FavoritesScreen::Detail(id)) => write!(f, "detail({id})"),
            Destination::DeepLinks(DeepLinksScreen::UrlResult(url)) => write!(f, "url({url})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id() -> LandmarkId {
        LandmarkId::from_u128(7)
    }

    #[test]
    fn test_each_variant_has_exactly_one_owning_tab() {
        assert_eq!(Destination::detail(id()).tab(), Tab::Landmarks);
        assert_eq!(Destination::category(Category::Lakes).tab(), Tab::Landmarks);
        assert_eq!(Destination::visit_confirmation(id()).tab(), Tab::Landmarks);
        assert_eq!(Destination::edit(id()).tab(), Tab::Landmarks);
        assert_eq!(Destination::favorite_detail(id()).tab(), Tab::Favorites);
        assert_eq!(Destination::url_result("x://y").tab(), Tab::DeepLinks);
    }

    #[test]
    fn test_same_id_under_different_tabs_is_not_equal() {
        assert_ne!(Destination::detail(id()), Destination::favorite_detail(id()));
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(Tab::Landmarks.next(), Tab::Favorites);
        assert_eq!(Tab::Favorites.next(), Tab::DeepLinks);
        assert_eq!(Tab::DeepLinks.next(), Tab::Landmarks);
        for tab in Tab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_default_tab_is_first() {
        assert_eq!(Tab::default(), Tab::ALL[0]);
        assert_eq!(Tab::default().index(), 0);
    }

    #[test]
    fn test_serde_shape_is_externally_tagged() {
        let json = serde_json::to_string(&Destination::category(Category::Lakes)).unwrap();
        assert_eq!(json, r#"{"landmarks":{"category":"lakes"}}"#);

        let json = serde_json::to_string(&Destination::url_result("landmarks://x")).unwrap();
        assert_eq!(json, r#"{"deep_links":{"url_result":"landmarks://x"}}"#);

        let json = serde_json::to_string(&Tab::DeepLinks).unwrap();
        assert_eq!(json, r#""deep_links""#);
    }

    #[test]
    fn test_landmark_id_accessor() {
        assert_eq!(Destination::edit(id()).landmark_id(), Some(id()));
        assert_eq!(Destination::favorite_detail(id()).landmark_id(), Some(id()));
        assert_eq!(Destination::category(Category::Bridges).landmark_id(), None);
        assert_eq!(Destination::url_result("u").landmark_id(), None);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(
            Destination::category(Category::Mountains).to_string(),
            "category(Mountains)"
        );
        assert_eq!(Destination::url_result("a://b").to_string(), "url(a://b)");
    }
}
