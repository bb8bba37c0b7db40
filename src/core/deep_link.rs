//! # Deep Links
//!
//! Maps external URLs onto in-app destinations. Two shapes are understood:
//!
//! ```text
//! <scheme>://landmark/<slug>     →  [Landmarks::Detail(id)]
//! <scheme>://category/<name>     →  [Landmarks::Category(c)]
//! ```
//!
//! Anything else resolves to `None`. The scheme is not checked, and the
//! authority counts as the first path segment, so `landmarks:///landmark/x`
//! and `landmarks://landmark/x` are the same link.
//!
//! Resolution is pure: it depends only on the URL and the catalog passed in.

use crate::core::catalog::{Catalog, Category};
use crate::core::destination::{Destination, LandmarksScreen};

/// Normalized form of a landmark name as it appears in a link:
/// lowercase, spaces replaced with hyphens.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Splits a URL into its path segments, dropping scheme, query, fragment
/// and empty segments.
pub fn path_segments(url: &str) -> Vec<&str> {
    let rest = match url.find(':') {
        Some(idx) if is_scheme(&url[..idx]) => &url[idx + 1..],
        _ => url,
    };
    let rest = rest.split(['?', '#']).next().unwrap_or("");
    rest.split('/').filter(|s| !s.is_empty()).collect()
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Resolves `url` into the destinations it addresses, or `None` if it
/// doesn't match a known shape or names nothing in the catalog.
pub fn resolve(url: &str, catalog: &Catalog) -> Option<Vec<Destination>> {
    let segments = path_segments(url);
    let (&first, rest) = segments.split_first()?;

    match first {
        "landmark" => {
            let wanted = rest.first()?.to_lowercase();
            // Recomputed per call; the catalog is small.
            let landmark = catalog.iter().find(|l| slug(&l.name) == wanted)?;
            Some(vec![Destination::detail(landmark.id)])
        }
        "category" => {
            let wanted = rest.first()?.to_lowercase();
            let category = Category::ALL
                .into_iter()
                .find(|c| c.name().to_lowercase() == wanted)?;
            Some(vec![Destination::category(category)])
        }
        _ => None,
    }
}

/// Builds the link that resolves back to `destination`. Only landmark detail
/// and category screens are linkable.
pub fn link_for(destination: &Destination, catalog: &Catalog, scheme: &str) -> Option<String> {
    match destination {
        Destination::Landmarks(LandmarksScreen::Detail(id)) => {
            let landmark = catalog.get(*id)?;
            Some(format!("{scheme}://landmark/{}", slug(&landmark.name)))
        }
        Destination::Landmarks(LandmarksScreen::Category(category)) => Some(format!(
            "{scheme}://category/{}",
            category.name().to_lowercase()
        )),
        Destination::Landmarks(LandmarksScreen::VisitConfirmation(_))
        | Destination::Landmarks(LandmarksScreen::Edit(_))
        | Destination::Favorites(_)
        | Destination::DeepLinks(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(catalog: &Catalog, name: &str) -> crate::core::catalog::LandmarkId {
        catalog.iter().find(|l| l.name == name).unwrap().id
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Golden Gate Bridge"), "golden-gate-bridge");
        assert_eq!(slug("Lake Tahoe"), "lake-tahoe");
    }

    #[test]
    fn test_path_segments_treats_host_as_first_segment() {
        assert_eq!(
            path_segments("landmarks://landmark/golden-gate-bridge"),
            vec!["landmark", "golden-gate-bridge"]
        );
        assert_eq!(
            path_segments("landmarks:///landmark//golden-gate-bridge/"),
            vec!["landmark", "golden-gate-bridge"]
        );
        assert_eq!(
            path_segments("landmarks://category/lakes?ref=share#top"),
            vec!["category", "lakes"]
        );
        assert!(path_segments("landmarks://").is_empty());
    }

    #[test]
    fn test_resolve_landmark_by_slug() {
        let catalog = Catalog::sample();
        let resolved = resolve("landmarks://landmark/golden-gate-bridge", &catalog);
        assert_eq!(
            resolved,
            Some(vec![Destination::detail(id_of(&catalog, "Golden Gate Bridge"))])
        );
    }

    #[test]
    fn test_resolve_landmark_is_case_insensitive() {
        let catalog = Catalog::sample();
        let resolved = resolve("landmarks://landmark/Crater-LAKE", &catalog);
        assert_eq!(
            resolved,
            Some(vec![Destination::detail(id_of(&catalog, "Crater Lake"))])
        );
    }

    #[test]
    fn test_resolve_category() {
        let catalog = Catalog::sample();
        assert_eq!(
            resolve("landmarks://category/lakes", &catalog),
            Some(vec![Destination::category(Category::Lakes)])
        );
        assert_eq!(
            resolve("anything://category/MOUNTAINS", &catalog),
            Some(vec![Destination::category(Category::Mountains)])
        );
    }

    #[test]
    fn test_resolve_failures() {
        let catalog = Catalog::sample();
        for url in [
            "landmarks://bogus/xyz",
            "landmarks://",
            "landmarks://landmark",
            "landmarks://landmark/eiffel-tower",
            "landmarks://category",
            "landmarks://category/deserts",
            "",
        ] {
            assert_eq!(resolve(url, &catalog), None, "{url}");
        }
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let catalog = Catalog::sample();
        let mut entries: Vec<_> = catalog.iter().cloned().collect();
        let mut duplicate = entries[0].clone();
        duplicate.id = crate::core::catalog::LandmarkId::from_u128(99);
        entries.push(duplicate);
        let catalog = Catalog::new(entries);

        let resolved = resolve("x://landmark/golden-gate-bridge", &catalog).unwrap();
        assert_eq!(resolved, vec![Destination::detail(id_of(&catalog, "Golden Gate Bridge"))]);
    }

    #[test]
    fn test_link_for_resolves_back() {
        let catalog = Catalog::sample();
        for landmark in catalog.iter() {
            let destination = Destination::detail(landmark.id);
            let url = link_for(&destination, &catalog, "landmarks").unwrap();
            assert_eq!(resolve(&url, &catalog), Some(vec![destination]));
        }
        for category in Category::ALL {
            let destination = Destination::category(category);
            let url = link_for(&destination, &catalog, "landmarks").unwrap();
            assert_eq!(resolve(&url, &catalog), Some(vec![destination]));
        }
    }

    #[test]
    fn test_link_for_unlinkable_screens() {
        let catalog = Catalog::sample();
        let id = id_of(&catalog, "Lake Tahoe");
        assert_eq!(link_for(&Destination::edit(id), &catalog, "landmarks"), None);
        assert_eq!(link_for(&Destination::favorite_detail(id), &catalog, "landmarks"), None);
        assert_eq!(
            link_for(&Destination::url_result("a://b"), &catalog, "landmarks"),
            None
        );
    }
}
