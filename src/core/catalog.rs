//! # Content Catalog
//!
//! The static, read-only set of landmarks the app can show. The navigation
//! core only reads it: the deep-link resolver matches slugs against entry
//! names, and the shell renders entries by id.
//!
//! Ids are fixed so that a persisted navigation stack still points at the
//! same landmark after a relaunch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock};
use uuid::Uuid;

/// Opaque identifier of a catalog entry.
///
/// Destinations embed it without checking it against the catalog; an unknown
/// id simply renders as "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkId(pub Uuid);

impl LandmarkId {
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for LandmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed category vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mountains,
    Lakes,
    Bridges,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Mountains, Category::Lakes, Category::Bridges];

    /// Display name, also the word matched by `category` deep links.
    pub fn name(self) -> &'static str {
        match self {
            Category::Mountains => "Mountains",
            Category::Lakes => "Lakes",
            Category::Bridges => "Bridges",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Category::Mountains => "▲",
            Category::Lakes => "≈",
            Category::Bridges => "⌒",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: LandmarkId,
    pub name: String,
    pub location: String,
    pub description: String,
    pub image_name: String,
    pub is_featured: bool,
    pub category: Category,
}

/// Ordered list of landmarks. Order matters: deep-link lookup takes the first
/// entry whose slug matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    landmarks: Vec<Landmark>,
}

impl Catalog {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// The built-in sample catalog, shared across the process.
    pub fn sample() -> Arc<Catalog> {
        static SAMPLE: LazyLock<Arc<Catalog>> = LazyLock::new(|| Arc::new(sample_catalog()));
        Arc::clone(&SAMPLE)
    }

    pub fn get(&self, id: LandmarkId) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter().filter(move |l| l.category == category)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter().filter(|l| l.is_featured)
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

fn entry(
    id: u128,
    name: &str,
    location: &str,
    description: &str,
    image_name: &str,
    is_featured: bool,
    category: Category,
) -> Landmark {
    Landmark {
        id: LandmarkId::from_u128(id),
        name: name.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        image_name: image_name.to_string(),
        is_featured,
        category,
    }
}

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        entry(
            0x6c61_6e64_6d61_726b_0000_0000_0000_0001,
            "Golden Gate Bridge",
            "San Francisco, CA",
            "An iconic suspension bridge spanning the Golden Gate strait. The bridge's signature \
             International Orange color was chosen to complement its natural surroundings and \
             enhance visibility in fog.",
            "bridge",
            true,
            Category::Bridges,
        ),
        entry(
            0x6c61_6e64_6d61_726b_0000_0000_0000_0002,
            "Yosemite Valley",
            "Yosemite National Park, CA",
            "A glacial valley known for its granite cliffs, waterfalls, and giant sequoia groves. \
             El Capitan and Half Dome are among its most famous formations.",
            "mountain",
            true,
            Category::Mountains,
        ),
        entry(
            0x6c61_6e64_6d61_726b_0000_0000_0000_0003,
            "Lake Tahoe",
            "Sierra Nevada, CA/NV",
            "A large freshwater lake in the Sierra Nevada mountains, known for its clarity, blue \
             color, and surrounding ski resorts and beaches.",
            "lake",
            false,
            Category::Lakes,
        ),
        entry(
            0x6c61_6e64_6d61_726b_0000_0000_0000_0004,
            "Brooklyn Bridge",
            "New York, NY",
            "A hybrid cable-stayed/suspension bridge connecting Manhattan and Brooklyn. Completed \
             in 1883, it was the first steel-wire suspension bridge.",
            "bridge",
            false,
            Category::Bridges,
        ),
        entry(
            0x6c61_6e64_6d61_726b_0000_0000_0000_0005,
            "Mount Rainier",
            "Washington",
            "An active stratovolcano and the most glaciated peak in the contiguous United States. \
             It stands as an icon of the Pacific Northwest.",
            "mountain",
            true,
            Category::Mountains,
        ),
        entry(
            0x6c61_6e64_6d61_726b_0000_0000_0000_0006,
            "Crater Lake",
            "Oregon",
            "The deepest lake in the United States, formed by the collapse of volcano Mount \
             Mazama. Known for its deep blue color and water clarity.",
            "lake",
            false,
            Category::Lakes,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_has_six_unique_entries() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 6);
        let ids: HashSet<_> = catalog.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_sample_ids_are_stable_across_calls() {
        let first: Vec<_> = Catalog::sample().iter().map(|l| l.id).collect();
        let second: Vec<_> = sample_catalog().iter().map(|l| l.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_by_category_preserves_catalog_order() {
        let catalog = Catalog::sample();
        let names: Vec<_> = catalog
            .by_category(Category::Bridges)
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["Golden Gate Bridge", "Brooklyn Bridge"]);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let catalog = Catalog::sample();
        assert!(catalog.get(LandmarkId::from_u128(42)).is_none());
    }

    #[test]
    fn test_featured_entries() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.featured().count(), 3);
    }

    #[test]
    fn test_landmark_id_serializes_as_plain_uuid() {
        let id = LandmarkId::from_u128(1);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000001\"");
    }
}
