//! Category tags and category filtering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Room a product is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    LivingRoom,
    Bedroom,
    DiningRoom,
    Office,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 4] = [
        Category::LivingRoom,
        Category::Bedroom,
        Category::DiningRoom,
        Category::Office,
    ];

    /// The slug used in markup and serialized data (e.g. "living-room").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LivingRoom => "living-room",
            Category::Bedroom => "bedroom",
            Category::DiningRoom => "dining-room",
            Category::Office => "office",
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::LivingRoom => "Living Room",
            Category::Bedroom => "Bedroom",
            Category::DiningRoom => "Dining Room",
            Category::Office => "Office",
        }
    }

    /// Parse a category slug.
    pub fn from_slug(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "living-room" => Some(Category::LivingRoom),
            "bedroom" => Some(Category::Bedroom),
            "dining-room" => Some(Category::DiningRoom),
            "office" => Some(Category::Office),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which products the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter from a `data-category` value.
    ///
    /// `"all"` and the empty string select every product.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::from_slug(s).map(CategoryFilter::Only)
    }

    /// Check whether a category passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// The slug of this filter ("all" or a category slug).
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_slug("garden"), None);
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Category::DiningRoom).unwrap();
        assert_eq!(json, r#""dining-room""#);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), Some(CategoryFilter::All));
        assert_eq!(CategoryFilter::parse(""), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("office"),
            Some(CategoryFilter::Only(Category::Office))
        );
        assert_eq!(CategoryFilter::parse("kitchen"), None);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Bedroom));
        assert!(CategoryFilter::Only(Category::Bedroom).matches(Category::Bedroom));
        assert!(!CategoryFilter::Only(Category::Office).matches(Category::Bedroom));
    }
}
