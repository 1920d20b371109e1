//! Category module - how close a contact is to the user

use serde::{Deserialize, Serialize};

/// Category of a contact
///
/// Variants are listed from closest to most distant; the derived ordering
/// follows that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Relatives
    Family,

    /// Close friends
    #[serde(rename = "Close Friends")]
    CloseFriends,

    /// Friends
    Friends,

    /// Work colleagues
    Colleagues,

    /// People met occasionally
    Acquaintances,

    /// Anything else
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 6] = [
        Category::Family,
        Category::CloseFriends,
        Category::Friends,
        Category::Colleagues,
        Category::Acquaintances,
        Category::Other,
    ];

    /// Get the category name as shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Family => "Family",
            Category::CloseFriends => "Close Friends",
            Category::Friends => "Friends",
            Category::Colleagues => "Colleagues",
            Category::Acquaintances => "Acquaintances",
            Category::Other => "Other",
        }
    }

    /// Parse a category, ignoring case, surrounding whitespace, and
    /// spaces/dashes inside the name
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "family" => Some(Category::Family),
            "closefriends" => Some(Category::CloseFriends),
            "friends" => Some(Category::Friends),
            "colleagues" => Some(Category::Colleagues),
            "acquaintances" => Some(Category::Acquaintances),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}
