//! Name catalogue data model.
//!
//! A project declares the proper names used in its manuscripts, each tagged with a
//! [`Category`]. The host decodes the project's configuration into [`NameLists`] and flattens it
//! into an ordered list of [`NamedEntity`] values; the core only ever reads that list.
//!
//! Uniqueness is not enforced. The same text may be declared twice (even under different
//! categories) and every entry is scanned on its own.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of name classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A character in the story.
    Character,
    /// A location.
    Place,
    /// An object, artefact, or other named thing.
    Thing,
    /// A name that must not appear (retired or misspelled names).
    Invalid,
}

impl Category {
    /// All categories, in catalogue flattening order.
    pub const ALL: [Category; 4] = [
        Category::Character,
        Category::Place,
        Category::Thing,
        Category::Invalid,
    ];

    /// The lowercase configuration key for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Place => "place",
            Self::Thing => "thing",
            Self::Invalid => "invalid",
        }
    }

    /// Presentation kind used when highlighting occurrences of this category.
    pub fn token_kind(self) -> TokenKind {
        match self {
            Self::Character => TokenKind::Keyword,
            Self::Place => TokenKind::Variable,
            Self::Thing => TokenKind::Regexp,
            Self::Invalid => TokenKind::Decorator,
        }
    }

    /// Returns `true` for [`Category::Invalid`].
    pub fn is_invalid(self) -> bool {
        self == Self::Invalid
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation kinds handed to the syntax-classification collaborator.
///
/// The discriminants are the legend indices used by semantic-token encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// Characters.
    Keyword = 0,
    /// Places.
    Variable = 1,
    /// Things.
    Regexp = 2,
    /// Invalid names, rendered struck through.
    Decorator = 3,
}

impl TokenKind {
    /// All kinds, in legend order.
    pub const ALL: [TokenKind; 4] = [
        TokenKind::Keyword,
        TokenKind::Variable,
        TokenKind::Regexp,
        TokenKind::Decorator,
    ];

    /// Legend index of this kind.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Returns `true` if the kind carries the "deprecated" presentation modifier.
    pub fn is_deprecated(self) -> bool {
        self == Self::Decorator
    }
}

/// A declared name and its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedEntity {
    /// The literal text to look for (case-sensitive).
    pub text: String,
    /// The category the name was declared under.
    pub category: Category,
}

impl NamedEntity {
    /// Create a new entity.
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Shorthand for a [`Category::Character`] entity.
    pub fn character(text: impl Into<String>) -> Self {
        Self::new(text, Category::Character)
    }

    /// Shorthand for a [`Category::Place`] entity.
    pub fn place(text: impl Into<String>) -> Self {
        Self::new(text, Category::Place)
    }

    /// Shorthand for a [`Category::Thing`] entity.
    pub fn thing(text: impl Into<String>) -> Self {
        Self::new(text, Category::Thing)
    }

    /// Shorthand for a [`Category::Invalid`] entity.
    pub fn invalid(text: impl Into<String>) -> Self {
        Self::new(text, Category::Invalid)
    }

    /// Returns `false` for entities that can never produce a match.
    ///
    /// An empty name would otherwise match at every column of every line.
    pub fn is_matchable(&self) -> bool {
        !self.text.is_empty()
    }
}

/// The `names` section of a project configuration.
///
/// Missing lists decode as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameLists {
    /// Character names.
    pub character: Vec<String>,
    /// Place names.
    pub place: Vec<String>,
    /// Thing names.
    pub thing: Vec<String>,
    /// Names flagged as invalid.
    pub invalid: Vec<String>,
}

impl NameLists {
    /// The declared names of one category.
    pub fn list(&self, category: Category) -> &[String] {
        match category {
            Category::Character => &self.character,
            Category::Place => &self.place,
            Category::Thing => &self.thing,
            Category::Invalid => &self.invalid,
        }
    }

    /// Total number of declared names.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.list(*c).len()).sum()
    }

    /// Returns `true` if no names are declared.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into the ordered catalogue: characters, places, things, then invalid names, each
    /// list in declaration order.
    pub fn to_entities(&self) -> Vec<NamedEntity> {
        let mut out = Vec::with_capacity(self.len());
        for category in Category::ALL {
            out.extend(
                self.list(category)
                    .iter()
                    .map(|text| NamedEntity::new(text.clone(), category)),
            );
        }
        out
    }
}
