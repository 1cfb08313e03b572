//! Story catalogue.
//!
//! Each story is a named, pre-configured instance of the widget shown on a
//! centred page, the same way a component explorer would list it.

use crate::widget::DEFAULT_LABEL;
use serde::Serialize;
use thiserror::Error;

/// Title the stories are grouped under.
pub const META_TITLE: &str = "Components/HelloButton";

/// A named widget configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Story {
    /// Story name, in `PascalCase`.
    pub name: &'static str,
    /// Trigger label the story renders with.
    pub label: &'static str,
}

impl Story {
    /// Kebab-case form of the name, e.g. `custom-label`.
    #[must_use]
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len() + 4);
        for (i, c) in self.name.chars().enumerate() {
            if c.is_ascii_uppercase() && i > 0 {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
        }
        slug
    }

    /// Full story path, e.g. `Components/HelloButton/Default`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{META_TITLE}/{}", self.name)
    }
}

/// Every story, in display order.
pub const STORIES: &[Story] = &[
    Story {
        name: "Default",
        label: DEFAULT_LABEL,
    },
    Story {
        name: "CustomLabel",
        label: "Click Me!",
    },
];

/// Story lookup failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoryError {
    /// No story has the requested name.
    #[error("unknown story '{name}' (available: {available})")]
    Unknown {
        /// The name that was asked for.
        name: String,
        /// Comma separated list of valid names.
        available: String,
    },
}

/// Find a story by name.
///
/// Matching ignores case and accepts the kebab-case slug.
///
/// # Errors
///
/// Returns [`StoryError::Unknown`] if no story matches.
pub fn find(name: &str) -> Result<Story, StoryError> {
    let wanted = name.trim();
    let lowered = wanted.to_ascii_lowercase();
    STORIES
        .iter()
        .find(|story| story.name.eq_ignore_ascii_case(wanted) || story.slug() == lowered)
        .copied()
        .ok_or_else(|| StoryError::Unknown {
            name: wanted.to_string(),
            available: STORIES
                .iter()
                .map(|s| s.name)
                .collect::<Vec<_>>()
                .join(", "),
        })
}
