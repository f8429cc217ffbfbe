/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the store, the renderer and the controller.

use serde::{Deserialize, Serialize};

/// Represents a single cat in the catalog.
///
/// Cats have no durable ID: a cat is addressed by its position in the catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    /// Display name (e.g., "Floor cat")
    pub name: String,
    /// Path of the photo shown on the display surface
    pub image_source: String,
    /// Number of times the photo was clicked
    #[serde(default)]
    pub click_count: u32,
}

impl Cat {
    pub fn new(name: impl Into<String>, image_source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_source: image_source.into(),
            click_count: 0,
        }
    }
}

/// A partial edit of a cat, as submitted from the admin form.
///
/// `None` means "keep the existing value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatUpdate {
    pub name: Option<String>,
    pub image_source: Option<String>,
    pub click_count: Option<u32>,
}

impl CatUpdate {
    /// Build an update from raw form text.
    ///
    /// Blank fields are absent. A count of `"0"` is present; a count that is
    /// not a non-negative integer is dropped.
    pub fn from_form(name: &str, image_source: &str, click_count: &str) -> Self {
        let click_count = match click_count.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(count) => Some(count),
                Err(err) => {
                    tracing::warn!(input = raw, %err, "ignoring malformed click count");
                    None
                }
            },
        };

        Self {
            name: non_blank(name),
            image_source: non_blank(image_source),
            click_count,
        }
    }

    /// True when applying this update would change nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image_source.is_none() && self.click_count.is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The catalog a fresh session starts with
pub fn reference_cats() -> Vec<Cat> {
    vec![
        Cat::new("Floor cat", "assets/floor-cat.jpg"),
        Cat::new("Stunned cat", "assets/stunned-cat.jpg"),
        Cat::new("Sleepy cat", "assets/sleepy-cat.jpg"),
        Cat::new("Box cat", "assets/box-cat.jpg"),
        Cat::new("Window cat", "assets/window-cat.jpg"),
    ]
}
