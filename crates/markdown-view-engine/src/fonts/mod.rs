//! Font tables, font variant synthesis and the font cascade.

pub mod cascade;
mod synthesize;

pub use cascade::{FontContext, Fragment, markdown_text};
pub use synthesize::synthesize;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// The family every default table and root context uses.
pub const DEFAULT_FAMILY: &str = "Merriweather";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("Font '{}' is not supported.", .family.as_deref().unwrap_or("<unset>"))]
    UnsupportedFamily { family: Option<String> },

    #[error("Font '{family}' is not configured for a font weight of '{weight}'.")]
    UnsupportedWeight { family: String, weight: String },

    #[error("Font '{family}' is not configured for a font style of '{style}'.")]
    UnsupportedStyle { family: String, style: String },
}

/// Suffixes for the two font styles a family may provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontStyles {
    pub normal: String,
    pub italic: String,
}

impl FontStyles {
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "normal" => Some(&self.normal),
            "italic" => Some(&self.italic),
            _ => None,
        }
    }
}

/// Asset naming for one font family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFamily {
    /// Weight key (`"normal"`, `"bold"`, `"700"`, ...) to asset suffix.
    pub font_weights: HashMap<String, String>,
    pub font_styles: FontStyles,
}

impl FontFamily {
    pub fn weight(&self, key: &str) -> Option<&str> {
        self.font_weights.get(key).map(String::as_str)
    }
}

/// Family name to asset naming. Read-only during a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontTable {
    families: HashMap<String, FontFamily>,
}

impl FontTable {
    pub fn empty() -> Self {
        Self {
            families: HashMap::new(),
        }
    }

    pub fn get(&self, family: &str) -> Option<&FontFamily> {
        self.families.get(family)
    }

    pub fn insert(&mut self, name: impl Into<String>, family: FontFamily) -> Option<FontFamily> {
        self.families.insert(name.into(), family)
    }

    pub fn with(mut self, name: impl Into<String>, family: FontFamily) -> Self {
        self.insert(name, family);
        self
    }
}

impl Default for FontTable {
    /// A single-family table sufficient for plain, bold and italic text.
    fn default() -> Self {
        let weights = [
            ("300", "Light"),
            ("400", "Regular"),
            ("700", "Bold"),
            ("900", "Black"),
            ("normal", "Regular"),
            ("bold", "Bold"),
        ];
        let family = FontFamily {
            font_weights: weights
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            font_styles: FontStyles {
                normal: String::new(),
                italic: "Italic".to_string(),
            },
        };
        FontTable::empty().with(DEFAULT_FAMILY, family)
    }
}
