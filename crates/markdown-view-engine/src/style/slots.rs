use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::{Style, StyleProp};

macro_rules! style_slots {
    ($($variant:ident => $name:literal,)*) => {
        /// A named entry of the style table.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum StyleSlot {
            $($variant,)*
            /// A slot used only by caller-supplied rules.
            Custom(String),
        }

        impl StyleSlot {
            pub fn as_str(&self) -> &str {
                match self {
                    $(StyleSlot::$variant => $name,)*
                    StyleSlot::Custom(name) => name,
                }
            }

            pub fn from_name(name: &str) -> Self {
                match name {
                    $($name => StyleSlot::$variant,)*
                    other => StyleSlot::Custom(other.to_string()),
                }
            }
        }
    };
}

style_slots! {
    BlockQuote => "blockQuote",
    Br => "br",
    CodeBlock => "codeBlock",
    Del => "del",
    Em => "em",
    Heading => "heading",
    Heading1 => "heading1",
    Heading2 => "heading2",
    Heading3 => "heading3",
    Heading4 => "heading4",
    Heading5 => "heading5",
    Heading6 => "heading6",
    Hr => "hr",
    Image => "image",
    ImageWrapper => "imageWrapper",
    InlineCode => "inlineCode",
    Link => "link",
    List => "list",
    ListItem => "listItem",
    ListItemNumber => "listItemNumber",
    ListItemBullet => "listItemBullet",
    ListItemOrderedContent => "listItemOrderedContent",
    ListItemUnorderedContent => "listItemUnorderedContent",
    Newline => "newline",
    Paragraph => "paragraph",
    Strong => "strong",
    Table => "table",
    TableHeaderCell => "tableHeaderCell",
    TableHeaderCellContent => "tableHeaderCellContent",
    TableCell => "tableCell",
    TableCellOddRow => "tableCellOddRow",
    TableCellEvenRow => "tableCellEvenRow",
    TableCellLastRow => "tableCellLastRow",
    TableCellOddColumn => "tableCellOddColumn",
    TableCellEvenColumn => "tableCellEvenColumn",
    TableCellLastColumn => "tableCellLastColumn",
    TableCellContent => "tableCellContent",
    TableCellContentOddRow => "tableCellContentOddRow",
    TableCellContentEvenRow => "tableCellContentEvenRow",
    TableCellContentLastRow => "tableCellContentLastRow",
    TableCellContentOddColumn => "tableCellContentOddColumn",
    TableCellContentEvenColumn => "tableCellContentEvenColumn",
    TableCellContentLastColumn => "tableCellContentLastColumn",
    Text => "text",
    U => "u",
}

impl StyleSlot {
    /// The level-specific heading slot. Levels outside 1-6 have none.
    pub fn heading(level: u8) -> Option<StyleSlot> {
        match level {
            1 => Some(StyleSlot::Heading1),
            2 => Some(StyleSlot::Heading2),
            3 => Some(StyleSlot::Heading3),
            4 => Some(StyleSlot::Heading4),
            5 => Some(StyleSlot::Heading5),
            6 => Some(StyleSlot::Heading6),
            _ => None,
        }
    }
}

impl From<String> for StyleSlot {
    fn from(name: String) -> Self {
        StyleSlot::from_name(&name)
    }
}

impl From<StyleSlot> for String {
    fn from(slot: StyleSlot) -> Self {
        slot.as_str().to_string()
    }
}

impl fmt::Display for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The style table handed to every render rule.
///
/// Looking up a slot that was never defined yields `None`, which renderers
/// treat as "no styling".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Styles {
    slots: HashMap<StyleSlot, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: &StyleSlot) -> Option<&Style> {
        self.slots.get(slot)
    }

    pub fn insert(&mut self, slot: StyleSlot, style: Style) -> Option<Style> {
        self.slots.insert(slot, style)
    }

    pub fn with(mut self, slot: StyleSlot, style: Style) -> Self {
        self.insert(slot, style);
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Collapses several slots into one style, later slots winning.
    pub fn flatten(&self, slots: &[StyleSlot]) -> Style {
        Style::flatten(slots.iter().map(|slot| self.get(slot)))
    }

    /// Resolves several slots into a composed style list, skipping the
    /// ones that are not defined.
    pub fn compose(&self, slots: &[StyleSlot]) -> Vec<Style> {
        slots
            .iter()
            .filter_map(|slot| self.get(slot).cloned())
            .collect()
    }

    /// `self` with `overrides` merged in slot by slot; properties from
    /// `overrides` take precedence.
    pub fn merged_with(&self, overrides: &Styles) -> Styles {
        let mut slots = self.slots.clone();
        for (slot, style) in &overrides.slots {
            let merged = match slots.get(slot) {
                Some(base) => base.merged(style),
                None => style.clone(),
            };
            slots.insert(slot.clone(), merged);
        }
        Styles { slots }
    }

    pub fn without_nulls(&self) -> Styles {
        Styles {
            slots: self
                .slots
                .iter()
                .map(|(slot, style)| (slot.clone(), style.without_nulls()))
                .collect(),
        }
    }

    /// The default table merged under caller styles by the top-level
    /// renderer. It never names a font family, so it works with any font
    /// table that defines `bold` weight and `italic` style.
    pub fn builtin() -> Styles {
        let heading_size = |size: i32| Style::new().with(StyleProp::FontSize, size);
        let underline = Style::new().with(StyleProp::TextDecorationLine, "underline");

        Styles::new()
            .with(
                StyleSlot::BlockQuote,
                Style::new()
                    .with(StyleProp::PaddingLeft, 10)
                    .with(StyleProp::BorderLeftWidth, 4)
                    .with(StyleProp::BorderLeftColor, "#cccccc")
                    .with(StyleProp::Color, "#555555"),
            )
            .with(
                StyleSlot::CodeBlock,
                Style::new()
                    .with(StyleProp::BackgroundColor, "#f5f5f5")
                    .with(StyleProp::Padding, 8),
            )
            .with(
                StyleSlot::Del,
                Style::new().with(StyleProp::TextDecorationLine, "line-through"),
            )
            .with(
                StyleSlot::Em,
                Style::new().with(StyleProp::FontStyle, "italic"),
            )
            .with(
                StyleSlot::Heading,
                Style::new()
                    .with(StyleProp::FontWeight, "bold")
                    .with(StyleProp::MarginTop, 8)
                    .with(StyleProp::MarginBottom, 4),
            )
            .with(StyleSlot::Heading1, heading_size(32))
            .with(StyleSlot::Heading2, heading_size(24))
            .with(StyleSlot::Heading3, heading_size(18))
            .with(StyleSlot::Heading4, heading_size(16))
            .with(StyleSlot::Heading5, heading_size(13))
            .with(StyleSlot::Heading6, heading_size(11))
            .with(
                StyleSlot::Hr,
                Style::new()
                    .with(StyleProp::BackgroundColor, "#cccccc")
                    .with(StyleProp::Height, 1),
            )
            .with(
                StyleSlot::InlineCode,
                Style::new().with(StyleProp::BackgroundColor, "#f5f5f5"),
            )
            .with(
                StyleSlot::Link,
                underline.clone().with(StyleProp::Color, "#0366d6"),
            )
            .with(
                StyleSlot::ListItem,
                Style::new().with(StyleProp::FlexDirection, "row"),
            )
            .with(
                StyleSlot::ListItemNumber,
                Style::new()
                    .with(StyleProp::MinWidth, 24)
                    .with(StyleProp::PaddingRight, 4),
            )
            .with(
                StyleSlot::ListItemBullet,
                Style::new()
                    .with(StyleProp::MinWidth, 16)
                    .with(StyleProp::PaddingRight, 4),
            )
            .with(
                StyleSlot::Paragraph,
                Style::new().with(StyleProp::MarginBottom, 8),
            )
            .with(
                StyleSlot::Strong,
                Style::new().with(StyleProp::FontWeight, "bold"),
            )
            .with(
                StyleSlot::Table,
                Style::new()
                    .with(StyleProp::BorderWidth, 1)
                    .with(StyleProp::BorderColor, "#dddddd"),
            )
            .with(
                StyleSlot::TableHeaderCell,
                Style::new().with(StyleProp::BackgroundColor, "#eeeeee"),
            )
            .with(
                StyleSlot::TableCellContent,
                Style::new().with(StyleProp::Padding, 4),
            )
            .with(StyleSlot::U, underline)
    }
}

impl FromIterator<(StyleSlot, Style)> for Styles {
    fn from_iter<I: IntoIterator<Item = (StyleSlot, Style)>>(iter: I) -> Self {
        Styles {
            slots: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_slot_is_none() {
        let styles = Styles::new();
        assert_eq!(styles.get(&StyleSlot::Paragraph), None);
        assert_eq!(styles.flatten(&[StyleSlot::Heading, StyleSlot::Heading1]), Style::new());
        assert!(styles.compose(&[StyleSlot::TableCell]).is_empty());
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(StyleSlot::heading(1), Some(StyleSlot::Heading1));
        assert_eq!(StyleSlot::heading(6), Some(StyleSlot::Heading6));
        assert_eq!(StyleSlot::heading(0), None);
        assert_eq!(StyleSlot::heading(7), None);
    }

    #[test]
    fn test_merged_with_prefers_overrides_per_property() {
        let overrides = Styles::new()
            .with(
                StyleSlot::Strong,
                Style::new().with(StyleProp::Color, "red"),
            )
            .with(
                StyleSlot::Custom("callout".to_string()),
                Style::new().with(StyleProp::Padding, 2),
            );

        let merged = Styles::builtin().merged_with(&overrides);

        let strong = merged.get(&StyleSlot::Strong).unwrap();
        assert_eq!(strong.text(&StyleProp::FontWeight), Some("bold"));
        assert_eq!(strong.text(&StyleProp::Color), Some("red"));
        assert!(merged.get(&StyleSlot::from_name("callout")).is_some());
    }

    #[test]
    fn test_builtin_never_names_a_family() {
        let builtin = Styles::builtin();
        for (_, style) in builtin.slots.iter() {
            assert!(!style.contains(&StyleProp::FontFamily));
        }
    }
}
