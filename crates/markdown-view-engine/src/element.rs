//! UI element tree produced by a render pass.
//!
//! The engine treats hosts as opaque: elements only carry keys, style
//! objects or composed style lists, children and press handlers. A host
//! adapter maps each variant onto its own text, view, image and table
//! widgets, merging composed style lists last-wins.

use crate::rules::OnLinkPress;
use crate::style::Style;

#[derive(Debug, Clone, PartialEq)]
pub enum UiElement {
    Text(TextElement),
    View(ViewElement),
    Image(ImageElement),
    Table(TableElement),
}

impl UiElement {
    pub fn key(&self) -> &str {
        match self {
            UiElement::Text(text) => &text.key,
            UiElement::View(view) => &view.key,
            UiElement::Image(image) => &image.key,
            UiElement::Table(table) => &table.key,
        }
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            UiElement::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_view(&self) -> Option<&ViewElement> {
        match self {
            UiElement::View(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            UiElement::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableElement> {
        match self {
            UiElement::Table(table) => Some(table),
            _ => None,
        }
    }

    /// All text in document order, concatenated.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            UiElement::Text(text) => {
                for child in &text.children {
                    match child {
                        TextChild::Text(s) => out.push_str(s),
                        TextChild::Element(element) => element.collect_text(out),
                    }
                }
            }
            UiElement::View(view) => {
                for child in &view.children {
                    child.collect_text(out);
                }
            }
            UiElement::Image(_) => {}
            UiElement::Table(table) => {
                for cell in table.rows.iter().flat_map(|row| &row.cells) {
                    for element in &cell.content {
                        element.collect_text(out);
                    }
                }
            }
        }
    }

    /// Every text element in the subtree, depth first.
    pub fn text_elements(&self) -> Vec<&TextElement> {
        let mut found = Vec::new();
        self.collect_text_elements(&mut found);
        found
    }

    fn collect_text_elements<'a>(&'a self, found: &mut Vec<&'a TextElement>) {
        match self {
            UiElement::Text(text) => {
                found.push(text);
                for child in &text.children {
                    if let TextChild::Element(element) = child {
                        element.collect_text_elements(found);
                    }
                }
            }
            UiElement::View(view) => {
                for child in &view.children {
                    child.collect_text_elements(found);
                }
            }
            UiElement::Image(_) => {}
            UiElement::Table(table) => {
                for cell in table.rows.iter().flat_map(|row| &row.cells) {
                    for element in &cell.content {
                        element.collect_text_elements(found);
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextChild {
    Text(String),
    Element(UiElement),
}

/// A styled text run. Leaves carry a concrete `fontFamily`; containers
/// carry no font properties at all.
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub key: String,
    pub style: Style,
    pub children: Vec<TextChild>,
    pub on_press: Option<LinkPress>,
}

impl TextElement {
    /// Text of the direct raw children only.
    pub fn own_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                TextChild::Text(s) => Some(s.as_str()),
                TextChild::Element(_) => None,
            })
            .collect()
    }

    pub fn font_family(&self) -> Option<&str> {
        self.style.text(&crate::style::StyleProp::FontFamily)
    }
}

/// Press behaviour of a rendered link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkPress {
    pub target: String,
    pub callback: OnLinkPress,
}

impl LinkPress {
    pub fn press(&self) {
        self.callback.call(&self.target);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewElement {
    pub key: String,
    pub style: Vec<Style>,
    pub children: Vec<UiElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub key: String,
    pub source: String,
    pub style: Option<Style>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableElement {
    pub key: String,
    pub border_style: Option<Style>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub key: String,
    /// 1-based; the header row is 1.
    pub row: usize,
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub key: String,
    pub row: usize,
    pub column: usize,
    /// Composed cell styles in composition order.
    pub style: Vec<Style>,
    /// Composed content styles in composition order.
    pub text_style: Vec<Style>,
    pub content: Vec<UiElement>,
}
