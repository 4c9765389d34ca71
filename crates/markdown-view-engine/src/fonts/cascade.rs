//! Font cascade for styled text.
//!
//! Text containers rarely carry complete font metadata. Each text element
//! merges its own style over the ambient [`FontContext`]; leaves bake the
//! merged family, weight and style into one concrete asset name, while
//! containers strip font properties from their own style and hand a new
//! context to their children only when they set font properties themselves.

use crate::ast::{InlineContent, Node};
use crate::element::{TextChild, TextElement, UiElement};
use crate::error::RenderError;
use crate::rules::{Output, RenderState};
use crate::style::{Style, StyleProp};

use super::{DEFAULT_FAMILY, FontTable, synthesize};

/// Ambient font state inherited by descendants.
#[derive(Debug, Clone, PartialEq)]
pub struct FontContext<'a> {
    fonts: &'a FontTable,
    style: Style,
}

impl<'a> FontContext<'a> {
    pub fn new(fonts: &'a FontTable, style: Style) -> Self {
        Self { fonts, style }
    }

    /// Context for the top of a render pass: the default family overlaid
    /// with the caller's base text style.
    pub fn root(fonts: &'a FontTable, text_style: &Style) -> Self {
        let base = Style::new().with(StyleProp::FontFamily, DEFAULT_FAMILY);
        Self::new(fonts, base.merged(text_style))
    }

    pub fn fonts(&self) -> &'a FontTable {
        self.fonts
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Resolves the concrete font for a leaf and returns the style to emit.
    ///
    /// `fontWeight` and `fontStyle` are encoded in the family name and must
    /// not reach the host again.
    pub fn resolve_leaf(&self, local: &Style) -> Result<Style, RenderError> {
        let merged = self.style.merged(local);
        let key = |prop: StyleProp| merged.get(&prop).and_then(|v| v.as_key());
        let family = key(StyleProp::FontFamily);
        let weight = key(StyleProp::FontWeight);
        let style = key(StyleProp::FontStyle);

        let font_name = synthesize(
            self.fonts,
            family.as_deref(),
            weight.as_deref(),
            style.as_deref(),
        )?;

        Ok(merged
            .without(&StyleProp::FONT)
            .with(StyleProp::FontFamily, font_name))
    }

    /// The emitted container style and the context its children use.
    ///
    /// The context is replaced only when `local` sets font properties;
    /// otherwise children keep resolving against `self`.
    pub fn resolve_container(&self, local: &Style) -> (Style, Option<FontContext<'a>>) {
        let merged = self.style.merged(local);
        let emitted = merged.without(&StyleProp::FONT);
        let intent = local.pick(&StyleProp::FONT);

        if intent.is_empty() {
            return (emitted, None);
        }

        log::debug!("font context replaced by {} font properties", intent.len());
        (emitted, Some(FontContext::new(self.fonts, merged)))
    }
}

/// One piece of text element content.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment<'n> {
    Raw(String),
    Node(&'n Node),
}

impl<'n> Fragment<'n> {
    /// Splits inline content into fragments.
    pub fn from_content(content: &'n InlineContent) -> Vec<Fragment<'n>> {
        match content {
            InlineContent::Text(text) => vec![Fragment::Raw(text.clone())],
            InlineContent::Node(node) => vec![Fragment::Node(node)],
            InlineContent::Nodes(nodes) => nodes.iter().map(Fragment::Node).collect(),
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Fragment::Raw(_))
    }
}

/// Builds a styled text element, applying the font cascade.
///
/// Content made only of raw fragments is a leaf and gets a concrete font.
/// Anything containing a node is a container: node fragments are rendered
/// through `output`, and raw fragments sitting among them become leaves of
/// their own so they pick up the container's font intent.
pub fn markdown_text(
    output: &Output<'_>,
    state: &RenderState<'_>,
    local: &Style,
    fragments: Vec<Fragment<'_>>,
) -> Result<TextElement, RenderError> {
    if fragments.iter().all(Fragment::is_raw) {
        let style = state.font.resolve_leaf(local)?;
        let children = fragments
            .into_iter()
            .filter_map(|fragment| match fragment {
                Fragment::Raw(text) => Some(TextChild::Text(text)),
                Fragment::Node(_) => None,
            })
            .collect();
        return Ok(TextElement {
            key: state.key.clone(),
            style,
            children,
            on_press: None,
        });
    }

    let (style, context) = state.font.resolve_container(local);
    let child_state = match context {
        Some(context) => state.with_font(context),
        None => state.clone(),
    };

    let children = fragments
        .into_iter()
        .enumerate()
        .map(|(i, fragment)| {
            let sibling = child_state.with_key(i);
            match fragment {
                Fragment::Raw(text) => {
                    let leaf =
                        markdown_text(output, &sibling, &Style::new(), vec![Fragment::Raw(text)])?;
                    Ok(TextChild::Element(UiElement::Text(leaf)))
                }
                Fragment::Node(node) => Ok(TextChild::Element(output.render(node, &sibling)?)),
            }
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    Ok(TextElement {
        key: state.key.clone(),
        style,
        children,
        on_press: None,
    })
}
