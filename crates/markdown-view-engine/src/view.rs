//! Top-level entry point bundling rules, styles and fonts for a document.

use crate::ast::Node;
use crate::element::{UiElement, ViewElement};
use crate::error::RenderError;
use crate::fonts::{FontContext, FontTable};
use crate::rules::{OnLinkPress, Output, RenderState, Rules};
use crate::style::{Style, Styles};

/// Renders whole documents.
///
/// Caller styles are merged over [`Styles::builtin`], caller rules over the
/// built-in registry. The base text style seeds the root font context.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownRenderer {
    rules: Rules,
    styles: Styles,
    fonts: FontTable,
    text_style: Style,
    view_style: Style,
    on_link_press: Option<OnLinkPress>,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            styles: Styles::builtin(),
            fonts: FontTable::default(),
            text_style: Style::new(),
            view_style: Style::new(),
            on_link_press: None,
        }
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_styles(mut self, styles: &Styles) -> Self {
        self.styles = Styles::builtin().merged_with(styles);
        self
    }

    pub fn with_fonts(mut self, fonts: FontTable) -> Self {
        self.fonts = fonts;
        self
    }

    /// Layers caller rules on top of the built-in registry.
    pub fn with_rules(mut self, rules: &Rules) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Replaces the whole registry.
    pub fn with_registry(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_text_style(mut self, text_style: Style) -> Self {
        self.text_style = text_style;
        self
    }

    /// Style of the root view wrapping the document.
    pub fn with_view_style(mut self, view_style: Style) -> Self {
        self.view_style = view_style;
        self
    }

    pub fn with_on_link_press(mut self, on_link_press: impl Fn(&str) + 'static) -> Self {
        self.on_link_press = Some(OnLinkPress::new(on_link_press));
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn fonts(&self) -> &FontTable {
        &self.fonts
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Renders a single node.
    pub fn render_node(&self, node: &Node) -> Result<UiElement, RenderError> {
        let state = self.root_state();
        Output::new(&self.rules, &self.styles).render(node, &state)
    }

    /// Renders a document into one root view. The first failure aborts the
    /// pass and nothing is returned.
    pub fn render(&self, document: &[Node]) -> Result<UiElement, RenderError> {
        let state = self.root_state();
        let children = Output::new(&self.rules, &self.styles)
            .render_all(document, &state)
            .inspect_err(|err| log::debug!("render pass failed: {err}"))?;

        log::debug!("rendered {} top-level nodes", children.len());
        Ok(UiElement::View(ViewElement {
            key: "root".to_string(),
            style: if self.view_style.is_empty() {
                Vec::new()
            } else {
                vec![self.view_style.clone()]
            },
            children,
        }))
    }

    fn root_state(&self) -> RenderState<'_> {
        RenderState::new(FontContext::root(&self.fonts, &self.text_style))
            .with_on_link_press(self.on_link_press.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use crate::fonts::FontError;
    use crate::style::{StyleProp, StyleSlot};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_renders_with_default_table() {
        let element = MarkdownRenderer::new()
            .render(&[Node::paragraph(vec![Node::text("hello")])])
            .unwrap();

        let fonts: Vec<_> = element
            .text_elements()
            .into_iter()
            .filter_map(|text| text.font_family())
            .collect();
        assert_eq!(fonts, vec!["Merriweather-Regular"]);
        assert_eq!(element.plain_text(), "hello");
    }

    #[test]
    fn test_view_style_wraps_root_only() {
        let view_style = Style::new().with(StyleProp::Padding, 12);
        let element = MarkdownRenderer::new()
            .with_view_style(view_style.clone())
            .render(&[Node::paragraph(vec![Node::text("hello")])])
            .unwrap();

        let root = element.as_view().unwrap();
        assert_eq!(root.style, vec![view_style]);
        assert_eq!(root.key, "root");

        let bare = MarkdownRenderer::new().render(&[]).unwrap();
        assert!(bare.as_view().unwrap().style.is_empty());
    }

    #[test]
    fn test_single_node_renders_without_root_view() {
        let element = MarkdownRenderer::new()
            .render_node(&Node::strong("x"))
            .unwrap();

        let text = element.as_text().unwrap();
        assert_eq!(text.font_family(), Some("Merriweather-Bold"));
        assert_eq!(element.plain_text(), "x");
    }

    #[test]
    fn test_text_style_family_must_exist() {
        let renderer = MarkdownRenderer::new()
            .with_text_style(Style::new().with(StyleProp::FontFamily, "OpenSans"));

        let err = renderer.render(&[Node::text("x")]).unwrap_err();

        assert_eq!(
            err,
            RenderError::Font(FontError::UnsupportedFamily {
                family: Some("OpenSans".to_string())
            })
        );
    }

    #[test]
    fn test_caller_styles_merge_over_builtin() {
        let renderer = MarkdownRenderer::new().with_styles(
            &Styles::new().with(StyleSlot::Em, Style::new().with(StyleProp::Color, "red")),
        );

        let em = renderer.styles().get(&StyleSlot::Em).unwrap();
        assert_eq!(em.text(&StyleProp::FontStyle), Some("italic"));
        assert_eq!(em.text(&StyleProp::Color), Some("red"));
    }

    #[test]
    fn test_replaced_registry_rejects_unregistered_kinds() {
        let renderer = MarkdownRenderer::new().with_registry(Rules::empty());

        let err = renderer.render(&[Node::Hr]).unwrap_err();

        assert_eq!(err, RenderError::UnknownNodeKind(NodeKind::Hr));
    }
}
