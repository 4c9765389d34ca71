use crate::ast::{InlineContent, Node};
use crate::element::{LinkPress, UiElement};
use crate::error::RenderError;
use crate::fonts::{Fragment, markdown_text};
use crate::rules::{Output, RenderState};
use crate::style::{StyleSlot, Styles};

/// Text content of any node that has some, as cascade fragments.
pub(crate) fn fragments(node: &Node) -> Vec<Fragment<'_>> {
    match node {
        Node::Text(text) | Node::InlineCode(text) => vec![Fragment::Raw(text.content.clone())],
        Node::CodeBlock(code) => vec![Fragment::Raw(code.content.clone())],
        Node::Paragraph(inline)
        | Node::Em(inline)
        | Node::Strong(inline)
        | Node::U(inline)
        | Node::Del(inline)
        | Node::BlockQuote(inline) => Fragment::from_content(&inline.content),
        Node::Heading(heading) => Fragment::from_content(&heading.content),
        Node::Link(link) => Fragment::from_content(&link.content),
        Node::Custom(custom) => custom
            .content
            .as_ref()
            .map(Fragment::from_content)
            .unwrap_or_default(),
        Node::Image(_) | Node::List(_) | Node::Table(_) | Node::Hr | Node::Br | Node::Newline => {
            Vec::new()
        }
    }
}

/// Renders a node's content as styled text using the composed `slots`.
///
/// Later slots override earlier ones; undefined slots add nothing.
pub fn text_content(
    node: &Node,
    slots: &[StyleSlot],
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    let local = styles.flatten(slots);
    markdown_text(output, state, &local, fragments(node)).map(UiElement::Text)
}

pub(super) fn render_text(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    text_content(node, &[StyleSlot::Text], output, state, styles)
}

pub(super) fn render_em(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    text_content(node, &[StyleSlot::Em], output, state, styles)
}

pub(super) fn render_strong(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    text_content(node, &[StyleSlot::Strong], output, state, styles)
}

pub(super) fn render_underline(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    text_content(node, &[StyleSlot::U], output, state, styles)
}

pub(super) fn render_del(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    text_content(node, &[StyleSlot::Del], output, state, styles)
}

pub(super) fn render_block_quote(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    text_content(node, &[StyleSlot::BlockQuote], output, state, styles)
}

pub(super) fn render_code_block(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    text_content(node, &[StyleSlot::CodeBlock], output, state, styles)
}

pub(super) fn render_inline_code(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    text_content(node, &[StyleSlot::InlineCode], output, state, styles)
}

/// `heading` composed with the level-specific `heading{level}` slot.
pub(super) fn render_heading(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    let mut slots = vec![StyleSlot::Heading];
    if let Node::Heading(heading) = node {
        slots.extend(StyleSlot::heading(heading.level));
    }
    text_content(node, &slots, output, state, styles)
}

/// A paragraph holding nothing but one image renders as the image block
/// itself; host text widgets cannot lay out images inline.
pub(super) fn render_paragraph(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    if let Node::Paragraph(paragraph) = node
        && let Some(image @ Node::Image(_)) = sole_node(&paragraph.content)
    {
        return super::image::render_image(image, output, state, styles);
    }
    text_content(node, &[StyleSlot::Paragraph], output, state, styles)
}

fn sole_node(content: &InlineContent) -> Option<&Node> {
    match content {
        InlineContent::Nodes(nodes) if nodes.len() == 1 => nodes.first(),
        _ => None,
    }
}

/// Styled text that reports its target when pressed. Without a callback
/// in the state no press handler is attached at all.
pub(super) fn render_link(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    let local = styles.flatten(&[StyleSlot::Link]);
    let mut text = markdown_text(output, state, &local, fragments(node))?;

    if let (Node::Link(link), Some(callback)) = (node, &state.on_link_press) {
        text.on_press = Some(LinkPress {
            target: link.target.clone(),
            callback: callback.clone(),
        });
    }
    Ok(UiElement::Text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ImageNode, InlineContentNode};
    use crate::fonts::{FontContext, FontTable};
    use crate::rules::{OnLinkPress, Rules};
    use crate::style::{Style, StyleProp};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn render(node: &Node, styles: &Styles, state: &RenderState<'_>) -> UiElement {
        Rules::default().render(node, state, styles).unwrap()
    }

    #[test]
    fn test_heading_composes_generic_and_level_styles() {
        let fonts = FontTable::default();
        let state = RenderState::new(FontContext::root(&fonts, &Style::new()));
        let styles = Styles::new()
            .with(
                StyleSlot::Heading,
                Style::new()
                    .with(StyleProp::FontSize, 10)
                    .with(StyleProp::Color, "gray"),
            )
            .with(StyleSlot::Heading2, Style::new().with(StyleProp::FontSize, 24));

        let element = render(&Node::heading(2, "Title"), &styles, &state);
        let text = element.as_text().unwrap();

        assert_eq!(text.style.number(&StyleProp::FontSize), Some(24.0));
        assert_eq!(text.style.text(&StyleProp::Color), Some("gray"));
        assert_eq!(text.own_text(), "Title");
    }

    #[test]
    fn test_paragraph_with_single_image_collapses_to_image_block() {
        let fonts = FontTable::default();
        let state = RenderState::new(FontContext::root(&fonts, &Style::new()));
        let paragraph = Node::paragraph(vec![Node::image("https://example.com/a.png")]);

        let element = render(&paragraph, &Styles::builtin(), &state);

        let wrapper = element.as_view().expect("image wrapper view");
        assert_eq!(
            wrapper.children[0].as_image().unwrap().source,
            "https://example.com/a.png"
        );
    }

    #[test]
    fn test_paragraph_with_image_and_text_stays_text() {
        let fonts = FontTable::default();
        let state = RenderState::new(FontContext::root(&fonts, &Style::new()));
        let paragraph = Node::paragraph(vec![Node::image("a.png"), Node::text("caption")]);

        let element = render(&paragraph, &Styles::builtin(), &state);

        assert!(element.as_text().is_some());
        assert_eq!(element.plain_text(), "caption");
    }

    #[test]
    fn test_paragraph_with_single_image_as_direct_node_stays_text() {
        let fonts = FontTable::default();
        let state = RenderState::new(FontContext::root(&fonts, &Style::new()));
        let paragraph = Node::Paragraph(InlineContentNode {
            content: InlineContent::node(Node::Image(ImageNode {
                target: "a.png".into(),
                alt: String::new(),
                title: String::new(),
                width: None,
                height: None,
            })),
        });

        let element = render(&paragraph, &Styles::new(), &state);

        assert!(element.as_text().is_some());
    }

    #[test]
    fn test_link_press_reports_target() {
        let fonts = FontTable::default();
        let pressed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pressed);
        let callback = OnLinkPress::new(move |url| sink.borrow_mut().push(url.to_string()));
        let state = RenderState::new(FontContext::root(&fonts, &Style::new()))
            .with_on_link_press(Some(callback));

        let element = render(&Node::link("https://example.com", "site"), &Styles::new(), &state);
        let press = element.as_text().unwrap().on_press.as_ref().unwrap();
        press.press();

        assert_eq!(press.target, "https://example.com");
        assert_eq!(*pressed.borrow(), vec!["https://example.com".to_string()]);
    }

    #[test]
    fn test_link_without_callback_has_no_press_handler() {
        let fonts = FontTable::default();
        let state = RenderState::new(FontContext::root(&fonts, &Style::new()));

        let element = render(&Node::link("https://example.com", "site"), &Styles::new(), &state);

        assert_eq!(element.as_text().unwrap().on_press, None);
    }

    #[test]
    fn test_strong_emphasis_resolves_bold_italic() {
        let fonts = FontTable::default();
        let state = RenderState::new(FontContext::root(&fonts, &Style::new()));
        let node = Node::strong(vec![Node::text("a "), Node::em("b")]);

        let element = render(&node, &Styles::builtin(), &state);
        let fonts: Vec<_> = element
            .text_elements()
            .into_iter()
            .filter_map(|text| text.font_family())
            .collect();

        assert_eq!(fonts, vec!["Merriweather-Bold", "Merriweather-BoldItalic"]);
    }
}
