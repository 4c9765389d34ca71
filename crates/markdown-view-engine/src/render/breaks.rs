use crate::ast::Node;
use crate::element::{TextChild, TextElement, UiElement, ViewElement};
use crate::error::RenderError;
use crate::rules::{Output, RenderState};
use crate::style::{StyleSlot, Styles};

// Whitespace-only runs: no font is synthesized for them.
fn whitespace(state: &RenderState<'_>, styles: &Styles, slot: StyleSlot, text: &str) -> UiElement {
    UiElement::Text(TextElement {
        key: state.key.clone(),
        style: styles.flatten(&[slot]),
        children: vec![TextChild::Text(text.to_string())],
        on_press: None,
    })
}

pub(super) fn render_hr(
    _node: &Node,
    _output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    Ok(UiElement::View(ViewElement {
        key: state.key.clone(),
        style: styles.compose(&[StyleSlot::Hr]),
        children: Vec::new(),
    }))
}

pub(super) fn render_br(
    _node: &Node,
    _output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    Ok(whitespace(state, styles, StyleSlot::Br, "\n\n"))
}

pub(super) fn render_newline(
    _node: &Node,
    _output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    Ok(whitespace(state, styles, StyleSlot::Newline, "\n"))
}
