use crate::ast::{ListNode, Node};
use crate::element::{UiElement, ViewElement};
use crate::error::RenderError;
use crate::fonts::{Fragment, markdown_text};
use crate::rules::{Output, RenderState};
use crate::style::{StyleProp, StyleSlot, Styles};

pub const DEFAULT_BULLET: &str = "\u{2022}";

/// Label shown before item `index` (0-based).
///
/// Ordered items count up from `start`; unordered items use the bullet
/// slot's `content` property when set, otherwise [`DEFAULT_BULLET`].
pub fn item_label(list: &ListNode, index: usize, styles: &Styles) -> String {
    if list.ordered {
        return format!("{}.", i128::from(list.start) + index as i128);
    }
    styles
        .get(&StyleSlot::ListItemBullet)
        .and_then(|style| style.text(&StyleProp::Content))
        .unwrap_or(DEFAULT_BULLET)
        .to_string()
}

pub(super) fn render_list(
    node: &Node,
    output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    let Node::List(list) = node else {
        return Ok(UiElement::View(ViewElement {
            key: state.key.clone(),
            style: styles.compose(&[StyleSlot::List]),
            children: Vec::new(),
        }));
    };

    let (label_slot, content_slot) = if list.ordered {
        (StyleSlot::ListItemNumber, StyleSlot::ListItemOrderedContent)
    } else {
        (StyleSlot::ListItemBullet, StyleSlot::ListItemUnorderedContent)
    };
    let label_style = styles.flatten(&[label_slot]).without(&[StyleProp::Content]);
    let content_style = styles.flatten(&[content_slot]);

    let items = list
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let item_state = state.with_key(i);
            let label = markdown_text(
                output,
                &item_state.with_key("label"),
                &label_style,
                vec![Fragment::Raw(item_label(list, i, styles))],
            )?;
            let content = markdown_text(
                output,
                &item_state.with_key("content"),
                &content_style,
                Fragment::from_content(item),
            )?;
            Ok(UiElement::View(ViewElement {
                key: item_state.key.clone(),
                style: styles.compose(&[StyleSlot::ListItem]),
                children: vec![UiElement::Text(label), UiElement::Text(content)],
            }))
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    Ok(UiElement::View(ViewElement {
        key: state.key.clone(),
        style: styles.compose(&[StyleSlot::List]),
        children: items,
    }))
}
