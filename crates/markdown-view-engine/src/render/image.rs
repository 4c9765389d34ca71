use crate::ast::{ImageNode, Node};
use crate::element::{ImageElement, UiElement, ViewElement};
use crate::error::RenderError;
use crate::rules::{Output, RenderState};
use crate::style::{Style, StyleProp, StyleSlot, Styles};

/// Explicit size grown by the wrapper's padding.
///
/// Per-edge padding wins over the `padding` shorthand, which defaults to 0.
/// Only the dimensions the image declares are emitted.
pub fn padded_size(image: &ImageNode, wrapper: Option<&Style>) -> Style {
    let edge = |prop: StyleProp| {
        wrapper
            .and_then(|style| style.number(&prop).or_else(|| style.number(&StyleProp::Padding)))
            .unwrap_or(0.0)
    };

    let mut size = Style::new();
    if let Some(width) = image.width {
        size.set(
            StyleProp::Width,
            width + edge(StyleProp::PaddingLeft) + edge(StyleProp::PaddingRight),
        );
    }
    if let Some(height) = image.height {
        size.set(
            StyleProp::Height,
            height + edge(StyleProp::PaddingTop) + edge(StyleProp::PaddingBottom),
        );
    }
    size
}

pub(super) fn render_image(
    node: &Node,
    _output: &Output<'_>,
    state: &RenderState<'_>,
    styles: &Styles,
) -> Result<UiElement, RenderError> {
    let wrapper_style = styles.get(&StyleSlot::ImageWrapper);
    let mut style: Vec<Style> = wrapper_style.cloned().into_iter().collect();
    let mut children = Vec::new();

    if let Node::Image(image) = node {
        if image.width.is_some() || image.height.is_some() {
            style.push(padded_size(image, wrapper_style));
        }
        children.push(UiElement::Image(ImageElement {
            key: "0".to_string(),
            source: image.target.clone(),
            style: styles.get(&StyleSlot::Image).cloned(),
        }));
    }

    Ok(UiElement::View(ViewElement {
        key: state.key.clone(),
        style,
        children,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{FontContext, FontTable};
    use crate::rules::Rules;
    use pretty_assertions::assert_eq;

    fn sized(width: Option<f64>, height: Option<f64>) -> ImageNode {
        ImageNode {
            target: "cat.png".to_string(),
            alt: "a cat".to_string(),
            title: String::new(),
            width,
            height,
        }
    }

    #[test]
    fn test_per_edge_padding_beats_shorthand() {
        let wrapper = Style::new()
            .with(StyleProp::Padding, 5)
            .with(StyleProp::PaddingLeft, 1);

        let size = padded_size(&sized(Some(100.0), Some(50.0)), Some(&wrapper));

        assert_eq!(size.number(&StyleProp::Width), Some(106.0));
        assert_eq!(size.number(&StyleProp::Height), Some(60.0));
    }

    #[test]
    fn test_no_wrapper_style_means_no_padding() {
        let size = padded_size(&sized(Some(100.0), None), None);

        assert_eq!(size, Style::new().with(StyleProp::Width, 100.0));
    }

    #[test]
    fn test_unsized_image_keeps_wrapper_style_only() {
        let fonts = FontTable::default();
        let state = RenderState::new(FontContext::root(&fonts, &Style::new())).with_key("img");
        let wrapper = Style::new().with(StyleProp::Padding, 3);
        let styles = Styles::new().with(StyleSlot::ImageWrapper, wrapper.clone());

        let element = Rules::default()
            .render(&Node::Image(sized(None, None)), &state, &styles)
            .unwrap();

        let view = element.as_view().unwrap();
        assert_eq!(view.key, "img");
        assert_eq!(view.style, vec![wrapper]);
        assert_eq!(view.children[0].as_image().unwrap().source, "cat.png");
    }

    #[test]
    fn test_sized_image_appends_padded_size() {
        let fonts = FontTable::default();
        let state = RenderState::new(FontContext::root(&fonts, &Style::new()));
        let wrapper = Style::new().with(StyleProp::Padding, 2);
        let styles = Styles::new().with(StyleSlot::ImageWrapper, wrapper.clone());

        let element = Rules::default()
            .render(&Node::Image(sized(Some(10.0), Some(20.0))), &state, &styles)
            .unwrap();

        let view = element.as_view().unwrap();
        assert_eq!(
            view.style,
            vec![
                wrapper,
                Style::new()
                    .with(StyleProp::Width, 14.0)
                    .with(StyleProp::Height, 24.0)
            ]
        );
    }
}
