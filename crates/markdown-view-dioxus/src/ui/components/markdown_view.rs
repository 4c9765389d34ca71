use crate::ui::components::error_screen::ErrorScreen;
use crate::ui::components::ui_element::UiElementView;
use dioxus::prelude::*;
use markdown_view_engine::{FontTable, MarkdownRenderer, Node, Rules, Style, Styles};

/// Renders a parsed markdown document.
///
/// `styles` are merged over the built-in style table and `rules` over the
/// built-in rules. A failed render pass shows an [`ErrorScreen`] instead of
/// a partial document.
#[component]
pub fn MarkdownView(
    document: Vec<Node>,
    #[props(default)] styles: Styles,
    #[props(default)] fonts: FontTable,
    #[props(default)] text_style: Style,
    rules: Option<Rules>,
    on_link_press: Option<EventHandler<String>>,
) -> Element {
    let mut renderer = MarkdownRenderer::new()
        .with_styles(&styles)
        .with_fonts(fonts)
        .with_text_style(text_style);
    if let Some(rules) = rules {
        renderer = renderer.with_rules(&rules);
    }
    if let Some(handler) = on_link_press {
        renderer = renderer.with_on_link_press(move |url| handler.call(url.to_string()));
    }

    match renderer.render(&document) {
        Ok(element) => rsx! {
            div {
                class: "markdown-view",
                UiElementView { element }
            }
        },
        Err(e) => {
            log::error!("Failed to render markdown document: {e}");
            rsx! {
                ErrorScreen {
                    title: "Unable to render document".to_string(),
                    message: e.to_string(),
                    details: format!("{e:?}"),
                }
            }
        }
    }
}
