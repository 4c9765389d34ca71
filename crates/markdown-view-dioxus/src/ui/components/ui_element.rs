use crate::ui::css::{compose_css, style_to_css};
use dioxus::prelude::*;
use markdown_view_engine::element::{
    ImageElement, TableElement, TextChild, TextElement, UiElement, ViewElement,
};
use markdown_view_engine::{Style, StyleProp};

// Text widgets keep the engine's explicit line breaks.
const TEXT_BASE: &str = "white-space: pre-wrap";
const VIEW_BASE: &str = "display: flex; flex-direction: column";

fn with_base(base: &str, css: String) -> String {
    if css.is_empty() {
        base.to_string()
    } else {
        format!("{base}; {css}")
    }
}

/// Renders an engine element tree with plain HTML elements.
#[component]
pub fn UiElementView(element: UiElement) -> Element {
    render_element(&element)
}

pub fn render_element(element: &UiElement) -> Element {
    match element {
        UiElement::Text(text) => render_text(text),
        UiElement::View(view) => render_view(view),
        UiElement::Image(image) => render_image(image),
        UiElement::Table(table) => render_table(table),
    }
}

fn render_text_child(child: &TextChild) -> Element {
    match child {
        TextChild::Text(text) => rsx! { "{text}" },
        TextChild::Element(element) => render_element(element),
    }
}

fn render_text(text: &TextElement) -> Element {
    let css = with_base(TEXT_BASE, style_to_css(&text.style));

    match &text.on_press {
        Some(press) => {
            let press = press.clone();
            rsx! {
                span {
                    class: "link",
                    role: "link",
                    style: "{css}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        evt.stop_propagation();
                        press.press();
                    },
                    for child in text.children.iter() {
                        {render_text_child(child)}
                    }
                }
            }
        }
        None => rsx! {
            span {
                style: "{css}",
                for child in text.children.iter() {
                    {render_text_child(child)}
                }
            }
        },
    }
}

fn render_view(view: &ViewElement) -> Element {
    let merged = Style::flatten(view.style.iter().map(Some));
    // Row layouts (list items) override the column default.
    let base = if merged.contains(&StyleProp::FlexDirection) {
        "display: flex"
    } else {
        VIEW_BASE
    };
    let css = with_base(base, style_to_css(&merged));

    rsx! {
        div {
            style: "{css}",
            for child in view.children.iter() {
                {render_element(child)}
            }
        }
    }
}

fn render_image(image: &ImageElement) -> Element {
    let source = &image.source;
    let css = image.style.as_ref().map(style_to_css).unwrap_or_default();

    rsx! {
        img { src: "{source}", style: "{css}" }
    }
}

fn render_table(table: &TableElement) -> Element {
    let border = table.border_style.as_ref().map(style_to_css).unwrap_or_default();
    let css = with_base("border-collapse: collapse", border);

    rsx! {
        table {
            style: "{css}",
            tbody {
                for row in table.rows.iter() {
                    tr {
                        for cell in row.cells.iter() {
                            td {
                                style: compose_css(&cell.style),
                                span {
                                    style: compose_css(&cell.text_style),
                                    for element in cell.content.iter() {
                                        {render_element(element)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
