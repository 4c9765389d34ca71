//! Server-side renders of the Dioxus adapter.

use dioxus::prelude::*;
use dioxus_ssr::render_element;
use markdown_view_dioxus::ui::css::{compose_css, style_to_css};
use markdown_view_dioxus::{MarkdownView, UiElementView};
use markdown_view_engine::ast::{InlineContent, ListNode, Node, NodeKind, TableNode};
use markdown_view_engine::element::{TextElement, UiElement};
use markdown_view_engine::{MarkdownRenderer, Rules, Style, StyleProp, StyleSlot, Styles};
use pretty_assertions::assert_eq;

fn render_document(document: Vec<Node>) -> String {
    render_element(rsx! {
        MarkdownView { document }
    })
}

#[test]
fn test_text_runs_carry_synthesized_fonts() {
    let html = render_document(vec![Node::paragraph(vec![
        Node::text("plain "),
        Node::strong(vec![Node::text("bold "), Node::em("both")]),
    ])]);

    assert!(html.contains("font-family: Merriweather-Regular"));
    assert!(html.contains("font-family: Merriweather-Bold\""));
    assert!(html.contains("font-family: Merriweather-BoldItalic"));
    assert!(!html.contains("font-weight"));
    assert!(!html.contains("font-style"));
    assert!(html.contains("both"));
}

#[test]
fn test_image_paragraph_renders_img() {
    let html = render_document(vec![Node::paragraph(vec![Node::image("cat.png")])]);

    assert!(html.contains("<img"));
    assert!(html.contains("src=\"cat.png\""));
}

#[test]
fn test_list_labels_are_rendered() {
    let html = render_document(vec![Node::List(ListNode {
        ordered: true,
        start: 5,
        items: vec![InlineContent::text("a"), InlineContent::text("b")],
    })]);

    assert!(html.contains(">5.<"));
    assert!(html.contains(">6.<"));
    assert!(html.contains("display: flex; flex-direction: row"));
}

#[test]
fn test_table_renders_rows_and_cells() {
    let html = render_document(vec![Node::Table(TableNode {
        header: vec!["Name".into(), "Value".into()],
        cells: vec![vec!["a".into(), "1".into()]],
        align: None,
    })]);

    assert_eq!(html.matches("<tr").count(), 2);
    assert_eq!(html.matches("<td").count(), 4);
    assert!(html.contains("border-collapse: collapse"));
    assert!(html.contains("background-color: #eeeeee"));
}

#[test]
fn test_render_failure_shows_error_screen() {
    let styles = Styles::new().with(
        StyleSlot::Em,
        Style::new().with(StyleProp::FontFamily, "Menlo"),
    );
    let html = render_element(rsx! {
        MarkdownView {
            document: vec![Node::paragraph(vec![Node::em("x")])],
            styles,
        }
    });

    assert!(html.contains("Unable to render document"));
    assert!(html.contains("Menlo"));
    assert!(html.contains("<pre"));
    assert!(html.contains("Font(UnsupportedFamily"));
    assert!(!html.contains("markdown-view\""));
}

#[test]
fn test_caller_rules_reach_the_host() {
    let rules = Rules::empty().with(NodeKind::Hr, |_node, _output, state, _styles| {
        Ok(UiElement::Text(TextElement {
            key: state.key.clone(),
            style: Style::new(),
            children: vec![markdown_view_engine::TextChild::Text("* * *".to_string())],
            on_press: None,
        }))
    });
    let html = render_element(rsx! {
        MarkdownView { document: vec![Node::Hr], rules }
    });

    assert!(html.contains("* * *"));
}

#[test]
fn test_element_view_renders_engine_tree() {
    let element = MarkdownRenderer::new()
        .render(&[Node::heading(2, "Title")])
        .unwrap();

    let html = render_element(rsx! {
        UiElementView { element }
    });

    assert!(html.contains("Title"));
    assert!(html.contains("font-size: 24px"));
}

#[test]
fn test_heading_css() {
    let element = MarkdownRenderer::new()
        .render(&[Node::heading(1, "Title")])
        .unwrap();
    let heading = element.as_view().unwrap().children[0].as_text().unwrap();

    insta::assert_snapshot!(
        style_to_css(&heading.style),
        @"font-family: Merriweather-Bold; font-size: 32px; margin-top: 8px; margin-bottom: 4px"
    );
}

#[test]
fn test_table_cell_css_follows_composition_order() {
    let element = MarkdownRenderer::new()
        .render(&[Node::Table(TableNode {
            header: vec!["h".into()],
            cells: vec![vec!["b".into()]],
            align: None,
        })])
        .unwrap();
    let table = element.as_view().unwrap().children[0].as_table().unwrap();

    insta::assert_snapshot!(
        compose_css(&table.rows[0].cells[0].style),
        @"background-color: #eeeeee"
    );
    insta::assert_snapshot!(compose_css(&table.rows[1].cells[0].text_style), @"padding: 4px");
}
