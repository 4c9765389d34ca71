// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#![allow(dead_code)]

use markdown_view_engine::ast::{InlineContent, ListNode, Node, TableNode};

pub fn generate_document(sections: usize) -> Vec<Node> {
    let mut document = Vec::new();

    for section in 0..sections {
        document.push(Node::heading(2, format!("Section {section}")));
        document.push(Node::paragraph(vec![
            Node::text("Paragraph with "),
            Node::strong(vec![Node::text("bold "), Node::em("and italic")]),
            Node::text(" content and a "),
            Node::link("https://example.com", "link"),
            Node::text("."),
        ]));
        document.push(Node::List(ListNode {
            ordered: section % 2 == 0,
            start: 1,
            items: (0..3)
                .map(|i| InlineContent::nodes([Node::text(format!("Item {i}"))]))
                .collect(),
        }));
        if section % 3 == 0 {
            document.push(Node::Table(TableNode {
                header: vec!["Name".into(), "Value".into()],
                cells: (0..4)
                    .map(|i| vec![format!("row {i}").into(), i.to_string().into()])
                    .collect(),
                align: None,
            }));
        }
    }

    document
}
