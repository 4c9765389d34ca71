use dioxus::prelude::*;
use markdown_view_config::ViewConfig;
use markdown_view_dioxus::MarkdownView;
use markdown_view_engine::ast::{InlineContent, ListNode, Node, TableNode, TextNode};
use std::process;
use std::sync::OnceLock;

static CONFIG: OnceLock<ViewConfig> = OnceLock::new();

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("markdown-view starting up!");

    let config_path = ViewConfig::config_path();
    log::info!("Config path: {}", config_path.display());

    let config = match ViewConfig::load() {
        Ok(Some(config)) => {
            log::info!("Loaded view config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::info!("No config file found, using defaults");
            ViewConfig::default()
        }
        Err(e) => {
            log::error!("ViewConfig::load() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    // main runs once, so the cell is always empty here
    let _ = CONFIG.set(config);

    dioxus::LaunchBuilder::desktop().launch(app_root);
}

fn app_root() -> Element {
    let config = CONFIG.get_or_init(ViewConfig::default).clone();
    let mut last_link = use_signal(|| None::<String>);

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 24px;",
            MarkdownView {
                document: demo_document(),
                styles: config.styles,
                fonts: config.fonts,
                text_style: config.text_style,
                on_link_press: move |url: String| {
                    log::info!("Link pressed: {url}");
                    last_link.set(Some(url));
                },
            }
            if let Some(url) = last_link() {
                p { style: "color: #888;", "Last link pressed: {url}" }
            }
        }
    }
}

fn demo_document() -> Vec<Node> {
    vec![
        Node::heading(1, "markdown-view"),
        Node::paragraph(vec![
            Node::text("Renders a parsed markdown tree with "),
            Node::strong(vec![Node::text("bold, "), Node::em("bold italic")]),
            Node::text(" and "),
            Node::em("italic"),
            Node::text(" runs, each resolved to a concrete font."),
        ]),
        Node::paragraph(vec![
            Node::text("Links call back into the host: "),
            Node::link("https://example.com", "example.com"),
            Node::text("."),
        ]),
        Node::List(ListNode {
            ordered: true,
            start: 3,
            items: vec![
                InlineContent::text("starts at three"),
                InlineContent::nodes([Node::text("with "), Node::strong("styled")]),
            ],
        }),
        Node::List(ListNode {
            ordered: false,
            start: 1,
            items: vec![InlineContent::text("bullets"), InlineContent::text("too")],
        }),
        Node::Hr,
        Node::Table(TableNode {
            header: vec!["Slot".into(), "Applies to".into()],
            cells: vec![
                vec!["tableHeaderCell".into(), "row 1".into()],
                vec!["tableCellLastRow".into(), "the final row".into()],
            ],
            align: None,
        }),
        Node::InlineCode(TextNode {
            content: "let font = synthesize(...);".to_string(),
        }),
    ]
}
