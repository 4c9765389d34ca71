use dioxus::prelude::*;

/// Shown in place of a document whose render pass failed.
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "render-error",
            style: "display: flex; flex-direction: column; padding: 16px; border: 1px solid #dc322f;",
            h2 {
                style: "color: #dc322f; margin: 0 0 8px 0;",
                "{title}"
            }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre {
                    style: "white-space: pre-wrap; word-break: break-word;",
                    "{detail_text}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_error_screen_renders_title_and_message() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Unable to render document".to_string(),
                message: "Font 'Menlo' is not supported.".to_string(),
                details: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Unable to render document"));
        assert!(html.contains("is not supported."));
        assert!(!html.contains("<pre"));
    }

    #[test]
    fn test_error_screen_renders_with_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Unable to render document".to_string(),
                message: "No render rule is registered for node kind 'hr'".to_string(),
                details: Some("UnknownNodeKind(Hr)".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("node kind 'hr'"));
        assert!(html.contains("<pre"));
        assert!(html.contains("UnknownNodeKind(Hr)"));
    }
}
