pub mod ast;
pub mod element;
pub mod error;
pub mod fonts;
pub mod render;
pub mod rules;
pub mod style;
pub mod view;

// Re-export key types for easier usage
pub use ast::{InlineContent, Node, NodeKind};
pub use element::{TextChild, TextElement, UiElement};
pub use error::RenderError;
pub use fonts::{FontContext, FontError, FontTable, Fragment, markdown_text, synthesize};
pub use rules::{OnLinkPress, Output, RenderState, Rules};
pub use style::{Style, StyleProp, StyleSlot, StyleValue, Styles};
pub use view::MarkdownRenderer;
