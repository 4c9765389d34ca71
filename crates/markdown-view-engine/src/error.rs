use crate::ast::NodeKind;
use crate::fonts::FontError;

/// Failure of a render pass. Any error abandons the whole pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("No render rule is registered for node kind '{0}'")]
    UnknownNodeKind(NodeKind),
    #[error(transparent)]
    Font(#[from] FontError),
}
