//! Rule registry and the recursive dispatcher.
//!
//! A rule is a function from a node to a UI element. Rules render their
//! children only through [`Output`], which looks the child's kind up in the
//! same registry and hands it the same style table.

mod state;

pub use state::{OnLinkPress, RenderState};

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::{InlineContent, Node, NodeKind};
use crate::element::UiElement;
use crate::error::RenderError;
use crate::render;
use crate::style::Styles;

/// Signature shared by built-in and caller-supplied rules.
pub type RenderFn =
    Rc<dyn Fn(&Node, &Output<'_>, &RenderState<'_>, &Styles) -> Result<UiElement, RenderError>>;

/// Mapping from node kind to render function.
///
/// `Rules::default()` holds every built-in renderer. Callers may replace
/// single entries, add kinds of their own, or start from
/// [`Rules::empty`] and supply the whole registry.
#[derive(Clone)]
pub struct Rules {
    rules: HashMap<NodeKind, RenderFn>,
}

impl Rules {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    pub fn insert<F>(&mut self, kind: NodeKind, render: F) -> &mut Self
    where
        F: Fn(&Node, &Output<'_>, &RenderState<'_>, &Styles) -> Result<UiElement, RenderError>
            + 'static,
    {
        self.rules.insert(kind, Rc::new(render));
        self
    }

    pub fn with<F>(mut self, kind: NodeKind, render: F) -> Self
    where
        F: Fn(&Node, &Output<'_>, &RenderState<'_>, &Styles) -> Result<UiElement, RenderError>
            + 'static,
    {
        self.insert(kind, render);
        self
    }

    pub fn remove(&mut self, kind: &NodeKind) -> Option<RenderFn> {
        self.rules.remove(kind)
    }

    /// Layers `overrides` on top of `self`; entries in `overrides` win.
    pub fn extend(&mut self, overrides: &Rules) {
        for (kind, render) in &overrides.rules {
            self.rules.insert(kind.clone(), Rc::clone(render));
        }
    }

    pub fn get(&self, kind: &NodeKind) -> Option<&RenderFn> {
        self.rules.get(kind)
    }

    pub fn contains(&self, kind: &NodeKind) -> bool {
        self.rules.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Renders `node` with this registry and `styles`.
    pub fn render(
        &self,
        node: &Node,
        state: &RenderState<'_>,
        styles: &Styles,
    ) -> Result<UiElement, RenderError> {
        Output::new(self, styles).render(node, state)
    }
}

impl Default for Rules {
    fn default() -> Self {
        let mut rules = Rules::empty();
        render::register_builtin(&mut rules);
        rules
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.rules.keys().collect();
        kinds.sort();
        f.debug_struct("Rules").field("kinds", &kinds).finish()
    }
}

impl PartialEq for Rules {
    fn eq(&self, other: &Self) -> bool {
        self.rules.len() == other.rules.len()
            && self.rules.iter().all(|(kind, render)| {
                other
                    .rules
                    .get(kind)
                    .is_some_and(|theirs| Rc::ptr_eq(render, theirs))
            })
    }
}

/// The recursive entry point handed to every rule.
#[derive(Clone, Copy)]
pub struct Output<'a> {
    rules: &'a Rules,
    styles: &'a Styles,
}

impl<'a> Output<'a> {
    pub fn new(rules: &'a Rules, styles: &'a Styles) -> Self {
        Self { rules, styles }
    }

    pub fn styles(&self) -> &'a Styles {
        self.styles
    }

    /// Looks up the rule for `node`'s kind and invokes it.
    pub fn render(&self, node: &Node, state: &RenderState<'_>) -> Result<UiElement, RenderError> {
        let kind = node.kind();
        let rule = self
            .rules
            .get(&kind)
            .ok_or_else(|| RenderError::UnknownNodeKind(kind.clone()))?;
        log::trace!("rendering {kind} with key {}", state.key);
        rule(node, self, state, self.styles)
    }

    /// Renders siblings, keyed by their index.
    pub fn render_all(
        &self,
        nodes: &[Node],
        state: &RenderState<'_>,
    ) -> Result<Vec<UiElement>, RenderError> {
        nodes
            .iter()
            .enumerate()
            .map(|(i, node)| self.render(node, &state.with_key(i)))
            .collect()
    }

    /// Renders inline content. Raw text goes through the `text` rule.
    pub fn render_content(
        &self,
        content: &InlineContent,
        state: &RenderState<'_>,
    ) -> Result<Vec<UiElement>, RenderError> {
        match content {
            InlineContent::Text(text) => Ok(vec![self.render(&Node::text(text.as_str()), state)?]),
            InlineContent::Node(node) => Ok(vec![self.render(node, state)?]),
            InlineContent::Nodes(nodes) => self.render_all(nodes, state),
        }
    }
}

impl fmt::Debug for Output<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("rules", self.rules)
            .field("styles", self.styles)
            .finish()
    }
}
