use std::fmt;
use std::rc::Rc;

use crate::fonts::FontContext;

/// Callback invoked with a link target when a rendered link is pressed.
#[derive(Clone)]
pub struct OnLinkPress(Rc<dyn Fn(&str)>);

impl OnLinkPress {
    pub fn new(callback: impl Fn(&str) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn call(&self, url: &str) {
        (self.0)(url)
    }
}

impl fmt::Debug for OnLinkPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnLinkPress(..)")
    }
}

impl PartialEq for OnLinkPress {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Per-call state threaded through the recursive render.
///
/// `key` identifies an element among its siblings for host reconciliation;
/// it is only meaningful within one pass. `font` is the ambient font
/// context, replaced only where a text container introduces new font
/// styling.
#[derive(Debug, Clone)]
pub struct RenderState<'a> {
    pub key: String,
    pub on_link_press: Option<OnLinkPress>,
    pub font: FontContext<'a>,
}

impl<'a> RenderState<'a> {
    pub fn new(font: FontContext<'a>) -> Self {
        Self {
            key: "0".to_string(),
            on_link_press: None,
            font,
        }
    }

    pub fn with_on_link_press(mut self, on_link_press: Option<OnLinkPress>) -> Self {
        self.on_link_press = on_link_press;
        self
    }

    /// A copy of this state for the sibling identified by `key`.
    pub fn with_key(&self, key: impl ToString) -> Self {
        Self {
            key: key.to_string(),
            ..self.clone()
        }
    }

    /// A copy of this state carrying a replaced font context.
    pub fn with_font(&self, font: FontContext<'a>) -> Self {
        Self {
            font,
            ..self.clone()
        }
    }
}
