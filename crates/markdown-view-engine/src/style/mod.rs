//! Style objects and the named style table.
//!
//! A [`Style`] is a partial set of properties. Merging is explicit: the
//! right-hand side wins for every property it mentions, including
//! properties it explicitly clears with [`StyleValue::Null`]. An omitted
//! property never overrides anything.

mod slots;

pub use slots::{StyleSlot, Styles};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

macro_rules! style_props {
    ($($variant:ident => $name:literal,)*) => {
        /// A style property name.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum StyleProp {
            $($variant,)*
            /// Any property the engine does not interpret itself.
            Custom(String),
        }

        impl StyleProp {
            pub fn as_str(&self) -> &str {
                match self {
                    $(StyleProp::$variant => $name,)*
                    StyleProp::Custom(name) => name,
                }
            }

            pub fn from_name(name: &str) -> Self {
                match name {
                    $($name => StyleProp::$variant,)*
                    other => StyleProp::Custom(other.to_string()),
                }
            }
        }
    };
}

style_props! {
    FontFamily => "fontFamily",
    FontWeight => "fontWeight",
    FontStyle => "fontStyle",
    FontSize => "fontSize",
    LineHeight => "lineHeight",
    Color => "color",
    BackgroundColor => "backgroundColor",
    TextAlign => "textAlign",
    TextDecorationLine => "textDecorationLine",
    Padding => "padding",
    PaddingLeft => "paddingLeft",
    PaddingRight => "paddingRight",
    PaddingTop => "paddingTop",
    PaddingBottom => "paddingBottom",
    Margin => "margin",
    MarginLeft => "marginLeft",
    MarginRight => "marginRight",
    MarginTop => "marginTop",
    MarginBottom => "marginBottom",
    Width => "width",
    Height => "height",
    MinWidth => "minWidth",
    FlexDirection => "flexDirection",
    BorderWidth => "borderWidth",
    BorderColor => "borderColor",
    BorderLeftWidth => "borderLeftWidth",
    BorderLeftColor => "borderLeftColor",
    BorderRadius => "borderRadius",
    Content => "content",
}

impl StyleProp {
    /// Properties that select a font and are consumed by font synthesis.
    pub const FONT: [StyleProp; 3] = [
        StyleProp::FontFamily,
        StyleProp::FontWeight,
        StyleProp::FontStyle,
    ];
}

impl From<String> for StyleProp {
    fn from(name: String) -> Self {
        StyleProp::from_name(&name)
    }
}

impl From<StyleProp> for String {
    fn from(prop: StyleProp) -> Self {
        prop.as_str().to_string()
    }
}

impl fmt::Display for StyleProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A style property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Bool(bool),
    Text(String),
    /// Explicitly cleared. Distinct from the property being absent.
    Null,
}

impl StyleValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The value as a lookup key, e.g. for font weight tables.
    ///
    /// Cleared and empty values count as "not supplied". Integral numbers
    /// use their decimal form so `700` finds the `"700"` entry.
    pub fn as_key(&self) -> Option<String> {
        match self {
            StyleValue::Null => None,
            StyleValue::Text(s) if s.is_empty() => None,
            StyleValue::Text(s) => Some(s.clone()),
            StyleValue::Number(n) if n.fract() == 0.0 => Some(format!("{}", *n as i64)),
            StyleValue::Number(n) => Some(n.to_string()),
            StyleValue::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Bool(b) => write!(f, "{b}"),
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Null => f.write_str("null"),
        }
    }
}

/// A partial style object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    props: BTreeMap<StyleProp, StyleValue>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, prop: StyleProp, value: impl Into<StyleValue>) -> Self {
        self.set(prop, value);
        self
    }

    pub fn set(&mut self, prop: StyleProp, value: impl Into<StyleValue>) -> &mut Self {
        self.props.insert(prop, value.into());
        self
    }

    pub fn remove(&mut self, prop: &StyleProp) -> Option<StyleValue> {
        self.props.remove(prop)
    }

    pub fn get(&self, prop: &StyleProp) -> Option<&StyleValue> {
        self.props.get(prop)
    }

    pub fn contains(&self, prop: &StyleProp) -> bool {
        self.props.contains_key(prop)
    }

    pub fn number(&self, prop: &StyleProp) -> Option<f64> {
        self.get(prop).and_then(StyleValue::as_number)
    }

    pub fn text(&self, prop: &StyleProp) -> Option<&str> {
        self.get(prop).and_then(StyleValue::as_text)
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleProp, &StyleValue)> {
        self.props.iter()
    }

    /// `self` overlaid with `other`; `other` wins on every property it sets.
    pub fn merged(&self, other: &Style) -> Style {
        let mut props = self.props.clone();
        props.extend(other.props.iter().map(|(k, v)| (k.clone(), v.clone())));
        Style { props }
    }

    /// Collapses a composed style list into one object, later entries
    /// winning. Missing entries contribute nothing.
    pub fn flatten<'a>(styles: impl IntoIterator<Item = Option<&'a Style>>) -> Style {
        styles
            .into_iter()
            .flatten()
            .fold(Style::new(), |acc, style| acc.merged(style))
    }

    /// Only the listed properties.
    pub fn pick(&self, props: &[StyleProp]) -> Style {
        Style {
            props: self
                .props
                .iter()
                .filter(|(k, _)| props.contains(k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Everything except the listed properties.
    pub fn without(&self, props: &[StyleProp]) -> Style {
        Style {
            props: self
                .props
                .iter()
                .filter(|(k, _)| !props.contains(k))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Drops cleared properties.
    pub fn without_nulls(&self) -> Style {
        Style {
            props: self
                .props
                .iter()
                .filter(|(_, v)| !matches!(v, StyleValue::Null))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

impl<P, V> FromIterator<(P, V)> for Style
where
    P: Into<StyleProp>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        Style {
            props: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
