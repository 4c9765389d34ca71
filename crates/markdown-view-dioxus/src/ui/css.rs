//! Engine style objects to inline CSS declarations.

use markdown_view_engine::{Style, StyleProp, StyleValue};

/// Numeric properties that CSS takes without a unit.
const UNITLESS: &[&str] = &["fontWeight", "flex", "opacity", "zIndex"];

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn css_value(prop: &StyleProp, value: &StyleValue) -> Option<String> {
    match value {
        StyleValue::Null => None,
        StyleValue::Number(n) if UNITLESS.contains(&prop.as_str()) => Some(n.to_string()),
        StyleValue::Number(n) => Some(format!("{n}px")),
        StyleValue::Text(text) if *prop == StyleProp::FontFamily && text.contains(' ') => {
            Some(format!("\"{text}\""))
        }
        StyleValue::Text(text) => Some(text.clone()),
        StyleValue::Bool(b) => Some(b.to_string()),
    }
}

/// One style object as a `style` attribute value.
///
/// Cleared properties are dropped. Border widths get a solid border style
/// since the host draws none otherwise.
pub fn style_to_css(style: &Style) -> String {
    let mut declarations: Vec<String> = style
        .iter()
        .filter_map(|(prop, value)| {
            css_value(prop, value).map(|value| format!("{}: {value}", kebab_case(prop.as_str())))
        })
        .collect();

    let bordered = [StyleProp::BorderWidth, StyleProp::BorderLeftWidth]
        .iter()
        .any(|prop| style.number(prop).is_some_and(|width| width > 0.0));
    if bordered {
        declarations.push("border-style: solid".to_string());
    }

    declarations.join("; ")
}

/// A composed style list, later entries winning.
pub fn compose_css(styles: &[Style]) -> String {
    style_to_css(&Style::flatten(styles.iter().map(Some)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("textDecorationLine"), "text-decoration-line");
        assert_eq!(kebab_case("color"), "color");
    }

    #[test]
    fn test_numbers_get_pixels_except_unitless() {
        let style = Style::new()
            .with(StyleProp::FontSize, 16)
            .with(StyleProp::Custom("opacity".into()), 0.5)
            .with(StyleProp::FontWeight, 700);

        assert_eq!(
            style_to_css(&style),
            "font-weight: 700; font-size: 16px; opacity: 0.5"
        );
    }

    #[test]
    fn test_null_values_are_dropped() {
        let style = Style::new()
            .with(StyleProp::Color, StyleValue::Null)
            .with(StyleProp::MarginTop, 4);

        assert_eq!(style_to_css(&style), "margin-top: 4px");
    }

    #[test]
    fn test_composed_styles_merge_last_wins() {
        let styles = [
            Style::new()
                .with(StyleProp::Color, "red")
                .with(StyleProp::Padding, 2),
            Style::new().with(StyleProp::Color, "blue"),
        ];

        assert_eq!(compose_css(&styles), "color: blue; padding: 2px");
    }

    #[test]
    fn test_border_width_implies_solid_border() {
        let style = Style::new()
            .with(StyleProp::BorderLeftWidth, 4)
            .with(StyleProp::BorderLeftColor, "#ccc");

        assert_eq!(
            style_to_css(&style),
            "border-left-width: 4px; border-left-color: #ccc; border-style: solid"
        );
    }

    #[test]
    fn test_family_with_spaces_is_quoted() {
        let style = Style::new().with(StyleProp::FontFamily, "Open Sans-Bold");

        assert_eq!(style_to_css(&style), "font-family: \"Open Sans-Bold\"");
    }
}
