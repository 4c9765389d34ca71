use super::{FontError, FontTable};

/// Names the concrete font asset for a family, weight and style.
///
/// Missing weight or style fall back to the family's `normal` entries.
/// Italic at normal weight drops the weight token (`Family-Italic`);
/// every other combination is `Family-<weight><style>`.
pub fn synthesize(
    fonts: &FontTable,
    family: Option<&str>,
    weight: Option<&str>,
    style: Option<&str>,
) -> Result<String, FontError> {
    let family_name = family.ok_or(FontError::UnsupportedFamily { family: None })?;
    let font = fonts
        .get(family_name)
        .ok_or_else(|| FontError::UnsupportedFamily {
            family: Some(family_name.to_string()),
        })?;

    let weight_key = weight.unwrap_or("normal");
    let weight_suffix = font
        .weight(weight_key)
        .ok_or_else(|| FontError::UnsupportedWeight {
            family: family_name.to_string(),
            weight: weight_key.to_string(),
        })?;

    let style_key = style.unwrap_or("normal");
    let style_suffix = font
        .font_styles
        .get(style_key)
        .ok_or_else(|| FontError::UnsupportedStyle {
            family: family_name.to_string(),
            style: style_key.to_string(),
        })?;

    if style_suffix == font.font_styles.italic && Some(weight_suffix) == font.weight("normal") {
        return Ok(format!("{family_name}-{style_suffix}"));
    }

    Ok(format!("{family_name}-{weight_suffix}{style_suffix}"))
}
