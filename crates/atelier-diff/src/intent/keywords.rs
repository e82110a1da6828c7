//! Declarative focus-area keyword table.
//!
//! One row per focus area, scanned once per property change. Row order is
//! the tie-break order. Single-letter keywords (`x`, `y`, `z`) match whole
//! path segments only, so `text` never counts as a layout hit.

use atelier_core::models::intent::FocusArea;

/// Substrings that attribute a property change to a focus area.
pub const FOCUS_KEYWORDS: &[(FocusArea, &[&str])] = &[
    (FocusArea::Spacing, &["spacing", "padding", "margin", "gap"]),
    (
        FocusArea::Typography,
        &["font", "text", "typography", "size", "weight", "lineheight"],
    ),
    (FocusArea::Color, &["color", "fill", "stroke", "rgb", "hex"]),
    (
        FocusArea::Layout,
        &["layout", "position", "align", "x", "y", "width", "height"],
    ),
    (FocusArea::Hierarchy, &["z", "order", "layer"]),
    (FocusArea::Interaction, &["interaction", "hover", "pressed"]),
];

/// Whether `haystack` (a lowercased path or property name) hits `keyword`.
pub fn matches(haystack: &str, keyword: &str) -> bool {
    if keyword.len() > 1 {
        return haystack.contains(keyword);
    }
    haystack.split('.').any(|segment| segment == keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_keywords_need_a_full_segment() {
        assert!(matches("properties.x", "x"));
        assert!(!matches("properties.text", "x"));
        assert!(!matches("properties.hex", "x"));
    }

    #[test]
    fn longer_keywords_match_as_substrings() {
        assert!(matches("properties.spacing.padding", "padding"));
        assert!(matches("properties.lineheight", "lineheight"));
    }
}
