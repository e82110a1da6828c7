//! Base keyword vocabulary for dimension classification.

use atelier_core::models::candidate::Dimension;

/// Seed keyword table mapping each dimension to its trigger terms.
/// The classifier extends this vocabulary at runtime via `learn_from_rules`.
pub const BASE_KEYWORDS: &[(Dimension, &[&str])] = &[
    (
        Dimension::Layout,
        &[
            "layout",
            "grid",
            "alignment",
            "position",
            "arrangement",
            "structure",
            "composition",
        ],
    ),
    (
        Dimension::Interaction,
        &[
            "interaction",
            "flow",
            "navigation",
            "click",
            "hover",
            "transition",
            "state",
            "behavior",
        ],
    ),
    (
        Dimension::Content,
        &["content", "text", "copy", "message", "information", "data", "label"],
    ),
    (
        Dimension::Hierarchy,
        &["hierarchy", "emphasis", "prominence", "importance", "level", "rank"],
    ),
    (
        Dimension::Spacing,
        &["spacing", "margin", "padding", "gap", "rhythm", "whitespace", "distance"],
    ),
    (
        Dimension::Typography,
        &["typography", "font", "type", "text style", "letter", "line height", "kerning"],
    ),
    (
        Dimension::Color,
        &["color", "palette", "hue", "saturation", "contrast", "tone", "shade"],
    ),
    (
        Dimension::VisualElements,
        &["shadow", "border", "radius", "gradient", "effect", "filter", "opacity"],
    ),
];

/// Words too common to carry dimension signal when learning from rule text.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "are", "was", "will", "should", "can",
    "has", "have", "not", "but", "all", "any", "its", "use", "using", "ensure", "make",
    "from", "into", "each", "more", "less", "than", "when", "where", "between", "across",
];
