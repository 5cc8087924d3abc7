//! Type-aware escaping for script-context embedding.
//!
//! Values end up inside `<script>` string literals in the interactive
//! report, so the meta-characters of that context (newline variants,
//! backslash, the quote family, `$`) must be neutralized before
//! embedding.

use logreport_core::Scalar;

/// Ordered replacement table for script-context escaping.
///
/// The order is part of the contract: the backslash entry must run
/// first so the backslashes introduced by later entries are not
/// escaped a second time, and `\r\n` must run before its single-byte
/// parts.
const SCRIPT_ESCAPES: &[(&str, &str)] = &[
    ("\\", "\\\\"),
    ("\r\n", "\\r\\n"),
    ("\n", "\\n"),
    ("\r", "\\r"),
    ("\"", " \\\""),
    ("'", " \\'"),
    ("`", " \\`"),
    ("$", " \\$"),
];

/// Escape a string for embedding into a script string literal.
///
/// Applied as a fixed sequence of literal substring replacements, not
/// a regex. Input containing none of the meta-characters is returned
/// unchanged.
pub fn escape_script(value: &str) -> String {
    let mut out = value.to_string();
    for (pattern, replacement) in SCRIPT_ESCAPES {
        out = out.replace(pattern, replacement);
    }
    out
}

/// Format a scalar for script embedding.
///
/// Numeric values pass through as their canonical textual form; text
/// is escaped; a missing value becomes the (escaped) empty string.
pub fn dispatch_value(value: &Scalar) -> String {
    match value {
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(x) => x.to_string(),
        Scalar::Str(s) => escape_script(s),
        Scalar::Null => escape_script(""),
    }
}

/// Derive a stable anchor identifier from a report title.
///
/// Lowercases, replaces spaces with hyphens, and prefixes `slug-`
/// when the result would start with a digit (a bare digit is not a
/// valid markup identifier). Two distinct titles can still collide;
/// report sets are expected to keep titles distinct.
pub fn slugify(title: &str) -> String {
    let slug = title.to_lowercase().replace(' ', "-");
    if slug.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("slug-{}", slug)
    } else {
        slug
    }
}
