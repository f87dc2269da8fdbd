//! Shared helpers for block evaluation.

/// Generate the scoped class pair of one block instance.
///
/// Combines the variant's stylesheet class with a `block-{id}` instance
/// class so per-block style overrides can target exactly one rendering:
///
/// - `scope_class("qd-testimonials-3", 1566287400123)` →
///   `"qd-testimonials-3 block-1566287400123"`
/// - An unassigned instance (id 0) still renders: `"… block-0"`.
pub fn scope_class(variant_class: &str, instance_id: u64) -> String {
    format!("{} block-{}", variant_class, instance_id)
}

/// Strip markup tags from a rich-text value, leaving the inner text.
///
/// Rich-text fields may carry inline markup (`<em>`, `<strong>`, line
/// breaks); attribute contexts such as `alt` want only the words.
pub fn strip_tags(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_tag = false;
    for ch in value.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Join class fragments with single spaces, skipping empty ones.
///
/// Attribute-driven fragments (alignment, the auto-padding marker) are
/// often empty strings; they must not leave stray separators in the class
/// attribute.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_class_format() {
        assert_eq!(
            scope_class("qd-testimonials-2", 1566287400123),
            "qd-testimonials-2 block-1566287400123"
        );
        assert_eq!(scope_class("qd-testimonials-4", 0), "qd-testimonials-4 block-0");
    }

    #[test]
    fn test_strip_tags_removes_inline_markup() {
        assert_eq!(strip_tags("<em>Maria Jonson</em>, Student"), "Maria Jonson, Student");
        assert_eq!(strip_tags("plain text"), "plain text");
        assert_eq!(strip_tags("<strong>bold<br/>break</strong>"), "boldbreak");
    }

    #[test]
    fn test_strip_tags_handles_multiline_tags() {
        assert_eq!(strip_tags("a<span\nclass=\"x\">b</span>c"), "abc");
    }

    #[test]
    fn test_join_classes_skips_empty_fragments() {
        assert_eq!(
            join_classes(["qd-testimonials-3 block-7", "qd-lg", "", ""]),
            "qd-testimonials-3 block-7 qd-lg"
        );
        assert_eq!(join_classes(["", "fullwidth"]), "fullwidth");
        assert_eq!(join_classes(["", ""]), "");
    }
}
