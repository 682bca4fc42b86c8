//! Small helpers shared across the crate.
//!
//! Line bookkeeping uses `memchr` so that mapping byte offsets to line
//! numbers stays cheap on large files.

/// Count the `\n` bytes in `bytes`.
pub(crate) fn count_newlines(bytes: &[u8]) -> u32 {
    memchr::memchr_iter(b'\n', bytes).count() as u32
}

/// Convert a byte offset in `content` to a 1-based line number.
///
/// Offsets past the end of `content` map to the last line.
pub(crate) fn offset_to_line(content: &str, offset: usize) -> u32 {
    let end = offset.min(content.len());
    1 + count_newlines(&content.as_bytes()[..end])
}

/// Extract the short (unqualified) name from a potentially namespace-qualified name.
///
/// For example, `"Foo\\Bar\\Baz"` → `"Baz"`, `"Baz"` → `"Baz"`.
pub(crate) fn short_name(name: &str) -> &str {
    name.rsplit('\\').next().unwrap_or(name)
}

/// Normalise a class name to the canonical `\A\B` form.
pub fn normalize_fqsen(name: &str) -> String {
    format!("\\{}", name.trim_start_matches('\\'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_to_line_counts_from_one() {
        let content = "<?php\n// a\n/** b */\n";
        assert_eq!(offset_to_line(content, 0), 1);
        assert_eq!(offset_to_line(content, 6), 2);
        assert_eq!(offset_to_line(content, 11), 3);
        assert_eq!(offset_to_line(content, 10_000), 4);
    }

    #[test]
    fn short_name_takes_last_segment() {
        assert_eq!(short_name("Foo\\Bar\\Baz"), "Baz");
        assert_eq!(short_name("Baz"), "Baz");
    }

    #[test]
    fn normalize_fqsen_adds_single_leading_separator() {
        assert_eq!(normalize_fqsen("App\\User"), "\\App\\User");
        assert_eq!(normalize_fqsen("\\App\\User"), "\\App\\User");
    }
}
