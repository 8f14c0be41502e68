//! Separator splitting that honors protected spans.
//!
//! Table style parameters and other list-valued attributes are
//! comma-separated, but a value may itself contain commas when wrapped
//! in CDATA markers. The splitter treats marked spans as opaque and
//! strips the markers from the output.

pub const CDATA_OPEN: &str = "<![CDATA[";
pub const CDATA_CLOSE: &str = "]]>";

/// Splits `text` on `separator`, ignoring separators between `open`
/// and `close` markers. The markers themselves are removed. Empty
/// segments are preserved.
pub fn split_ignore(text: &str, separator: char, open: &str, close: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut rest = text;
    let mut protected = false;

    while !rest.is_empty() {
        if protected {
            if let Some(after) = rest.strip_prefix(close) {
                protected = false;
                rest = after;
                continue;
            }
        } else {
            if let Some(after) = rest.strip_prefix(open) {
                protected = true;
                rest = after;
                continue;
            }
            if let Some(after) = rest.strip_prefix(separator) {
                parts.push(std::mem::take(&mut current));
                rest = after;
                continue;
            }
        }
        match rest.chars().next() {
            Some(ch) => {
                current.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
            None => break,
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        split_ignore(text, ',', CDATA_OPEN, CDATA_CLOSE)
    }

    #[test]
    fn plain_split() {
        assert_eq!(split("a,b,c"), vec!["a", "b", "c"]);
        assert_eq!(split("abc"), vec!["abc"]);
    }

    #[test]
    fn empty_segments_are_preserved() {
        assert_eq!(split("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split(","), vec!["", ""]);
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn protected_separators_do_not_split() {
        assert_eq!(
            split("a,b,<![CDATA[c,d]]>,e"),
            vec!["a", "b", "c,d", "e"]
        );
    }

    #[test]
    fn markers_are_stripped_in_place() {
        assert_eq!(split("<![CDATA[x]]>"), vec!["x"]);
        assert_eq!(split("a,b<![CDATA[c,d]]>e"), vec!["a", "bc,de"]);
    }

    #[test]
    fn unclosed_marker_protects_to_the_end() {
        assert_eq!(split("a,<![CDATA[b,c"), vec!["a", "b,c"]);
    }
}
