use std::sync::LazyLock;

use regex::Regex;

/// Shortest-match tag detection: a span ends at the first `>` after its `<`.
/// `.` does not cross newlines, so an unclosed `<` on one line cannot swallow
/// a tag on the next.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new("<.*?>").expect("TAG_PATTERN"));

/// A detected `<...>` occurrence. Offsets are byte positions into the input;
/// `raw` includes the angle brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan<'a> {
    pub start: usize,
    pub end: usize,
    pub raw: &'a str,
}

/// Finds all markup spans in `input`, non-overlapping and in ascending
/// offset order. No nesting awareness and no well-formedness checks; pairing
/// start and end tags is left to the caller.
pub fn find_tag_spans(input: &str) -> Vec<TagSpan<'_>> {
    let spans: Vec<TagSpan> = TAG_PATTERN
        .find_iter(input)
        .map(|m| TagSpan {
            start: m.start(),
            end: m.end(),
            raw: m.as_str(),
        })
        .collect();

    for (i, span) in spans.iter().enumerate() {
        log::trace!("Span {}: {:?} at {}..{}", i, span.raw, span.start, span.end);
    }
    log::debug!("Scan complete. {} spans detected.", spans.len());

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raws(input: &str) -> Vec<&str> {
        find_tag_spans(input).iter().map(|s| s.raw).collect()
    }

    #[test]
    fn finds_simple_tag_pair() {
        let spans = find_tag_spans("Hello <b>world</b>!");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], TagSpan { start: 6, end: 9, raw: "<b>" });
        assert_eq!(spans[1], TagSpan { start: 14, end: 18, raw: "</b>" });
    }

    #[test]
    fn shortest_match_wins() {
        // The first `>` terminates the span even with a later one available.
        assert_eq!(raws("<a>b>"), vec!["<a>"]);
        assert_eq!(raws("<<b>"), vec!["<<b>"]);
    }

    #[test]
    fn adjacent_tags_do_not_overlap() {
        assert_eq!(raws("<b><i>"), vec!["<b>", "<i>"]);
    }

    #[test]
    fn unclosed_bracket_yields_no_span() {
        assert!(find_tag_spans("I <3 you").is_empty());
        assert!(find_tag_spans("a < b").is_empty());
    }

    #[test]
    fn unclosed_bracket_with_later_close_is_one_span() {
        // The detector has no vocabulary; "<3 you>" is a span here and gets
        // reclassified as prose downstream.
        assert_eq!(raws("I <3 you> dearly"), vec!["<3 you>"]);
    }

    #[test]
    fn span_does_not_cross_newline() {
        assert_eq!(raws("a <b\nc> <d>"), vec!["<d>"]);
    }

    #[test]
    fn no_markup_means_no_spans() {
        assert!(find_tag_spans("").is_empty());
        assert!(find_tag_spans("plain prose").is_empty());
    }

    #[test]
    fn span_at_string_boundaries() {
        let spans = find_tag_spans("<b>x</b>");
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[1].end, 8);
    }
}
