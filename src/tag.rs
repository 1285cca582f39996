/// Tag names recognized as style/formatting markup. Anything else falls
/// through to the "looks like a tag" heuristic in [`Tag::class`].
pub const KNOWN_TAGS: &[&str] = &[
    "b",
    "i",
    "size",
    "color",
    "ruby",
    "em",
    "sup",
    "sub",
    "dash",
    "space",
    "group",
    "u",
    "strike",
    "param",
    "format",
    "emoji",
    "speed",
    "sound",
    "line-height",
];

/// Subset of [`KNOWN_TAGS`] that is dropped from the template entirely. The
/// tag still segments the surrounding text.
pub const IGNORED_TAGS: &[&str] = &["ruby", "group"];

/// Classification outcome for a detected `<...>` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    /// Recognized markup, re-emitted verbatim into the template.
    Keep,
    /// Recognized markup whose raw text is dropped from the template.
    Ignore,
    /// Not markup at all; the span is folded back into the surrounding prose.
    Unknown,
}

/// A detected span broken into its parts. `name` is the bracket-inner text up
/// to the first `=` or space, with a leading `/` stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub raw: &'a str,
    pub name: &'a str,
    pub is_end: bool,
}

impl<'a> Tag<'a> {
    /// Splits a raw span (angle brackets included) into its descriptor.
    pub fn parse(raw: &'a str) -> Tag<'a> {
        let inner = &raw[1..raw.len() - 1];
        let (inner, is_end) = match inner.strip_prefix('/') {
            Some(rest) => (rest, true),
            None => (inner, false),
        };
        let name = match inner.find(['=', ' ']) {
            Some(idx) => &inner[..idx],
            None => inner,
        };
        Tag { raw, name, is_end }
    }

    /// Classifies the tag by name. End tags classify identically to their
    /// start tags; no pairing is validated.
    pub fn class(&self) -> TagClass {
        if IGNORED_TAGS.contains(&self.name) {
            return TagClass::Ignore;
        }
        if KNOWN_TAGS.contains(&self.name) || looks_like_tag(self.name) {
            return TagClass::Keep;
        }
        TagClass::Unknown
    }
}

/// Fallback for names outside the allow-list. Markup vocabularies vary across
/// host applications, so a token of ASCII letters/`-`/`_` (or a `#rrggbb`
/// color shorthand) is still treated as a tag, while anything else (`<3`,
/// `a < b`) is prose. An empty name passes vacuously, so `<>` stays a tag.
fn looks_like_tag(name: &str) -> bool {
    name.starts_with('#')
        || name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(raw: &str) -> TagClass {
        Tag::parse(raw).class()
    }

    #[test]
    fn known_tags_keep() {
        assert_eq!(class_of("<b>"), TagClass::Keep);
        assert_eq!(class_of("<color=red>"), TagClass::Keep);
        assert_eq!(class_of("<size=14>"), TagClass::Keep);
        assert_eq!(class_of("<line-height=120%>"), TagClass::Keep);
    }

    #[test]
    fn end_tag_classifies_like_start_tag() {
        assert_eq!(class_of("</b>"), TagClass::Keep);
        assert_eq!(class_of("</ruby>"), TagClass::Ignore);

        let tag = Tag::parse("</color>");
        assert!(tag.is_end);
        assert_eq!(tag.name, "color");
    }

    #[test]
    fn ignored_tags() {
        assert_eq!(class_of("<ruby>"), TagClass::Ignore);
        assert_eq!(class_of("<group>"), TagClass::Ignore);
        assert_eq!(class_of("<ruby=かな>"), TagClass::Ignore);
    }

    #[test]
    fn name_stops_at_attribute_separator() {
        assert_eq!(Tag::parse("<color=#ff0000>").name, "color");
        assert_eq!(Tag::parse("<sound clipName=x>").name, "sound");
        assert_eq!(Tag::parse("</size=20>").name, "size");
    }

    #[test]
    fn plausible_unlisted_names_keep() {
        assert_eq!(class_of("<voffset>"), TagClass::Keep);
        assert_eq!(class_of("<no-break>"), TagClass::Keep);
        assert_eq!(class_of("<my_tag=1>"), TagClass::Keep);
    }

    #[test]
    fn hex_color_shorthand_keeps() {
        assert_eq!(class_of("<#ff0000>"), TagClass::Keep);
        assert_eq!(class_of("</#ff0000>"), TagClass::Keep);
    }

    #[test]
    fn non_tag_content_is_unknown() {
        assert_eq!(class_of("<3>"), TagClass::Unknown);
        assert_eq!(class_of("<3 you>"), TagClass::Unknown);
        assert_eq!(class_of("<o_o;>"), TagClass::Unknown);
        assert_eq!(class_of("<1+2>"), TagClass::Unknown);
    }

    #[test]
    fn empty_name_is_still_a_tag() {
        assert_eq!(class_of("<>"), TagClass::Keep);
        assert_eq!(class_of("</>"), TagClass::Keep);
    }
}
