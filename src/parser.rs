use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Config;
use crate::scanner::{TagSpan, find_tag_spans};
use crate::tag::{Tag, TagClass};

/// Templates this short are degenerate unless an ignored tag justified the
/// parse; a lone placeholder key is exactly 5 bytes.
const MIN_TEMPLATE_LEN: usize = 5;

/// Per-element capability predicate. A host passes its UI handle through this
/// so markup handling can be skipped for widgets that render tags literally.
pub trait RichTextCapable {
    fn supports_rich_text(&self) -> bool;
}

/// Whether markup-aware parsing applies to `ui` at all. When this returns
/// false the caller should fall back to plain-text handling.
pub fn can_apply(config: &Config, ui: &impl RichTextCapable) -> bool {
    config.handle_rich_text && ui.supports_rich_text()
}

/// Like [`parse`], but gated on the originating UI element: returns `None`
/// without scanning when `ui` renders tags literally.
pub fn parse_for(input: &str, config: &Config, ui: &impl RichTextCapable) -> Option<ParserResult> {
    if !can_apply(config, ui) {
        return None;
    }
    parse(input, config)
}

/// Identifies which parser produced a [`ParserResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParserOrigin {
    RichText,
}

/// An accepted parse: the markup-preserving template plus the map from each
/// placeholder key to the plain-text fragment it stands for. Created fresh
/// per call and never mutated after being returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParserResult {
    pub origin: ParserOrigin,
    pub original: String,
    pub template: String,
    /// Whether the substituted fragments may be translated again.
    pub retranslatable: bool,
    /// Fragment whitespace must be reinserted verbatim.
    pub preserve_whitespace: bool,
    /// Safe to persist/cache keyed on the original input.
    pub cacheable: bool,
    /// Whether fragments may be reordered during substitution.
    pub reorderable: bool,
    pub args: BTreeMap<String, String>,
}

/// Parses `input` into a translation template, or `None` when rich-text
/// handling is disabled or the result is not worth templating.
///
/// One left-to-right pass over the detected spans: prose between known tags
/// becomes a placeholder, kept tags are re-emitted verbatim, ignored tags are
/// dropped, and unknown spans are folded back into the surrounding prose.
pub fn parse(input: &str, config: &Config) -> Option<ParserResult> {
    if !config.handle_rich_text {
        return None;
    }

    let spans = find_tag_spans(input);
    let state = TemplateBuilder::new(input).build(&spans);
    let TemplateBuilder {
        mut template,
        mut args,
        next_id,
        saw_ignored_tag,
        ..
    } = state;

    merge_adjacent(&mut template, &mut args);

    if !accept(&template, saw_ignored_tag, next_id) {
        log::debug!("Rejecting parse of {input:?} (template {template:?})");
        return None;
    }

    Some(ParserResult {
        origin: ParserOrigin::RichText,
        original: input.to_string(),
        template,
        retranslatable: false,
        preserve_whitespace: true,
        cacheable: true,
        reorderable: false,
        args,
    })
}

struct TemplateBuilder<'a> {
    input: &'a str,
    /// End of the previously consumed region.
    offset: usize,
    /// Prose plus unknown-span raw text, carried until the next known tag.
    accumulation: String,
    template: String,
    args: BTreeMap<String, String>,
    next_id: u32,
    saw_ignored_tag: bool,
}

impl<'a> TemplateBuilder<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            accumulation: String::new(),
            template: String::with_capacity(input.len()),
            args: BTreeMap::new(),
            next_id: 0,
            saw_ignored_tag: false,
        }
    }

    fn build(mut self, spans: &[TagSpan<'a>]) -> Self {
        for span in spans {
            let tag = Tag::parse(span.raw);
            let text = &self.input[self.offset..span.start];
            self.offset = span.end;

            match tag.class() {
                TagClass::Unknown => {
                    // Might just be prose with an angle bracket in it. Defer
                    // the decision to the next known boundary.
                    self.accumulation.push_str(text);
                    self.accumulation.push_str(span.raw);
                }
                class => {
                    let full_text = std::mem::take(&mut self.accumulation) + text;
                    if !full_text.is_empty() {
                        self.push_placeholder(full_text);
                    }
                    if class == TagClass::Ignore {
                        log::trace!("Dropping ignored tag {:?}", span.raw);
                        self.saw_ignored_tag = true;
                    } else {
                        self.template.push_str(span.raw);
                    }
                }
            }
        }

        // Trailing prose is always translatable, tags or no tags.
        if self.offset < self.input.len() {
            let rest = self.input[self.offset..].to_string();
            self.push_placeholder(rest);
        }

        self
    }

    fn push_placeholder(&mut self, text: String) {
        let key = placeholder_key(self.next_id);
        self.next_id += 1;
        log::trace!("Placeholder {key} = {text:?}");
        self.template.push_str(&key);
        self.args.insert(key, text);
    }
}

/// Keys run `[[A]]`..`[[Z]]`, then continue `[[A1]]`..`[[Z1]]`, `[[A2]]`..
/// rather than wrapping past `Z` into punctuation.
fn placeholder_key(id: u32) -> String {
    let letter = (b'A' + (id % 26) as u8) as char;
    match id / 26 {
        0 => format!("[[{letter}]]"),
        round => format!("[[{letter}{round}]]"),
    }
}

/// Coalesces placeholder keys left textually adjacent after tag removal, so
/// the translator never sees a sentence split across fragments. A chain of
/// adjacent keys collapses into the leftmost one.
fn merge_adjacent(template: &mut String, args: &mut BTreeMap<String, String>) {
    let mut search_from = 0;
    while let Some(found) = template[search_from..].find("]][[") {
        let idx = search_from + found;
        if merge_pair_at(template, args, idx) {
            // A merge can create a fresh adjacency anywhere; rescan.
            search_from = 0;
        } else {
            // `]][[` inside a kept tag's raw text, not a key boundary.
            search_from = idx + 1;
        }
    }
}

fn merge_pair_at(template: &mut String, args: &mut BTreeMap<String, String>, idx: usize) -> bool {
    let Some(left_start) = template[..idx + 2].rfind("[[") else {
        return false;
    };
    let Some(right_len) = template[idx + 2..].find("]]") else {
        return false;
    };
    let right_end = idx + 2 + right_len + 2;

    let left_key = template[left_start..idx + 2].to_string();
    let right_key = template[idx + 2..right_end].to_string();
    if !(args.contains_key(&left_key) && args.contains_key(&right_key)) {
        return false;
    }

    let mut merged = args.remove(&left_key).unwrap_or_default();
    merged.push_str(&args.remove(&right_key).unwrap_or_default());
    args.insert(left_key.clone(), merged);
    template.replace_range(left_start..right_end, &left_key);

    log::trace!("Merged {right_key} into {left_key}");
    true
}

/// A parse is worth using when an ignored tag was dropped (the template is
/// lossy, so the caller cannot reuse a cached translation of the raw input)
/// or when the scan produced real segmentation.
fn accept(template: &str, saw_ignored_tag: bool, placeholders: u32) -> bool {
    saw_ignored_tag || (placeholders > 0 && template.len() > MIN_TEMPLATE_LEN)
}
