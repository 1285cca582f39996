pub mod config;
pub mod parser;
pub mod restore;
pub mod scanner;
pub mod tag;

pub use parser::{ParserResult, RichTextCapable, can_apply, parse, parse_for};
pub use restore::restore;

/// Extracts a translation template from a marked-up string with the default
/// configuration.
///
/// Prose between recognized tags is replaced by `[[A]]`-style placeholder
/// keys; the returned result maps each key back to its fragment so a
/// translator only ever sees plain text. Returns `None` when the input is not
/// worth templating (plain prose, or no meaningful segmentation).
///
/// # Examples
///
/// ```rust
/// let result = richtmpl::extract("Hello <b>world</b>!").unwrap();
///
/// assert_eq!(result.template, "[[A]]<b>[[B]]</b>[[C]]");
/// assert_eq!(result.args["[[B]]"], "world");
/// ```
pub fn extract(input: &str) -> Option<ParserResult> {
    parse(input, &config::Config::default())
}
