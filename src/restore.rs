use std::collections::BTreeMap;

/// Substitutes every placeholder key in `template` with its mapped fragment,
/// leaving kept tags untouched. The map is usually a [`ParserResult`]'s
/// `args` after its fragments were translated.
///
/// A `[[..]]` sequence with no map entry is left verbatim rather than
/// dropped, so a translator that mangles a key degrades visibly instead of
/// silently losing text.
///
/// [`ParserResult`]: crate::parser::ParserResult
pub fn restore(template: &str, args: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("[[") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let Some(end) = tail.find("]]") else {
            // Unterminated opener; nothing left to substitute.
            out.push_str(tail);
            return out;
        };

        let key = &tail[..end + 2];
        match args.get(key) {
            Some(text) => out.push_str(text),
            None => out.push_str(key),
        }
        rest = &tail[end + 2..];
    }

    out.push_str(rest);
    out
}
