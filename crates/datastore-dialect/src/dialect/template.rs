//! Positional SQL template rendering.
//!
//! Templates mark substitution points with `{}`. Arguments are spliced in
//! as raw text, in order: identifiers such as table and sequence names are
//! trusted and are not quoted or escaped. Bound parameters (`?`) are left
//! for the manager.

const PLACEHOLDER: &str = "{}";

/// Substitute `args` into the `{}` placeholders of `template`, left to right.
///
/// Placeholders without a matching argument are left untouched; surplus
/// arguments are ignored.
pub fn render_template(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut rest = template;
    let mut args = args.iter();

    while let Some(pos) = rest.find(PLACEHOLDER) {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str(PLACEHOLDER),
        }
        rest = &rest[pos + PLACEHOLDER.len()..];
    }
    out.push_str(rest);
    out
}

/// Number of `{}` placeholders in `template`.
pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}
