//! Doc-comment mining for request functions.

/// Description from the `/** ... */` block that ends right before `offset`.
///
/// Only whitespace may separate the comment from the function. Every `*` is
/// stripped, lines are trimmed, and blank lines and `@tag` lines are dropped
/// before joining with single spaces. Returns `None` when there is no such
/// comment or nothing survives.
pub fn describe(text: &str, offset: usize) -> Option<String> {
    let before = text.get(..offset)?.trim_end();
    let inner = before.strip_suffix("*/")?;
    let start = inner.rfind("/**")?;
    let body = &inner[start + 3..];
    // A plain `/* */` comment closing after an earlier doc block
    if body.contains("*/") {
        return None;
    }

    let cleaned = body.replace('*', "");
    let description = cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('@'))
        .collect::<Vec<_>>()
        .join(" ");

    if description.is_empty() {
        None
    } else {
        Some(description)
    }
}
