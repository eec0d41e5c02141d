/// Characters that keep their special meaning inside a double-quoted string.
const ESCAPED_CHARS: [char; 4] = ['\\', '"', '$', '`'];

/// Wraps `text` in double quotes, backslash-escaping `\`, `"`, `$` and `` ` ``.
///
/// Every other character, single quotes and whitespace included, is copied
/// through untouched.
///
/// ```
/// assert_eq!(sshmenu::shell::quote("echo"), "\"echo\"");
/// assert_eq!(sshmenu::shell::quote("a $b"), "\"a \\$b\"");
/// ```
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for ch in text.chars() {
        if ESCAPED_CHARS.contains(&ch) {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
#[path = "../test/shell/quote.rs"]
mod tests;
