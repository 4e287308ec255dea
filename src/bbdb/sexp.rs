//! Emacs Lisp literal helpers used by the record formatter.

/// The Lisp empty list / false value.
pub const NIL: &str = "nil";

/// Render a value as a Lisp string literal on a single line. `"` and `\`
/// are backslash-escaped, line breaks become `\n` and `\r`.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Quote an optional value, `nil` when absent.
pub fn quote_or_nil(value: Option<&str>) -> String {
    value.map(quote).unwrap_or_else(|| NIL.to_string())
}

/// Render already-formatted items as `( a b c )`, or `nil` when empty.
pub fn list_or_nil(items: &[String]) -> String {
    if items.is_empty() {
        NIL.to_string()
    } else {
        format!("( {} )", items.join(" "))
    }
}
