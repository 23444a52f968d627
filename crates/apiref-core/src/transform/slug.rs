/// Reduce arbitrary text to a file-name and anchor safe slug.
///
/// Characters outside `[A-Za-z0-9._ ]` are dropped, runs of whitespace
/// become a single `_`, and an empty result becomes `_`.
///
/// - `"Get Account Info!"` → `"Get_Account_Info"`
/// - `"submit(tx).md"` → `"submittx.md"`
/// - `"***"` → `"_"`
pub fn slugify(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' {
            result.push(ch);
            in_whitespace = false;
        } else if ch == ' ' {
            if !in_whitespace {
                result.push('_');
            }
            in_whitespace = true;
        }
        // Anything else is dropped and does not break a whitespace run
    }

    if result.is_empty() {
        return "_".to_string();
    }

    result
}
