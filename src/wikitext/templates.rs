use lazy_regex::regex_replace_all;

/// Remove every `{{...}}` template, nested ones included.
///
/// Stray `}}` with nothing open are dropped and never push the depth below zero.
pub fn remove_templates(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut depth: usize = 0;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                depth += 1;
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                depth = depth.saturating_sub(1);
            }
            _ if depth == 0 => result.push(ch),
            _ => {}
        }
    }

    result
}

/// Clean up what is left behind by templates that were only partly removed.
pub fn remove_template_residue(text: &str) -> String {
    let mut s = text.to_string();

    s = regex_replace_all!(r"\b[Cc]onvert\|[^ ]+", &s, "").into_owned();
    s = regex_replace_all!(r"(?i)\befn\b[^ ]*", &s, "").into_owned();
    s = regex_replace_all!(r"(?i)\bnative lang\|[^ ]+", &s, "").into_owned();
    // `|name=value` argument fragments
    s = regex_replace_all!(r"\|\s*[a-zA-Z0-9_-]+\s*=\s*[^| ]+", &s, "").into_owned();

    s
}
