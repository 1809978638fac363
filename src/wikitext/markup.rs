use lazy_regex::regex_replace_all;

/// Reduce inline wikitext to plain text.
///
/// Bold/italic quotes go, `[[Page|Label]]` becomes `Label`, `[[Page]]` becomes
/// `Page`, any left over brackets are dropped and whitespace is collapsed.
pub fn clean_markup(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = regex_replace_all!(r"'''+", text, "").into_owned();
    s = regex_replace_all!(r"''", &s, "").into_owned();
    s = regex_replace_all!(r"\[\[([^|\]]+)\|([^\]]+)\]\]", &s, "${2}").into_owned();
    s = regex_replace_all!(r"\[\[([^\]]+)\]\]", &s, "${1}").into_owned();
    s = regex_replace_all!(r"[\[\]]", &s, "").into_owned();
    s = regex_replace_all!(r"\s+", &s, " ").into_owned();

    s.trim().to_string()
}
