/// If `wikitext` is a redirect page, return the page it points at.
///
/// Any `#Section` anchor on the target is dropped, as we only fetch whole pages.
pub fn check_redirect(wikitext: &str) -> Option<String> {
    let (_, target) =
        lazy_regex::regex_captures!(r"(?i)^#redirect\s*:?\s*\[\[([^\]]+)\]\]", wikitext.trim())?;

    let target = target.split('#').next().unwrap_or_default().trim();
    if target.is_empty() {
        return None;
    }
    Some(target.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_redirect() {
        assert_eq!(
            check_redirect("#REDIRECT [[Felis catus]]"),
            Some("Felis catus".into())
        );
    }

    #[test]
    fn redirect_variants() {
        assert_eq!(check_redirect("  #redirect:[[Dog]]\n{{R from move}}"), Some("Dog".into()));
        assert_eq!(
            check_redirect("#Redirect [[Cat#Etymology and naming]]"),
            Some("Cat".into())
        );
    }

    #[test]
    fn not_a_redirect() {
        assert_eq!(check_redirect("The '''cat''' is a [[mammal]]."), None);
        assert_eq!(check_redirect("See #REDIRECT [[Dog]]"), None);
        assert_eq!(check_redirect("#REDIRECT [[#Section only]]"), None);
    }
}
