use lazy_regex::{regex, regex_replace_all};
use regex::Captures;

/// Strip every `<ref>` from `text`, returning the remaining text and the
/// contents of the non-empty references in document order.
///
/// Self-closing `<ref name="x" />` and `<references />` tags are removed without
/// producing a reference.
pub fn extract_all_references(text: &str) -> (String, Vec<String>) {
    let mut refs = Vec::new();

    let text = regex!(r"(?is)<ref(?:\s[^>]*[^/>])?\s*>(.*?)</ref\s*>").replace_all(
        text,
        |caps: &Captures| {
            let content = caps[1].trim();
            if !content.is_empty() {
                refs.push(content.to_string());
            }
            ""
        },
    );
    let text = regex_replace_all!(r"(?i)<ref(?:erences)?(?:\s[^>]*)?/>", &text, "");

    (text.into_owned(), refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_refs_are_collected() {
        let (text, refs) = extract_all_references(
            "Cats purr.<ref>{{cite web|title=Purr}}</ref> They sleep.<ref name=\"nap\">Nap book</ref>",
        );
        assert_eq!(text, "Cats purr. They sleep.");
        assert_eq!(refs, vec!["{{cite web|title=Purr}}", "Nap book"]);
    }

    #[test]
    fn self_closing_refs_are_dropped() {
        let (text, refs) =
            extract_all_references("A<ref name=\"a\" /> B<ref name=b/> C<ref>real</ref>");
        assert_eq!(text, "A B C");
        assert_eq!(refs, vec!["real"]);
    }

    #[test]
    fn multiline_and_empty_refs() {
        let (text, refs) = extract_all_references("x<REF>\n  line one\n</REF>y<ref> </ref>z");
        assert_eq!(text, "xyz");
        assert_eq!(refs, vec!["line one"]);
    }

    #[test]
    fn references_tag_is_removed() {
        let (text, refs) = extract_all_references("==Notes==\n<references/>");
        assert_eq!(text, "==Notes==\n");
        assert!(refs.is_empty());

        let (text, _) = extract_all_references("A<references />B<REFERENCES group=\"n\"/>C");
        assert_eq!(text, "ABC");
    }

    #[test]
    fn named_ref_before_references_list() {
        let (text, refs) =
            extract_all_references("Cats<ref name=a/> purr.<ref>Purr study</ref>\n<references />");
        assert_eq!(text, "Cats purr.\n");
        assert_eq!(refs, vec!["Purr study"]);
    }
}
