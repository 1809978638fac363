use itertools::Itertools;
use url::Url;

use crate::{
    page::{ParsedPage, SectionSummary},
    wikitext::{ImageRef, clean_markup},
};

/// Commons redirects this path to the actual file, whatever wiki it lives on.
const COMMONS_FILE_PATH: &str = "https://commons.wikimedia.org/wiki/Special:FilePath";

/// Direct link to an image file.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` in the filename is percent-encoded,
/// so `&`, `+`, `:` and friends can't be mistaken for url syntax.
pub fn file_path_url(filename: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}/{}",
        COMMONS_FILE_PATH,
        urlencoding::encode(filename)
    ))
}

fn render_image(image: &ImageRef) -> String {
    let src = file_path_url(&image.filename)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| image.filename.clone());
    let alt = if image.caption.is_empty() {
        &image.filename
    } else {
        &image.caption
    };

    let mut out = format!("![{}]({})", alt, src);
    if !image.caption.is_empty() {
        out.push_str(&format!("\n*{}*", clean_markup(&image.caption)));
    }
    out
}

/// One section: heading, then the paragraph if any, then its images.
pub fn render_section(section: &SectionSummary) -> String {
    let mut blocks = vec![format!("## {}", section.section)];
    if !section.paragraph.is_empty() {
        blocks.push(section.paragraph.clone());
    }
    blocks.extend(section.images.iter().map(render_image));
    blocks.join("\n\n")
}

/// Render the whole page as markdown-ish plain text.
pub fn render_page(page: &ParsedPage) -> String {
    format!(
        "# {}\n\n{}",
        page.title,
        page.sections.iter().map(render_section).join("\n\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commons_url_is_encoded() {
        let url = file_path_url("Cat poster 1.jpg").unwrap();
        assert_eq!(
            url.as_str(),
            "https://commons.wikimedia.org/wiki/Special:FilePath/Cat%20poster%201.jpg"
        );
        let url = file_path_url("AC/DC & Co.png").unwrap();
        assert!(url.as_str().ends_with("/Special:FilePath/AC%2FDC%20%26%20Co.png"));
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let url = file_path_url("a=b+c,d;e:f@g$h.jpg").unwrap();
        assert_eq!(
            url.path(),
            "/wiki/Special:FilePath/a%3Db%2Bc%2Cd%3Be%3Af%40g%24h.jpg"
        );
        assert_eq!(url.query(), None);
    }

    #[test]
    fn section_with_everything() {
        let section = SectionSummary {
            section: "Lead".into(),
            paragraph: "Cats purr.".into(),
            images: vec![
                ImageRef::new("A.jpg", "A [[tabby]]"),
                ImageRef::new("B.jpg", ""),
            ],
        };
        assert_eq!(
            render_section(&section),
            "## Lead\n\nCats purr.\n\n\
             ![A [[tabby]]](https://commons.wikimedia.org/wiki/Special:FilePath/A.jpg)\n*A tabby*\n\n\
             ![B.jpg](https://commons.wikimedia.org/wiki/Special:FilePath/B.jpg)"
        );
    }

    #[test]
    fn empty_paragraph_is_skipped() {
        let page = ParsedPage {
            title: "Cat".into(),
            sections: vec![
                SectionSummary {
                    section: "Lead".into(),
                    ..Default::default()
                },
                SectionSummary {
                    section: "Behaviour".into(),
                    paragraph: "Sleeps.".into(),
                    images: vec![],
                },
            ],
            references: vec![],
        };
        assert_eq!(render_page(&page), "# Cat\n\n## Lead\n\n## Behaviour\n\nSleeps.");
    }
}
