use async_recursion::async_recursion;
use serde::{Deserialize, Serialize};

use crate::{
    errors::ProcessError,
    mediawiki_api::WikitextFetcher,
    reqwest_client::TextClient,
    wikitext::{
        ImageRef, Section, check_redirect, clean_markup, extract_all_references,
        extract_first_paragraph, extract_gallery_images, extract_images, remove_template_residue,
        remove_templates, split_sections,
    },
};

/// Sections which are only lists of links or citations.
pub const SKIP_SECTIONS: [&str; 5] = [
    "References",
    "External links",
    "See also",
    "Further reading",
    "Notes",
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionSummary {
    pub section: String,
    pub paragraph: String,
    pub images: Vec<ImageRef>,
}

/// A page after cleanup: one summary per kept section plus every reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedPage {
    pub title: String,
    pub sections: Vec<SectionSummary>,
    pub references: Vec<String>,
}

fn summarise_section(section: &Section) -> SectionSummary {
    let (text, mut images) = extract_gallery_images(&section.content);
    let (text, inline) = extract_images(&text);
    images.extend(inline);

    SectionSummary {
        section: section.title.clone(),
        paragraph: clean_markup(&extract_first_paragraph(&text)),
        images,
    }
}

/// Turn raw wikitext into a `ParsedPage`. Redirects are not looked at here.
pub fn normalise_wikitext(title: &str, wikitext: &str) -> ParsedPage {
    let (text, references) = extract_all_references(wikitext);
    let text = remove_template_residue(&remove_templates(&text));

    let sections = split_sections(&text)
        .iter()
        .filter(|section| !SKIP_SECTIONS.contains(&section.title.as_str()))
        .map(summarise_section)
        .collect();

    ParsedPage {
        title: title.to_owned(),
        sections,
        references,
    }
}

#[async_recursion(?Send)]
async fn resolve_page<C: TextClient + 'static>(
    fetcher: &WikitextFetcher<C>,
    title: String,
    max_redirects: u8,
    depth: usize,
) -> Result<ParsedPage, ProcessError> {
    let wikitext = fetcher.fetch_wikitext(&title).await?;

    if let Some(target) = check_redirect(&wikitext) {
        if depth > usize::from(max_redirects) {
            return Err(ProcessError::TooManyRedirects {
                title,
                limit: max_redirects,
            });
        }
        log::debug!("{:?} redirects to {:?}", title, target);
        return resolve_page(fetcher, target, max_redirects, depth + 1).await;
    }

    Ok(normalise_wikitext(&title, &wikitext))
}

/// Fetch `title`, follow any `#REDIRECT` chain and clean the result up.
///
/// # Arguments
/// - fetcher -> Where to get the wikitext from.
/// - title -> The page to start at.
/// - max_redirects -> How many redirects to follow before giving up.
///
/// # Returns
/// - Ok(ParsedPage) -> Titled after the page the chain ended on.
/// - Err(ProcessError) -> Any fetch error, or `TooManyRedirects`.
pub async fn parse_page<C: TextClient + 'static>(
    fetcher: &WikitextFetcher<C>,
    title: &str,
    max_redirects: u8,
) -> Result<ParsedPage, ProcessError> {
    resolve_page(fetcher, title.to_owned(), max_redirects, 0).await
}
