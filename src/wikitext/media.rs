/*!
Image extraction for `<gallery>` blocks and `[[File:...]]` / `[[Image:...]]` links.

Both extractors return the text with the markup removed alongside the images
they found, so they can be chained.
*/

use lazy_regex::{regex, regex_captures, regex_is_match};
use serde::{Deserialize, Serialize};

/// Image options that only control layout and never carry a caption.
const LAYOUT_KEYWORDS: [&str; 6] = ["thumb", "thumbnail", "right", "left", "center", "frameless"];

/// An image referenced by the page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageRef {
    /// File name without the `File:` namespace.
    pub filename: String,
    /// Caption as written in the wikitext, may still contain markup.
    pub caption: String,
}

impl ImageRef {
    pub fn new<S: Into<String>>(filename: S, caption: S) -> Self {
        Self {
            filename: filename.into(),
            caption: caption.into(),
        }
    }
}

/// Parse one line of a gallery body: `File:Name.jpg|Caption`.
fn parse_gallery_line(line: &str) -> Option<ImageRef> {
    let (_, _, filename, caption) = regex_captures!(r"(?i)^(File|Image):([^|]+)\|?(.*)$", line)?;
    Some(ImageRef::new(filename.trim(), caption.trim()))
}

/// Collect the images of every `<gallery>` block and remove the blocks.
pub fn extract_gallery_images(text: &str) -> (String, Vec<ImageRef>) {
    let gallery = regex!(r"(?is)<gallery[^>]*>(.*?)</gallery>");

    let mut images = Vec::new();
    for caps in gallery.captures_iter(text) {
        images.extend(
            caps[1]
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .filter_map(parse_gallery_line),
        );
    }

    (gallery.replace_all(text, "").into_owned(), images)
}

fn is_caption(option: &str) -> bool {
    !LAYOUT_KEYWORDS.contains(&option.to_lowercase().as_str())
        && !regex_is_match!(r"^\d+px$", option)
        && !option.starts_with("alt=")
}

/// Collect inline `[[File:...]]` images and remove them from the text.
///
/// The caption is the last option that isn't layout, a size or alt text.
pub fn extract_images(text: &str) -> (String, Vec<ImageRef>) {
    let image = regex!(r"(?i)\[\[(?:File|Image):([^|\]]+)(.*?)\]\]");

    let images = image
        .captures_iter(text)
        .map(|caps| {
            let options = caps.get(2).map_or("", |m| m.as_str());
            let caption = options
                .split('|')
                .map(str::trim)
                .filter(|option| !option.is_empty() && is_caption(option))
                .last()
                .unwrap_or_default();
            ImageRef::new(caps[1].trim(), caption)
        })
        .collect();

    (image.replace_all(text, "").into_owned(), images)
}
