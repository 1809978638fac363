use serde::{Deserialize, Serialize};

/// Title given to the text before the first heading.
pub const LEAD_TITLE: &str = "Lead";

/// Lines starting with any of these are markup, not prose.
const NON_PROSE_PREFIXES: [&str; 6] = ["*", "|", "{", "=", "[[File:", "[[Image:"];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.trim().to_string(),
        }
    }
}

/// Title of a `== Heading ==` line, levels 2 to 6.
///
/// The level is the shorter of the opening and closing `=` runs, so `=== A ==`
/// reads as a level 2 heading titled `= A`.
fn parse_heading(line: &str) -> Option<&str> {
    let line = line.trim_end_matches('\r');
    let lead = line.len() - line.trim_start_matches('=').len();
    let trail = line.len() - line.trim_end_matches('=').len();
    let level = lead.min(trail).min(6).min(line.len() / 2);
    if level < 2 {
        return None;
    }
    Some(line[level..line.len() - level].trim())
}

/// Split `text` on its headings. The first section is always `Lead`, even when empty.
pub fn split_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut title = LEAD_TITLE;
    let mut start = 0;
    let mut offset = 0;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if let Some(heading) = parse_heading(line.trim_end_matches('\n')) {
            sections.push(Section::new(title, &text[start..line_start]));
            title = heading;
            start = offset;
        }
    }
    sections.push(Section::new(title, &text[start..]));

    sections
}

/// The first block of prose lines, joined with single spaces.
pub fn extract_first_paragraph(text: &str) -> String {
    let mut paragraph: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !paragraph.is_empty() {
                break;
            }
            continue;
        }
        if NON_PROSE_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
            continue;
        }
        paragraph.push(trimmed);
    }

    paragraph.join(" ").trim().to_string()
}
