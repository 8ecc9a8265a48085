use super::types::{Section, Topic};
use crate::config::DEFAULT_PLACEHOLDER_TITLE;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

/// Two-character prefix that opens a new topic
pub const TITLE_MARKER: &str = "##";

// "1.", "2)", "3-", "4 -" followed by optional whitespace
static NUMBERING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\s*[.)\-]\s*").expect("numbering pattern is a valid regex")
});

/// Remove any existing numbering from the beginning of a title.
///
/// Stacked prefixes such as `"1. 2) Intro"` are removed in full, so applying
/// this twice gives the same result as applying it once.
pub fn remove_numbering(title: &str) -> String {
    let mut rest = title.trim();
    while let Some(found) = NUMBERING.find(rest) {
        rest = rest[found.end()..].trim_start();
    }
    rest.trim().to_string()
}

/// Split text into marker-delimited sections.
///
/// `\r\n` and lone `\r` are treated as line breaks. Lines before the first
/// marker are dropped. Body lines are kept exactly as written.
pub fn parse_sections(text: &str) -> Vec<Section> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for line in normalized.split('\n') {
        let trimmed = line.trim();

        if let Some(after_marker) = trimmed.strip_prefix(TITLE_MARKER) {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(Section {
                title: remove_numbering(after_marker.trim_start()),
                lines: Vec::new(),
            });
        } else if let Some(section) = current.as_mut() {
            section.lines.push(line.to_string());
        }
    }

    if let Some(done) = current {
        sections.push(done);
    }

    debug!("Found {} marked sections", sections.len());
    sections
}

/// Divide text into numbered topics using the default placeholder title.
pub fn parse_topics(text: &str) -> Vec<Topic> {
    parse_topics_with_placeholder(text, DEFAULT_PLACEHOLDER_TITLE)
}

/// Divide text into numbered topics.
///
/// Topics are numbered from 1 in the order their markers appear. A marker
/// without title text gets `placeholder` as its title.
pub fn parse_topics_with_placeholder(text: &str, placeholder: &str) -> Vec<Topic> {
    let topics: Vec<Topic> = parse_sections(text)
        .into_iter()
        .enumerate()
        .map(|(index, section)| {
            let mut content = String::new();
            for line in &section.lines {
                content.push_str(line);
                content.push(' ');
            }
            Topic {
                number: index + 1,
                title: title_or_placeholder(section.title, placeholder),
                content,
            }
        })
        .collect();

    if topics.is_empty() {
        warn!("No {} markers found in input", TITLE_MARKER);
    }
    topics
}

/// Extract the cleaned titles, in order.
pub fn extract_titles(text: &str, placeholder: &str) -> Vec<String> {
    parse_sections(text)
        .into_iter()
        .map(|section| title_or_placeholder(section.title, placeholder))
        .collect()
}

fn title_or_placeholder(title: String, placeholder: &str) -> String {
    if title.is_empty() {
        placeholder.to_string()
    } else {
        title
    }
}
