mod parser;
mod types;

pub use parser::{
    extract_titles, parse_sections, parse_topics, parse_topics_with_placeholder,
    remove_numbering, TITLE_MARKER,
};
pub use types::{Section, Topic};
