/// Numbered list, one `"{n}. {title}"` line per title
pub fn generate_list<S: AsRef<str>>(titles: &[S]) -> String {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| format!("{}. {}", index + 1, title.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::generate_list;
    use crate::topics::{extract_titles, parse_topics};

    #[test]
    fn test_list_from_parsed_titles() {
        let text = "## Intro\nHello world. This is a test.\n## Topic Two\nMore content here.";
        let titles = extract_titles(text, "(No title)");
        assert_eq!(generate_list(&titles), "1. Intro\n2. Topic Two");

        let from_topics: Vec<String> = parse_topics(text).into_iter().map(|t| t.title).collect();
        assert_eq!(generate_list(&from_topics), generate_list(&titles));
    }

    #[test]
    fn test_list_renumbers_from_one() {
        assert_eq!(generate_list(&["b", "a", "b"]), "1. b\n2. a\n3. b");
        assert_eq!(generate_list::<&str>(&[]), "");
    }
}
