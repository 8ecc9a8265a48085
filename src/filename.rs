/// Characters removed from titles before they are used as file names
pub const FORBIDDEN_FILENAME_CHARS: [char; 7] = [':', '\\', '/', '?', '*', '[', ']'];

/// Longest base name kept, in characters
pub const MAX_BASE_FILENAME_CHARS: usize = 50;

/// Fallback base name when there is no usable title
pub const DEFAULT_BASE_FILENAME: &str = "subtitles";

/// Strip `: \ / ? * [ ]` from a title and cut it to 50 characters.
pub fn sanitize_base_filename(title: &str) -> String {
    title
        .chars()
        .filter(|c| !FORBIDDEN_FILENAME_CHARS.contains(c))
        .take(MAX_BASE_FILENAME_CHARS)
        .collect()
}

/// Base file name derived from the first title, or `subtitles` when none is usable.
pub fn base_filename_for<S: AsRef<str>>(titles: &[S]) -> String {
    titles
        .first()
        .map(|title| sanitize_base_filename(title.as_ref()))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_FILENAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_forbidden_characters() {
        assert_eq!(sanitize_base_filename("a:b\\c/d?e*f[g]h"), "abcdefgh");
        assert_eq!(sanitize_base_filename("Ação: parte 1"), "Ação parte 1");
    }

    #[test]
    fn test_sanitize_truncates_to_fifty_chars() {
        let long = "é".repeat(80);
        assert_eq!(sanitize_base_filename(&long).chars().count(), 50);
    }

    #[test]
    fn test_base_filename_fallback() {
        assert_eq!(base_filename_for(&["Intro", "Other"]), "Intro");
        assert_eq!(base_filename_for::<&str>(&[]), "subtitles");
        assert_eq!(base_filename_for(&["[?]"]), "subtitles");
    }
}
