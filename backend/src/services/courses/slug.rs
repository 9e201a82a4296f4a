use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("slug pattern is valid"));

/// Derives a URL-safe slug from a course title.
///
/// Runs of characters other than ASCII letters and digits collapse into a
/// single `-`, leading and trailing dashes are dropped and the result is
/// lowercased. A title without any of those characters yields an empty slug.
pub fn slugify(title: &str) -> String {
    NON_SLUG_CHARS
        .replace_all(title, "-")
        .trim_matches('-')
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn collapses_punctuation_and_spaces() {
        assert_eq!(slugify("React: The Big Picture"), "react-the-big-picture");
        assert_eq!(slugify("  Clean Code -- for Humans!  "), "clean-code-for-humans");
    }

    #[test]
    fn underscores_become_dashes_and_digits_stay() {
        assert_eq!(slugify("ES6_in Depth 2"), "es6-in-depth-2");
        assert_eq!(slugify("snake__case_"), "snake-case");
    }

    #[test]
    fn symbol_only_title_has_no_slug() {
        assert_eq!(slugify("?!"), "");
    }
}
