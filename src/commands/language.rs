//! News language selection and autocomplete suggestions.
//!
//! The `/technews` command takes a free-text `language` option. Only the
//! NewsAPI codes `en` and `ar` are accepted, matched exactly. While the user
//! is still typing, Discord queries the bot for suggestions; the filter over
//! the two supported languages lives here as a pure function.

/// Languages supported by the technews command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Arabic,
}

/// Autocomplete choices as (display name, language code) pairs.
pub const LANGUAGE_CHOICES: [(&str, &str); 2] = [("English", "en"), ("Arabic", "ar")];

impl Language {
    /// Parses a NewsAPI language code.
    ///
    /// The match is exact and case-sensitive: only `"en"` and `"ar"` are
    /// accepted, without trimming. Anything else returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// assert_eq!(Language::from_code("en"), Some(Language::English));
    /// assert_eq!(Language::from_code("EN"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }

    /// The NewsAPI language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Human-readable name, used in command replies and autocomplete.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
        }
    }
}

/// Filters the language choices against partially typed user input.
///
/// A choice is kept when its display name contains the typed text,
/// case-insensitively. Empty input keeps both choices. This is a pure
/// function with no failure path, called on every autocomplete interaction.
///
/// # Examples
///
/// ```
/// assert_eq!(language_choices("eng"), vec![("English", "en")]);
/// assert_eq!(language_choices("xyz"), vec![]);
/// ```
pub fn language_choices(typed: &str) -> Vec<(&'static str, &'static str)> {
    let typed = typed.to_lowercase();
    LANGUAGE_CHOICES
        .iter()
        .copied()
        .filter(|(name, _)| name.to_lowercase().contains(&typed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_english() {
        assert_eq!(Language::from_code("en"), Some(Language::English));
    }

    #[test]
    fn test_from_code_arabic() {
        assert_eq!(Language::from_code("ar"), Some(Language::Arabic));
    }

    #[test]
    fn test_from_code_rejects_other_languages() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code("Ar"), None);
    }

    #[test]
    fn test_from_code_does_not_trim() {
        assert_eq!(Language::from_code(" en"), None);
        assert_eq!(Language::from_code("en "), None);
    }

    #[test]
    fn test_code_round_trip() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Arabic.code(), "ar");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Language::English.display_name(), "English");
        assert_eq!(Language::Arabic.display_name(), "Arabic");
    }

    #[test]
    fn test_language_choices_empty_input_returns_both() {
        assert_eq!(
            language_choices(""),
            vec![("English", "en"), ("Arabic", "ar")]
        );
    }

    #[test]
    fn test_language_choices_matches_prefix() {
        assert_eq!(language_choices("eng"), vec![("English", "en")]);
        assert_eq!(language_choices("ara"), vec![("Arabic", "ar")]);
    }

    #[test]
    fn test_language_choices_is_case_insensitive() {
        assert_eq!(language_choices("ENG"), vec![("English", "en")]);
        assert_eq!(language_choices("aRaB"), vec![("Arabic", "ar")]);
    }

    #[test]
    fn test_language_choices_matches_substring() {
        // "li" appears in "English" only
        assert_eq!(language_choices("li"), vec![("English", "en")]);
    }

    #[test]
    fn test_language_choices_no_match() {
        assert_eq!(language_choices("xyz"), vec![]);
    }
}
