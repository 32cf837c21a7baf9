use ratatui::style::Color;

/// Swatch for languages missing from [`LANGUAGE_COLORS`] (`#6E40C9`).
pub const FALLBACK_LANGUAGE_COLOR: Color = Color::Rgb(0x6E, 0x40, 0xC9);

/// GitHub's linguist colours for the languages we recognise.
const LANGUAGE_COLORS: [(&str, Color); 15] = [
    ("JavaScript", Color::Rgb(0xf1, 0xe0, 0x5a)),
    ("TypeScript", Color::Rgb(0x2b, 0x74, 0x89)),
    ("HTML", Color::Rgb(0xe3, 0x4c, 0x26)),
    ("CSS", Color::Rgb(0x56, 0x3d, 0x7c)),
    ("Python", Color::Rgb(0x35, 0x72, 0xA5)),
    ("Java", Color::Rgb(0xb0, 0x72, 0x19)),
    ("C#", Color::Rgb(0x17, 0x86, 0x00)),
    ("PHP", Color::Rgb(0x4F, 0x5D, 0x95)),
    ("Go", Color::Rgb(0x00, 0xAD, 0xD8)),
    ("Ruby", Color::Rgb(0x70, 0x15, 0x16)),
    ("Swift", Color::Rgb(0xff, 0xac, 0x45)),
    ("Kotlin", Color::Rgb(0xF1, 0x8E, 0x33)),
    ("Rust", Color::Rgb(0xde, 0xa5, 0x84)),
    ("C++", Color::Rgb(0xf3, 0x4b, 0x7d)),
    ("C", Color::Rgb(0x55, 0x55, 0x55)),
];

/// Colour of the swatch drawn next to a repository's language.
///
/// Lookup is exact and case-sensitive, matching the names the API reports.
pub fn language_color(language: &str) -> Color {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map_or(FALLBACK_LANGUAGE_COLOR, |(_, color)| *color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_languages() {
        assert_eq!(language_color("Rust"), Color::Rgb(222, 165, 132));
        assert_eq!(language_color("Go"), Color::Rgb(0, 173, 216));
        assert_eq!(language_color("C"), Color::Rgb(85, 85, 85));
        assert_eq!(language_color("C++"), Color::Rgb(243, 75, 125));
    }

    #[test]
    fn test_unknown_language_uses_fallback() {
        assert_eq!(language_color("Haskell"), FALLBACK_LANGUAGE_COLOR);
        assert_eq!(language_color(""), FALLBACK_LANGUAGE_COLOR);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(language_color("rust"), FALLBACK_LANGUAGE_COLOR);
    }

    #[test]
    fn test_table_has_no_duplicates() {
        let mut names: Vec<&str> = LANGUAGE_COLORS.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LANGUAGE_COLORS.len());
    }
}
