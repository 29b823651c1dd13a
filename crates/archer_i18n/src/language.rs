use std::fmt::{Display, Formatter};
use std::str::FromStr;

use archer_core::PreferenceError;

/// A supported interface language.
///
/// The set is closed; variant order is the order of the selection screen and
/// the first entry is the primary language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageCode {
    #[default]
    En,
    Es,
    Pt,
    Fi,
    Sv,
    De,
    Fr,
    Uk,
}

impl LanguageCode {
    /// Fallback for lookups that miss the current language
    pub const PRIMARY: LanguageCode = LanguageCode::En;

    pub fn all() -> &'static [LanguageCode] {
        const ALL: [LanguageCode; 8] = [
            LanguageCode::En,
            LanguageCode::Es,
            LanguageCode::Pt,
            LanguageCode::Fi,
            LanguageCode::Sv,
            LanguageCode::De,
            LanguageCode::Fr,
            LanguageCode::Uk,
        ];
        &ALL
    }

    /// ISO 639-1 code, also the persisted form
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Pt => "pt",
            Self::Fi => "fi",
            Self::Sv => "sv",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Uk => "uk",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Spanish",
            Self::Pt => "Portuguese",
            Self::Fi => "Finnish",
            Self::Sv => "Swedish",
            Self::De => "German",
            Self::Fr => "French",
            Self::Uk => "Ukrainian",
        }
    }

    /// Name in the language itself, for the selection screen
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Español",
            Self::Pt => "Português",
            Self::Fi => "Suomi",
            Self::Sv => "Svenska",
            Self::De => "Deutsch",
            Self::Fr => "Français",
            Self::Uk => "Українська",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "🇬🇧",
            Self::Es => "🇪🇸",
            Self::Pt => "🇵🇹",
            Self::Fi => "🇫🇮",
            Self::Sv => "🇸🇪",
            Self::De => "🇩🇪",
            Self::Fr => "🇫🇷",
            Self::Uk => "🇺🇦",
        }
    }

    /// Match an OS locale tag (`pt-BR`, `uk_UA`, `FI`) on its primary subtag.
    ///
    /// Lenient on purpose; stored and user-selected codes go through `FromStr`.
    pub fn from_locale(locale: &str) -> Option<Self> {
        let normalized = normalize_locale(locale);
        let primary = normalized.split('-').next().unwrap_or_default();
        Self::all()
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(primary))
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|l| l.code() == s)
            .ok_or_else(|| PreferenceError::invalid("language code", s))
    }
}

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (Android often reports `en_US`).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exactly_eight_languages_primary_first() {
        assert_eq!(LanguageCode::all().len(), 8);
        assert_eq!(LanguageCode::all()[0], LanguageCode::PRIMARY);
        assert_eq!(LanguageCode::default(), LanguageCode::PRIMARY);
    }

    #[test]
    fn codes_round_trip() {
        for lang in LanguageCode::all() {
            assert_eq!(lang.code().parse::<LanguageCode>().unwrap(), *lang);
        }
    }

    #[test]
    fn locale_tags_match_primary_subtag() {
        assert_eq!(LanguageCode::from_locale("pt-BR"), Some(LanguageCode::Pt));
        assert_eq!(LanguageCode::from_locale(" uk_UA "), Some(LanguageCode::Uk));
        assert_eq!(LanguageCode::from_locale("SV"), Some(LanguageCode::Sv));
        assert_eq!(LanguageCode::from_locale("it"), None);
        assert_eq!(LanguageCode::from_locale(""), None);
    }

    #[test]
    fn parse_requires_exact_code() {
        for raw in ["fr-CA", "EN", " de ", "sv-", "pt_BR", "uk-anything-goes", ""] {
            let err = raw.parse::<LanguageCode>().unwrap_err();
            assert!(
                matches!(err, PreferenceError::InvalidArgument { kind: "language code", .. }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn selection_screen_metadata() {
        assert_eq!(LanguageCode::Uk.native_name(), "Українська");
        assert_eq!(LanguageCode::Uk.english_name(), "Ukrainian");
        assert_eq!(LanguageCode::Uk.flag(), "🇺🇦");
        assert_eq!(LanguageCode::Fi.native_name(), "Suomi");
        assert_eq!(LanguageCode::En.flag(), "🇬🇧");
    }

    #[test]
    fn unsupported_code_is_invalid_argument() {
        let err = "ru".parse::<LanguageCode>().unwrap_err();
        assert!(matches!(err, PreferenceError::InvalidArgument { kind: "language code", .. }));
    }
}
