use std::fmt;
use std::str::FromStr;

use super::LocaleError;

/// Supported languages.
///
/// German is the default and is served without a URL prefix; the others
/// live under `/<code>/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    De,
    En,
    Ru,
    Uz,
}

impl Lang {
    pub const DEFAULT: Lang = Lang::De;

    /// Picker order.
    pub const ALL: [Lang; 4] = [Lang::De, Lang::En, Lang::Ru, Lang::Uz];

    pub fn code(self) -> &'static str {
        match self {
            Lang::De => "de",
            Lang::En => "en",
            Lang::Ru => "ru",
            Lang::Uz => "uz",
        }
    }

    /// Exact match on the lowercase code, as it appears in a URL segment.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    /// The leading path segment for this language, `None` for the default.
    pub fn prefix(self) -> Option<&'static str> {
        if self.is_default() {
            None
        } else {
            Some(self.code())
        }
    }

    /// Parse a first path segment as a language prefix.
    pub(crate) fn from_prefix(segment: &str) -> Option<Self> {
        Self::from_code(segment).filter(|lang| !lang.is_default())
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Lang::De => "Deutsch",
            Lang::En => "English",
            Lang::Ru => "Русский",
            Lang::Uz => "O'zbek",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Lang::De => "🇩🇪",
            Lang::En => "🇬🇧",
            Lang::Ru => "🇷🇺",
            Lang::Uz => "🇺🇿",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| LocaleError::UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_default_without_prefix() {
        let unprefixed: Vec<Lang> = Lang::ALL
            .into_iter()
            .filter(|lang| lang.prefix().is_none())
            .collect();
        assert_eq!(unprefixed, vec![Lang::De]);
    }

    #[test]
    fn prefixes_are_lowercase_codes() {
        for lang in Lang::ALL.into_iter().filter(|l| !l.is_default()) {
            let prefix = lang.prefix().unwrap();
            assert_eq!(prefix, lang.code());
            assert_eq!(prefix, prefix.to_ascii_lowercase());
        }
    }

    #[test]
    fn parses_codes_strictly() {
        assert_eq!("ru".parse::<Lang>(), Ok(Lang::Ru));
        assert_eq!(
            "RU".parse::<Lang>(),
            Err(LocaleError::UnknownLanguage("RU".to_string()))
        );
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn default_is_not_a_prefix() {
        assert_eq!(Lang::from_prefix("de"), None);
        assert_eq!(Lang::from_prefix("uz"), Some(Lang::Uz));
        assert_eq!(Lang::from_prefix("menu"), None);
    }
}
