use super::Lang;

/// Cut the query string and fragment off a path.
fn strip_suffixes(path: &str) -> &str {
    match path.find(|c: char| c == '?' || c == '#') {
        Some(idx) => &path[..idx],
        None => path,
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    strip_suffixes(path).split('/').filter(|s| !s.is_empty())
}

/// Language encoded in the first segment of `path`.
///
/// Anything that is not a prefixed language code (including `de`, which is
/// never written into URLs) resolves to the default language, since most
/// first segments are plain page slugs.
pub fn language_of(path: &str) -> Lang {
    segments(path)
        .next()
        .and_then(Lang::from_prefix)
        .unwrap_or(Lang::DEFAULT)
}

/// The canonical URL path of the page behind `path`, in `target`.
///
/// Leading language segments are dropped, empty segments collapse, the
/// query and fragment are discarded and the result always starts and ends
/// with `/`. Non-default targets get their `/<code>` prefix back.
pub fn canonical_path(path: &str, target: Lang) -> String {
    let mut out = String::with_capacity(path.len() + 4);
    if let Some(prefix) = target.prefix() {
        out.push('/');
        out.push_str(prefix);
    }

    // Stripping every leading code, not just the first, keeps this idempotent
    // for inputs like `/en/ru/menu`.
    let rest = segments(path).skip_while(|segment| Lang::from_prefix(segment).is_some());
    for segment in rest {
        out.push('/');
        out.push_str(segment);
    }
    out.push('/');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[&str] = &[
        "",
        "/",
        "/menu",
        "/menu/",
        "menu",
        "/en",
        "/en/",
        "/en/menu",
        "/ru/menu/?table=4#book",
        "//impressum//",
        "/de/menu",
        "/en/ru/menu",
        "/english-menu/",
        "/plov-frankfurt?utm_source=maps",
    ];

    #[test]
    fn language_of_scenarios() {
        assert_eq!(language_of("/"), Lang::De);
        assert_eq!(language_of(""), Lang::De);
        assert_eq!(language_of("/en/menu/"), Lang::En);
        assert_eq!(language_of("/uz"), Lang::Uz);
        assert_eq!(language_of("ru/menu"), Lang::Ru);
        assert_eq!(language_of("/some-random-slug"), Lang::De);
        assert_eq!(language_of("/menu/en/"), Lang::De);
        assert_eq!(language_of("/de/menu"), Lang::De);
    }

    #[test]
    fn language_of_ignores_query_and_fragment() {
        assert_eq!(language_of("/?lang=en"), Lang::De);
        assert_eq!(language_of("/#/en/"), Lang::De);
        assert_eq!(language_of("/ru?x=1"), Lang::Ru);
    }

    #[test]
    fn canonical_path_scenarios() {
        assert_eq!(canonical_path("/en/menu", Lang::Ru), "/ru/menu/");
        assert_eq!(canonical_path("/", Lang::En), "/en/");
        assert_eq!(canonical_path("/en/", Lang::De), "/");
        assert_eq!(canonical_path("/en", Lang::De), "/");
        assert_eq!(canonical_path("/en", Lang::En), "/en/");
        assert_eq!(canonical_path("/", Lang::De), "/");
        assert_eq!(canonical_path("/menu", Lang::De), "/menu/");
    }

    #[test]
    fn canonical_path_is_idempotent() {
        for path in PATHS {
            for lang in Lang::ALL {
                let once = canonical_path(path, lang);
                assert_eq!(canonical_path(&once, lang), once, "path={path} lang={lang}");
            }
        }
    }

    #[test]
    fn canonical_path_round_trips_language() {
        for base in ["/", "/menu", "/impressum/", "/plov-frankfurt"] {
            for lang in Lang::ALL {
                assert_eq!(language_of(&canonical_path(base, lang)), lang, "base={base}");
            }
        }
    }

    #[test]
    fn trailing_slash_does_not_matter() {
        for lang in Lang::ALL {
            assert_eq!(canonical_path("/menu", lang), canonical_path("/menu/", lang));
        }
    }

    #[test]
    fn only_whole_segments_are_stripped() {
        assert_eq!(canonical_path("/english-menu", Lang::Ru), "/ru/english-menu/");
        assert_eq!(canonical_path("/enx/", Lang::De), "/enx/");
    }

    #[test]
    fn canonical_path_drops_query_and_collapses_slashes() {
        assert_eq!(canonical_path("/ru/menu/?table=4#book", Lang::En), "/en/menu/");
        assert_eq!(canonical_path("//impressum//", Lang::De), "/impressum/");
        assert_eq!(canonical_path("menu", Lang::Uz), "/uz/menu/");
    }
}
