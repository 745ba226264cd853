// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;

/// Lower-cases the input and keeps unicode letters (including dependent
/// vowel signs, which are alphabetic) and digits. Whitespace
/// runs become a single `-`; repeated and edge hyphens are removed.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        raw_slug(input)
    }
}

pub fn raw_slug(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        } else if ch.is_alphabetic() || ch.is_numeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_joins_words() {
        assert_eq!(raw_slug("Hello World!"), "hello-world");
        assert_eq!(raw_slug("  Breaking:  Rust 2.0  released "), "breaking-rust-20-released");
    }

    #[test]
    fn collapses_and_trims_hyphens() {
        assert_eq!(raw_slug("--a -- b--"), "a-b");
        assert_eq!(raw_slug("Tech"), "tech");
        assert_eq!(raw_slug("Tech!"), "tech");
    }

    #[test]
    fn keeps_unicode_letters() {
        assert_eq!(raw_slug("Café Ünïcode"), "café-ünïcode");
        assert_eq!(raw_slug("বাংলাদেশ খেলা"), "বাংলাদেশ-খেলা");
    }

    #[test]
    fn symbols_only_yield_empty_slug() {
        assert_eq!(raw_slug("!!! ??? ***"), "");
        assert_eq!(raw_slug(""), "");
    }

    #[test]
    fn output_charset_and_shape() {
        let inputs = ["A  b", "x--y", " -lead", "trail- ", "mixed_case/Slash", "১২৩ news"];
        for input in inputs {
            let slug = raw_slug(input);
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{input:?} -> {slug}");
            assert!(!slug.contains("--"), "{input:?} -> {slug}");
            assert!(
                slug.chars().all(|c| c == '-' || c.is_alphanumeric()),
                "{input:?} -> {slug}"
            );
            assert_eq!(slug, slug.to_lowercase());
        }
    }
}
