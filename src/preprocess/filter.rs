use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::stopwords::Stopwords;

static RE_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([^>]+)>").expect("tag pattern is valid"));

/// Minimum token length kept by the default pipeline.
pub const DEFAULT_MIN_LEN: usize = 3;

/// One normalization stage.
///
/// Every filter maps a string to a string and never fails, so any ordered
/// list of filters forms a valid pipeline. Token level filters split on
/// whitespace and rejoin the survivors with single spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    Lowercase,
    /// remove `<...>` markup
    StripTags,
    /// replace each run of ASCII punctuation with one space
    StripPunctuation,
    CollapseWhitespace,
    /// drop tokens made only of ASCII digits
    StripNumeric,
    RemoveStopwords,
    /// drop tokens with fewer than `min_len` chars
    StripShort { min_len: usize },
    /// replace non-alphanumeric chars (except `_`) with a space
    StripNonAlphanum,
    /// split letter/digit boundaries: `abc123` -> `abc 123`
    SplitAlphanum,
}

impl Filter {
    /// The default pipeline order.
    pub fn defaults(min_len: usize) -> Vec<Filter> {
        vec![
            Filter::Lowercase,
            Filter::StripTags,
            Filter::StripPunctuation,
            Filter::CollapseWhitespace,
            Filter::StripNumeric,
            Filter::RemoveStopwords,
            Filter::StripShort { min_len },
        ]
    }

    /// Apply this stage to `text`.
    ///
    /// `stopwords` is only consulted by [`Filter::RemoveStopwords`].
    pub fn apply(&self, text: &str, stopwords: &Stopwords) -> String {
        match *self {
            Filter::Lowercase => text.to_lowercase(),
            Filter::StripTags => RE_TAGS.replace_all(text, "").into_owned(),
            Filter::StripPunctuation => strip_punctuation(text),
            Filter::CollapseWhitespace => retain_tokens(text, |_| true),
            Filter::StripNumeric => {
                retain_tokens(text, |t| !t.chars().all(|c| c.is_ascii_digit()))
            }
            Filter::RemoveStopwords => retain_tokens(text, |t| !stopwords.contains(t)),
            Filter::StripShort { min_len } => retain_tokens(text, |t| t.chars().count() >= min_len),
            Filter::StripNonAlphanum => text
                .chars()
                .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
                .collect(),
            Filter::SplitAlphanum => split_alphanum(text),
        }
    }
}

fn retain_tokens<F>(text: &str, keep: F) -> String
where
    F: Fn(&str) -> bool,
{
    text.split_whitespace()
        .filter(|t| keep(*t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_ascii_punctuation() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn split_alphanum(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if let Some(p) = prev {
            let boundary = (p.is_alphabetic() && c.is_ascii_digit())
                || (p.is_ascii_digit() && c.is_alphabetic());
            if boundary {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(filter: Filter, text: &str) -> String {
        filter.apply(text, &Stopwords::english())
    }

    #[test]
    fn lowercase_is_unicode_aware() {
        assert_eq!(run(Filter::Lowercase, "ÀBC Déf"), "àbc déf");
    }

    #[test]
    fn strip_tags_removes_markup() {
        assert_eq!(run(Filter::StripTags, "<i>Hello</i> <br/>world"), "Hello world");
        assert_eq!(run(Filter::StripTags, "a < b"), "a < b");
    }

    #[test]
    fn strip_punctuation_replaces_runs_with_one_space() {
        assert_eq!(run(Filter::StripPunctuation, "end.Start"), "end Start");
        assert_eq!(run(Filter::StripPunctuation, "wait...what?!"), "wait what ");
        assert_eq!(run(Filter::StripPunctuation, "don't"), "don t");
    }

    #[test]
    fn strip_punctuation_leaves_non_ascii_symbols() {
        assert_eq!(run(Filter::StripPunctuation, "café—bar"), "café—bar");
    }

    #[test]
    fn collapse_whitespace() {
        assert_eq!(run(Filter::CollapseWhitespace, "  a \t\n b  "), "a b");
    }

    #[test]
    fn strip_numeric_only_drops_standalone_numbers() {
        assert_eq!(run(Filter::StripNumeric, "in 2019 we used 3d covid19"), "in we used 3d covid19");
    }

    #[test]
    fn remove_stopwords() {
        assert_eq!(run(Filter::RemoveStopwords, "the cat is on the mat"), "cat mat");
    }

    #[test]
    fn strip_short_counts_chars_not_bytes() {
        assert_eq!(run(Filter::StripShort { min_len: 3 }, "ab abc éé ééé"), "abc ééé");
        assert_eq!(run(Filter::StripShort { min_len: 1 }, "a b"), "a b");
    }

    #[test]
    fn strip_non_alphanum() {
        assert_eq!(run(Filter::StripNonAlphanum, "a+b=c_d"), "a b c_d");
    }

    #[test]
    fn split_alphanum() {
        assert_eq!(run(Filter::SplitAlphanum, "abc123def 4x"), "abc 123 def 4 x");
    }

    #[test]
    fn defaults_follow_fixed_order() {
        let filters = Filter::defaults(DEFAULT_MIN_LEN);
        assert_eq!(filters.first(), Some(&Filter::Lowercase));
        assert_eq!(filters.last(), Some(&Filter::StripShort { min_len: 3 }));
        assert_eq!(filters.len(), 7);
    }
}
