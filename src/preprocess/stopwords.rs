use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use stop_words::LANGUAGE;

/// Built-in English stopword table.
/// Equivalent to the list shipped with common topic-modeling toolkits.
const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "computer", "con", "could", "couldnt", "cry", "de", "describe",
    "detail", "did", "didn", "do", "does", "doesn", "doing", "don", "done", "down", "due",
    "during", "each", "eg", "eight", "either", "eleven", "else", "elsewhere", "empty", "enough",
    "etc", "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few",
    "fifteen", "fifty", "fill", "find", "fire", "first", "five", "for", "former", "formerly",
    "forty", "found", "four", "from", "front", "full", "further", "get", "give", "go", "had",
    "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i",
    "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself", "just",
    "keep", "kg", "km", "last", "latter", "latterly", "least", "less", "ltd", "made", "make",
    "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most",
    "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
    "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing",
    "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part", "per",
    "perhaps", "please", "put", "quite", "rather", "re", "really", "regarding", "same", "say",
    "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should", "show",
    "side", "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something",
    "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than",
    "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third",
    "this", "those", "though", "three", "through", "throughout", "thru", "thus", "to",
    "together", "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under",
    "unless", "until", "up", "upon", "us", "used", "using", "various", "very", "via", "was",
    "we", "well", "were", "what", "whatever", "when", "whence", "whenever", "where",
    "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether", "which",
    "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Closed set of words removed by [`Filter::RemoveStopwords`](super::Filter::RemoveStopwords).
///
/// Words are stored lowercased, matching the output of the lowercase stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stopwords {
    words: HashSet<Box<str>>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::english()
    }
}

impl Stopwords {
    /// The built-in English table.
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOPWORDS.iter().copied())
    }

    /// Table for `language` from the `stop-words` crate.
    pub fn for_language(language: LANGUAGE) -> Self {
        let words: Vec<String> = stop_words::get(language);
        Self::from_words(words)
    }

    /// Caller supplied table.
    pub fn from_words<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase().into_boxed_str())
                .collect(),
        }
    }

    /// An empty table; the stopword stage becomes a no-op.
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_covers_common_function_words() {
        let stops = Stopwords::english();
        for w in ["the", "is", "and", "on", "for", "a", "are"] {
            assert!(stops.contains(w), "{w} should be a stopword");
        }
        for w in ["cat", "sat", "mat", "dog", "rug", "great", "pets"] {
            assert!(!stops.contains(w), "{w} should not be a stopword");
        }
    }

    #[test]
    fn from_words_lowercases() {
        let stops = Stopwords::from_words(["Foo", "BAR"]);
        assert!(stops.contains("foo"));
        assert!(stops.contains("bar"));
        assert!(!stops.contains("Foo"));
        assert_eq!(stops.len(), 2);
    }

    #[test]
    fn none_is_empty() {
        assert!(Stopwords::none().is_empty());
        assert!(!Stopwords::none().contains("the"));
    }
}
