//! Word tokenization and stopword filtering for ATS matching.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Splits lowercase text on anything that is not a word character.
///
/// Word characters are alphanumerics and `_`, so `node.js` yields `node`, `js`
/// and `c++` yields `c`.
pub fn word_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// A filter for removing English stopwords from token sequences.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The NLTK English list from the `stop-words` crate. Short words such as
    /// `go`, `c` and `r` are not on it, so language names survive.
    pub fn english() -> Self {
        Self {
            stopwords: get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Tokenizes `text` and collapses the surviving tokens into a [`TokenSet`].
    pub fn token_set(&self, text: &str) -> TokenSet {
        word_tokens(text)
            .into_iter()
            .filter(|t| !self.is_stopword(t))
            .collect()
    }
}

/// Set of tokens that remembers first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl TokenSet {
    pub fn insert(&mut self, token: String) -> bool {
        if self.seen.contains(&token) {
            return false;
        }
        self.seen.insert(token.clone());
        self.ordered.push(token);
        true
    }

    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = TokenSet::default();
        for token in iter {
            set.insert(token);
        }
        set
    }
}
