// Rust guideline compliant 2026-10-19

//! Text statistics: character/word/line counts, character frequencies and the
//! most common words of an input string.
//!
//! Counting rules follow Python-style string semantics so results match what
//! existing MCP clients of the File Analysis server already expect:
//! - words are runs of non-whitespace (Unicode whitespace plus the ASCII
//!   information separators U+001C..U+001F);
//! - lines are universal-newline segments, a trailing break adds no segment;
//! - frequencies are computed over the lower-cased text.

use std::collections::HashMap;
use std::hash::Hash;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Maximum number of entries kept in [`AnalysisResult::top_words`].
pub const TOP_WORDS_LIMIT: usize = 10;

// Letters, numbers and `_` only: combining marks and other connector
// punctuation separate words.
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("word pattern is valid"));

/// Basic counts over the raw (not case-folded) text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TextStatistics {
    pub character_count: usize,
    pub word_count: usize,
    pub line_count: usize,
}

/// Ordered `key -> count` table.
///
/// Entries keep the order they were produced in (first occurrence for the
/// character table, rank for the word table) and serialize as a JSON object
/// in that same order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable(Vec<(String, usize)>);

impl FrequencyTable {
    /// Count for `key`, if present.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, n)| *n)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no key was counted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// Keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, count) in &self.0 {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

/// Result of [`analyze_text`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub statistics: TextStatistics,
    /// Per-character counts over the lower-cased text, complete.
    pub character_frequency: FrequencyTable,
    /// Up to [`TOP_WORDS_LIMIT`] most frequent words, highest count first.
    pub top_words: FrequencyTable,
}

/// Analyze `text` and return its statistics.
///
/// Never fails: empty, whitespace-only and non-ASCII input are all valid.
///
/// # Examples
///
/// ```
/// use file_analysis::analyze_text;
///
/// let result = analyze_text("aa bb aa");
/// assert_eq!(result.statistics.word_count, 3);
/// assert_eq!(result.top_words.get("aa"), Some(2));
/// ```
pub fn analyze_text(text: &str) -> AnalysisResult {
    let statistics = TextStatistics {
        character_count: text.chars().count(),
        word_count: count_words(text),
        line_count: count_lines(text),
    };

    let lowered = text.to_lowercase();

    let character_frequency = FrequencyTable(
        count_in_order(lowered.chars())
            .into_iter()
            .map(|(c, n)| (c.to_string(), n))
            .collect(),
    );

    let mut words = count_in_order(WORD_RE.find_iter(&lowered).map(|m| m.as_str()));
    // `sort_by` is stable, so equal counts keep first-seen order.
    words.sort_by(|a, b| b.1.cmp(&a.1));
    words.truncate(TOP_WORDS_LIMIT);
    let top_words = FrequencyTable(words.into_iter().map(|(w, n)| (w.to_string(), n)).collect());

    tracing::debug!(
        characters = statistics.character_count,
        words = statistics.word_count,
        lines = statistics.line_count,
        "analyzed text"
    );

    AnalysisResult {
        statistics,
        character_frequency,
        top_words,
    }
}

/// Count occurrences, preserving the order in which keys were first seen.
fn count_in_order<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for item in items {
        match index.get(&item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item, 1));
            }
        }
    }
    counts
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

fn count_words(text: &str) -> usize {
    text.split(is_word_separator).filter(|token| !token.is_empty()).count()
}

fn count_lines(text: &str) -> usize {
    let mut lines = 0;
    // True while the current segment has not been closed by a boundary.
    let mut open = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if is_line_boundary(c) {
            if c == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            lines += 1;
            open = false;
        } else {
            open = true;
        }
    }
    if open {
        lines + 1
    } else {
        lines
    }
}
