use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use std::cell::RefCell;

pub const PATTERN_CACHE_LIMIT: usize = 200;

thread_local! {
    static PATTERN_CACHE: RefCell<IndexMap<String, Regex>> = RefCell::new(IndexMap::new());
}

pub fn cached_regex(pattern: &str) -> Option<Regex> {
    let hit = PATTERN_CACHE.with(|cache| cache.borrow().get(pattern).cloned());
    if hit.is_some() {
        return hit;
    }
    let compiled = match RegexBuilder::new(pattern).case_insensitive(true).multi_line(true).build()
    {
        Ok(regex) => regex,
        Err(err) => {
            tracing::error!("pattern {pattern:?} failed to compile: {err}");
            return None;
        }
    };
    PATTERN_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        while cache.len() >= PATTERN_CACHE_LIMIT {
            cache.shift_remove_index(0);
        }
        cache.insert(pattern.to_string(), compiled.clone());
    });
    Some(compiled)
}

pub fn clear_pattern_cache() {
    PATTERN_CACHE.with(|cache| cache.borrow_mut().clear());
}

pub fn pattern_cache_len() -> usize {
    PATTERN_CACHE.with(|cache| cache.borrow().len())
}

fn whole_word_pattern(phrase: &str) -> String {
    let body = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[\s\-]+");
    format!(r"(?:^|[^\p{{L}}\p{{N}}]){body}(?:[^\p{{L}}\p{{N}}]|$)")
}

pub fn contains_whole_word(haystack: &str, phrase: &str) -> bool {
    if phrase.trim().is_empty() {
        return false;
    }
    cached_regex(&whole_word_pattern(phrase)).map(|regex| regex.is_match(haystack)).unwrap_or(false)
}

pub fn count_whole_words(haystack: &str, phrases: &[&str]) -> usize {
    phrases.iter().filter(|phrase| contains_whole_word(haystack, phrase)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_substring_matches() {
        assert!(!contains_whole_word("discovering new sounds", "disco"));
        assert!(contains_whole_word("a disco night", "disco"));
        assert!(contains_whole_word("DISCO", "disco"));
        assert!(contains_whole_word("late-night disco, please", "disco"));
    }

    #[test]
    fn matches_multi_word_phrases_across_spacing() {
        assert!(contains_whole_word("some hip-hop beats", "hip hop"));
        assert!(contains_whole_word("some hip  hop beats", "hip hop"));
        assert!(!contains_whole_word("chip hopping", "hip hop"));
    }

    #[test]
    fn escapes_regex_metacharacters() {
        assert!(contains_whole_word("smooth r&b groove", "r&b"));
        assert!(!contains_whole_word("anything", "a.y"));
    }

    #[test]
    fn cache_stays_bounded_and_clearing_keeps_results() {
        clear_pattern_cache();
        for index in 0..(PATTERN_CACHE_LIMIT + 25) {
            contains_whole_word("word", &format!("word{index}"));
        }
        assert_eq!(pattern_cache_len(), PATTERN_CACHE_LIMIT);

        let before = contains_whole_word("smooth jazz night", "jazz");
        clear_pattern_cache();
        assert_eq!(pattern_cache_len(), 0);
        assert_eq!(contains_whole_word("smooth jazz night", "jazz"), before);
    }
}
