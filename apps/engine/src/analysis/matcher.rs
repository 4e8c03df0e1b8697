//! Word-boundary literal matcher — the single matching primitive the engine uses.
//!
//! Keywords are treated as literal text, never as patterns, so terms like
//! "C++", ".NET" and "CI/CD" need no escaping. Boundary semantics are explicit
//! instead of delegated to a regex engine: a match is rejected when a word
//! character in the keyword sits flush against a word character in the text.

/// Word characters for boundary purposes (letters, digits, underscore).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive single-char comparison (full Unicode lowercasing).
fn chars_eq_ci(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Finds the first case-insensitive whole-word occurrence of `keyword` in
/// `text`, returning `(start, end)` byte offsets into `text`.
///
/// Boundary rules: if the keyword starts with a word character, the preceding
/// text character (if any) must be a non-word character; likewise for the
/// trailing edge. Keywords whose edge is punctuation ("C++", ".NET") only
/// constrain the side that ends in a word character.
pub fn find_first(keyword: &str, text: &str) -> Option<(usize, usize)> {
    if keyword.is_empty() {
        return None;
    }

    let first_is_word = keyword.chars().next().is_some_and(is_word_char);
    let last_is_word = keyword.chars().next_back().is_some_and(is_word_char);

    for (start, _) in text.char_indices() {
        let Some(end) = match_at(keyword, text, start) else {
            continue;
        };

        if first_is_word {
            if let Some(prev) = text[..start].chars().next_back() {
                if is_word_char(prev) {
                    continue;
                }
            }
        }
        if last_is_word {
            if let Some(next) = text[end..].chars().next() {
                if is_word_char(next) {
                    continue;
                }
            }
        }

        return Some((start, end));
    }

    None
}

/// Counts non-overlapping whole-word occurrences of `keyword` in `text`.
pub fn count(keyword: &str, text: &str) -> usize {
    let mut total = 0;
    let mut offset = 0;
    while let Some((start, end)) = find_first(keyword, &text[offset..]) {
        debug_assert!(end > start);
        total += 1;
        offset += end;
    }
    total
}

/// Returns true if `keyword` occurs as a whole word anywhere in `text`.
pub fn contains_word(keyword: &str, text: &str) -> bool {
    find_first(keyword, text).is_some()
}

/// Attempts a case-insensitive literal match of `keyword` at byte offset
/// `start`; returns the end offset on success.
fn match_at(keyword: &str, text: &str, start: usize) -> Option<usize> {
    let mut text_chars = text[start..].char_indices();
    let mut end = start;
    for kc in keyword.chars() {
        let (i, tc) = text_chars.next()?;
        if !chars_eq_ci(kc, tc) {
            return None;
        }
        end = start + i + tc.len_utf8();
    }
    Some(end)
}
