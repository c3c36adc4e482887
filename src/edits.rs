// edits.rs - bounded edit-distance candidate generation
// Generates every string reachable from a word by one or two single-character
// edits over the fixed lowercase alphabet a-z.

use ahash::AHashSet;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// All strings obtained by deleting one character from `word`.
pub fn deletes(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = AHashSet::new();
    for i in 0..chars.len() {
        let mut candidate = String::with_capacity(word.len());
        candidate.extend(chars.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, c)| c));
        out.insert(candidate);
    }
    out
}

/// All strings obtained by swapping one adjacent pair of characters.
///
/// The original word is not filtered out: swapping a doubled letter (as in
/// "aa") reproduces the input, and that candidate is kept.
pub fn transposes(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = AHashSet::new();
    if chars.len() < 2 {
        return out;
    }
    for i in 0..chars.len() - 1 {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        out.insert(swapped.into_iter().collect());
    }
    out
}

/// All strings obtained by substituting one character with a letter a-z.
///
/// The unchanged input is excluded, so `word` is never a member of its own
/// replace set.
pub fn replaces(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = AHashSet::new();
    for i in 0..chars.len() {
        for &letter in ALPHABET {
            let mut replaced = chars.clone();
            replaced[i] = letter as char;
            let candidate: String = replaced.into_iter().collect();
            if candidate != word {
                out.insert(candidate);
            }
        }
    }
    out
}

/// All strings obtained by inserting a letter a-z at any position,
/// including before the first character and after the last.
pub fn inserts(word: &str) -> AHashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut out = AHashSet::new();
    for i in 0..=chars.len() {
        for &letter in ALPHABET {
            let mut inserted: Vec<char> = Vec::with_capacity(chars.len() + 1);
            inserted.extend_from_slice(&chars[..i]);
            inserted.push(letter as char);
            inserted.extend_from_slice(&chars[i..]);
            out.insert(inserted.into_iter().collect());
        }
    }
    out
}

/// The complete one-edit frontier: union of delete, insert, replace and
/// (when `allow_transpose` is set) transpose candidates.
pub fn edits_within_one(word: &str, allow_transpose: bool) -> AHashSet<String> {
    let mut out = deletes(word);
    out.extend(inserts(word));
    out.extend(replaces(word));
    if allow_transpose {
        out.extend(transposes(word));
    }
    out
}

/// The two-edit frontier: one-edit candidates of every one-edit candidate.
///
/// Transpositions are enabled at both depths unconditionally, which is the
/// behavior the suggestion ranking relies on. No vocabulary
/// filtering happens here; the result grows roughly with the square of
/// 26 * len(word), so callers must not assume a bounded size.
pub fn edits_within_two(word: &str) -> AHashSet<String> {
    let mut out = AHashSet::new();
    for candidate in edits_within_one(word, true) {
        out.extend(edits_within_one(&candidate, true));
    }
    out
}
