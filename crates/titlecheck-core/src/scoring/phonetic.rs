//! Metaphone phonetic encoding.
//!
//! The whole title is encoded as one string: word breaks become a single
//! space in the code, and the rules for a string start (silent `kn`/`wr`/...
//! pairs, kept leading vowel, initial `wh` and `x`) apply only to the first
//! word. "Namaskar" and "Namascar" both encode to `NMSKR`; "Times of India"
//! encodes to `TMS F NT`.

/// Letter pairs whose first letter is silent at the start of a title.
const SILENT_INITIAL_PAIRS: [&[u8; 2]; 5] = [b"kn", b"gn", b"pn", b"wr", b"ae"];

/// Encodes a title with the Metaphone algorithm.
///
/// Non-ASCII letters, digits and punctuation are dropped before encoding.
/// A title with no encodable letters yields an empty string.
#[must_use]
pub fn metaphone(input: &str) -> String {
    encode(&normalize(input))
}

/// Returns `true` when both titles have the same non-empty Metaphone code.
#[must_use]
pub fn sounds_alike(a: &str, b: &str) -> bool {
    let code = metaphone(a);
    !code.is_empty() && code == metaphone(b)
}

/// Lower-cased ASCII letters, with words separated by exactly one space.
fn normalize(input: &str) -> Vec<u8> {
    let mut letters = Vec::with_capacity(input.len());
    for word in input.split_whitespace() {
        let start = letters.len();
        if start > 0 {
            letters.push(b' ');
        }
        letters.extend(
            word.bytes()
                .filter(u8::is_ascii_alphabetic)
                .map(|b| b.to_ascii_lowercase()),
        );
        if letters.len() == start + 1 && start > 0 {
            // Word had no letters; drop its separator.
            letters.pop();
        }
    }
    letters
}

fn is_vowel(c: Option<u8>) -> bool {
    matches!(c, Some(b'a' | b'e' | b'i' | b'o' | b'u'))
}

fn is_front_vowel(c: Option<u8>) -> bool {
    matches!(c, Some(b'e' | b'i' | b'y'))
}

fn is_break(c: Option<u8>) -> bool {
    matches!(c, None | Some(b' '))
}

fn encode(word: &[u8]) -> String {
    let word = if word.len() >= 2 && SILENT_INITIAL_PAIRS.iter().any(|p| word.starts_with(*p)) {
        &word[1..]
    } else {
        word
    };

    let mut code = String::with_capacity(word.len());
    let mut i = 0;

    while i < word.len() {
        let c = word[i];
        let prev = i.checked_sub(1).map(|p| word[p]);
        let next = word.get(i + 1).copied();
        let after = word.get(i + 2).copied();

        // Doubled letters collapse, except "cc" which can encode as "KS".
        if prev == Some(c) && c != b'c' {
            i += 1;
            continue;
        }

        match c {
            b'a' | b'e' | b'i' | b'o' | b'u' => {
                if i == 0 {
                    code.push(c.to_ascii_uppercase() as char);
                }
            }
            b'b' => {
                // Silent in a trailing "mb" ("dumb").
                if !(prev == Some(b'm') && is_break(next)) {
                    code.push('B');
                }
            }
            b'c' => {
                if next == Some(b'i') && after == Some(b'a') {
                    code.push('X');
                } else if next == Some(b'h') {
                    code.push(if prev == Some(b's') { 'K' } else { 'X' });
                    i += 1;
                } else if is_front_vowel(next) {
                    if prev != Some(b's') {
                        code.push('S');
                    }
                } else {
                    code.push('K');
                }
            }
            b'd' => {
                if next == Some(b'g') && is_front_vowel(after) {
                    code.push('J');
                    i += 2;
                } else {
                    code.push('T');
                }
            }
            b'f' | b'j' | b'l' | b'm' | b'n' | b'r' => code.push(c.to_ascii_uppercase() as char),
            b'g' => {
                if next == Some(b'h') && !is_vowel(after) {
                    // Silent "gh" ("night").
                    i += 1;
                } else if next == Some(b'n')
                    && (is_break(after)
                        || (word.get(i + 2..i + 4) == Some(&b"ed"[..])
                            && is_break(word.get(i + 4).copied())))
                {
                    // Silent "gn"/"gned" ending ("sign").
                } else if is_front_vowel(next) && prev != Some(b'g') {
                    code.push('J');
                } else {
                    code.push('K');
                }
            }
            b'h' => {
                if !(is_vowel(prev) && !is_vowel(next)) {
                    code.push('H');
                }
            }
            b'k' => {
                if prev != Some(b'c') {
                    code.push('K');
                }
            }
            b'p' => {
                if next == Some(b'h') {
                    code.push('F');
                    i += 1;
                } else {
                    code.push('P');
                }
            }
            b'q' => code.push('K'),
            b's' => {
                if next == Some(b'h') {
                    code.push('X');
                    i += 1;
                } else if next == Some(b'i') && matches!(after, Some(b'o' | b'a')) {
                    code.push('X');
                    i += 2;
                } else {
                    code.push('S');
                }
            }
            b't' => {
                if next == Some(b'i') && matches!(after, Some(b'o' | b'a')) {
                    code.push('X');
                } else if next == Some(b'h') {
                    code.push('0');
                    i += 1;
                } else if !(next == Some(b'c') && after == Some(b'h')) {
                    code.push('T');
                }
            }
            b'v' => code.push('F'),
            b'w' => {
                if i == 0 && next == Some(b'h') {
                    code.push('W');
                    i += 1;
                } else if is_vowel(next) {
                    code.push('W');
                }
            }
            b'x' => {
                if i == 0 {
                    code.push('S');
                } else {
                    code.push_str("KS");
                }
            }
            b'y' => {
                if is_vowel(next) {
                    code.push('Y');
                }
            }
            b'z' => code.push('S'),
            b' ' => {
                if !code.is_empty() && !code.ends_with(' ') {
                    code.push(' ');
                }
            }
            _ => {}
        }

        i += 1;
    }

    code.truncate(code.trim_end().len());
    code
}
