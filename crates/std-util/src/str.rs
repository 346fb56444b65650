//! Identifier case helpers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Separator,
    Other,
}

impl CharClass {
    fn of(ch: char) -> CharClass {
        if ch == '_' || ch == '-' || ch.is_whitespace() {
            CharClass::Separator
        } else if ch.is_uppercase() {
            CharClass::Upper
        } else if ch.is_lowercase() {
            CharClass::Lower
        } else if ch.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// Splits an identifier into words wherever the character class changes.
///
/// A run of capitals followed by a lowercase letter gives its last capital to
/// the next word, so `HTTPServer` splits into `HTTP` and `Server`. Letters and
/// digits never share a word. Separators (`_`, `-`, whitespace) end the current
/// word and are dropped.
///
/// ```
/// use std_util::str::split_camel_case;
///
/// assert_eq!(split_camel_case("userId"), ["user", "Id"]);
/// assert_eq!(split_camel_case("address1"), ["address", "1"]);
/// assert_eq!(split_camel_case("HTTPServer"), ["HTTP", "Server"]);
/// ```
pub fn split_camel_case(src: &str) -> Vec<&str> {
    let mut words = vec![];
    let mut chars = src.char_indices().peekable();

    let Some(&(_, first)) = chars.peek() else {
        return words;
    };

    let mut start = 0;
    let mut current = CharClass::of(first);
    // Byte offset of the previous character, needed to move the last capital
    // of an uppercase run into the following word.
    let mut prev = 0;

    for (pos, ch) in chars {
        let class = CharClass::of(ch);

        if class == current {
            prev = pos;
            continue;
        }

        if class == CharClass::Lower && current == CharClass::Upper {
            if prev != start {
                words.push(&src[start..prev]);
                start = prev;
            }
        } else {
            if current != CharClass::Separator && start < pos {
                words.push(&src[start..pos]);
            }
            start = pos;
        }

        current = class;
        prev = pos;
    }

    if current != CharClass::Separator && start < src.len() {
        words.push(&src[start..]);
    }

    words
}
