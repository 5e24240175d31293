/// Locale-aware title collation
///
/// Titles are compared the way the Indonesian (`id`) locale orders them:
/// the alphabet is plain Latin A-Z, so accented letters sort together with
/// their base letter instead of after `z` as raw code points would.
///
/// The comparison uses three levels:
/// 1. base weights (canonical decomposition, marks removed, lowercased,
///    letters without a decomposition folded onto Latin letters), with
///    spaces before punctuation before digits before letters
/// 2. accents (unaccented before accented)
/// 3. case (lowercase before uppercase)

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary weight group, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Group {
    Space,
    Punctuation,
    Digit,
    Letter,
}

impl Group {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            Group::Space
        } else if c.is_numeric() {
            Group::Digit
        } else if c.is_alphabetic() {
            Group::Letter
        } else {
            Group::Punctuation
        }
    }
}

/// Lowercase letters that carry a stroke or are ligatures and so survive
/// NFD unchanged. They collate as the Latin letters they fold to.
fn fold(c: char) -> Option<&'static str> {
    match c {
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ß' => Some("ss"),
        'þ' => Some("th"),
        'ø' => Some("o"),
        'ł' => Some("l"),
        'đ' => Some("d"),
        'ı' => Some("i"),
        _ => None,
    }
}

/// Precomputed sort key for one title
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(Group, char)>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<bool>,
}

impl CollationKey {
    pub fn new(title: &str) -> Self {
        let mut key = Self {
            primary: Vec::with_capacity(title.len()),
            secondary: Vec::with_capacity(title.len()),
            tertiary: Vec::with_capacity(title.len()),
        };

        for c in title.nfd() {
            if is_combining_mark(c) {
                // Marks attach to the preceding base letter
                if let Some(marks) = key.secondary.last_mut() {
                    marks.push(c);
                }
                continue;
            }

            let upper = c.is_uppercase();
            for lower in c.to_lowercase() {
                match fold(lower) {
                    Some(letters) => {
                        let start = key.primary.len();
                        for letter in letters.chars() {
                            key.push(letter, upper);
                        }
                        // The folded letter itself counts as its accent
                        key.secondary[start].push(lower);
                    }
                    None => key.push(lower, upper),
                }
            }
        }

        key
    }

    fn push(&mut self, c: char, upper: bool) {
        self.primary.push((Group::of(c), c));
        self.secondary.push(Vec::new());
        self.tertiary.push(upper);
    }
}
