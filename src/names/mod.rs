//! Human-name parsing
//!
//! Personal names arrive either as plain text (`David Gregory Smith`)
//! or in GEDCOM slash notation where the slashes quote a multi-word
//! segment (`David /Gregory Smith/`). This module owns the tokenizer
//! and the recognized-token tables; [`parser`] assigns tokens to name
//! parts.

pub mod parser;

pub use parser::{ParsedName, parse_name};

/// Recognized title tokens, compared case-insensitively without periods
const TITLES: &[&str] = &[
    "dr", "mr", "mrs", "ms", "miss", "rev", "fr", "prof", "sir", "dame", "hon", "capt", "col",
    "gen", "lt", "maj", "sgt", "cmdr", "judge", "rabbi", "pastor", "dean",
];

/// Recognized suffix tokens, compared case-insensitively without periods
const SUFFIXES: &[&str] = &[
    "jr", "sr", "esq", "md", "phd", "dds", "jd", "dvm", "cpa", "ret",
];

/// Conjunctions that glue their neighbors into one piece
const CONJUNCTIONS: &[&str] = &["&", "and", "et", "e", "y", "of", "the", "und"];

/// Surname prefixes that glue onto the following piece
const SURNAME_PREFIXES: &[&str] = &[
    "van", "von", "vander", "vanden", "der", "den", "de", "del", "della", "di", "da", "dos",
    "du", "la", "le", "st", "ste", "ten", "ter",
];

fn normalize(token: &str) -> String {
    token.trim_matches('.').to_lowercase()
}

/// True when the token is a recognized title
#[must_use]
pub fn is_title(token: &str) -> bool {
    TITLES.contains(&normalize(token).as_str())
}

/// True when the token is a recognized suffix or a roman numeral
#[must_use]
pub fn is_suffix(token: &str) -> bool {
    let normalized = normalize(token);
    SUFFIXES.contains(&normalized.as_str()) || is_roman_numeral(token)
}

/// True when every token is a suffix (and there is at least one)
#[must_use]
pub fn are_suffixes<'a>(tokens: impl IntoIterator<Item = &'a str>) -> bool {
    let mut any = false;
    for token in tokens {
        if !is_suffix(token) {
            return false;
        }
        any = true;
    }
    any
}

/// True for tokens like `III` or `iv`
#[must_use]
pub fn is_roman_numeral(token: &str) -> bool {
    let token = token.trim_matches('.');
    !token.is_empty()
        && token
            .chars()
            .all(|c| matches!(c.to_ascii_uppercase(), 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'))
        && token.len() > 1
}

/// True for single-letter initials, with or without a period
#[must_use]
pub fn is_an_initial(token: &str) -> bool {
    let token = token.strip_suffix('.').unwrap_or(token);
    token.len() == 1 && token.chars().all(char::is_alphabetic)
}

fn is_conjunction(token: &str) -> bool {
    CONJUNCTIONS.contains(&normalize(token).as_str())
}

fn is_surname_prefix(token: &str) -> bool {
    SURNAME_PREFIXES.contains(&normalize(token).as_str())
}

/// Tokenize a name, treating `/.../ ` segments as single tokens.
///
/// Splits on whitespace outside slash-delimited segments; a slash
/// segment becomes one token with the slashes stripped, regardless of
/// embedded spaces. An unterminated slash degrades to a plain
/// whitespace split of the remainder. Stray commas and spaces are
/// trimmed off every token.
#[must_use]
pub fn split_name(name: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = name;
    while let Some(open) = rest.find('/') {
        let (before, after) = rest.split_at(open);
        push_plain_tokens(&mut tokens, before);
        let after = &after[1..];
        match after.find('/') {
            Some(close) => {
                push_token(&mut tokens, &after[..close]);
                rest = &after[close + 1..];
            }
            None => {
                // unterminated slash segment
                push_plain_tokens(&mut tokens, after);
                rest = "";
            }
        }
    }
    push_plain_tokens(&mut tokens, rest);
    tokens
}

fn push_plain_tokens(tokens: &mut Vec<String>, text: &str) {
    for token in text.split_whitespace() {
        push_token(tokens, token);
    }
}

fn push_token(tokens: &mut Vec<String>, token: &str) {
    let token = token.trim_matches([' ', ',']);
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
}

/// Join conjunction and surname-prefix tokens onto their neighbors.
///
/// `Juan y Garcia` becomes one piece, as does `van der Berg` when the
/// prefix is not in first position (a leading `Van` may be a first
/// name).
pub(crate) fn join_pieces(tokens: Vec<String>) -> Vec<String> {
    let mut pieces = tokens;
    // conjunctions first: prev + conj + next collapse into one piece
    let mut i = 1;
    while i + 1 < pieces.len() {
        if is_conjunction(&pieces[i]) && pieces.len() > 3 {
            let joined = format!("{} {} {}", pieces[i - 1], pieces[i], pieces[i + 1]);
            pieces.splice(i - 1..=i + 1, [joined]);
            i = i.max(1);
        } else {
            i += 1;
        }
    }
    // surname prefixes glue forward, rightmost first
    let mut i = pieces.len().saturating_sub(1);
    while i >= 1 {
        if is_surname_prefix(&pieces[i]) && i + 1 < pieces.len() {
            let joined = format!("{} {}", pieces[i], pieces[i + 1]);
            pieces.splice(i..=i + 1, [joined]);
        }
        i -= 1;
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_slash_segment_is_one_token() {
        assert_eq!(split_name("/Tri Minh/ Doung"), vec!["Tri Minh", "Doung"]);
        assert_eq!(
            split_name("David /Gregory Smith/"),
            vec!["David", "Gregory Smith"]
        );
    }

    #[test]
    fn test_split_multiple_slash_segments() {
        assert_eq!(
            split_name("/David/ /Gregory/ /Smith/"),
            vec!["David", "Gregory", "Smith"]
        );
        assert_eq!(
            split_name("/David/ Gregory /Smith/"),
            vec!["David", "Gregory", "Smith"]
        );
    }

    #[test]
    fn test_split_without_slashes_is_whitespace_split() {
        assert_eq!(
            split_name("David Gregory Smith"),
            vec!["David", "Gregory", "Smith"]
        );
        assert_eq!(
            split_name("David /Gregory/ Smith"),
            vec!["David", "Gregory", "Smith"]
        );
    }

    #[test]
    fn test_split_unterminated_slash_degrades() {
        assert_eq!(split_name("David /Gregory Smith"), vec![
            "David", "Gregory", "Smith"
        ]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_name("").is_empty());
        assert!(split_name("   ").is_empty());
    }

    #[test]
    fn test_token_classification() {
        assert!(is_title("Dr"));
        assert!(is_title("Dr."));
        assert!(is_title("REV"));
        assert!(!is_title("David"));

        assert!(is_suffix("Jr"));
        assert!(is_suffix("Jr."));
        assert!(is_suffix("III"));
        assert!(is_suffix("PhD"));
        assert!(!is_suffix("Smith"));

        assert!(is_roman_numeral("III"));
        assert!(is_roman_numeral("iv"));
        assert!(!is_roman_numeral("I"));
        assert!(!is_roman_numeral("Ford"));

        assert!(is_an_initial("J"));
        assert!(is_an_initial("J."));
        assert!(!is_an_initial("Jo"));
    }

    #[test]
    fn test_are_suffixes_requires_all_and_some() {
        assert!(are_suffixes(["Jr", "III"]));
        assert!(!are_suffixes(["Jr", "Smith"]));
        assert!(!are_suffixes(std::iter::empty::<&str>()));
    }

    #[test]
    fn test_join_pieces_conjunction() {
        let pieces = join_pieces(
            ["Juan", "y", "Garcia", "Vega"]
                .map(str::to_string)
                .to_vec(),
        );
        assert_eq!(pieces, vec!["Juan y Garcia", "Vega"]);
    }

    #[test]
    fn test_join_pieces_surname_prefix() {
        let pieces = join_pieces(
            ["Johannes", "van", "der", "Berg"]
                .map(str::to_string)
                .to_vec(),
        );
        assert_eq!(pieces, vec!["Johannes", "van der Berg"]);
    }
}
