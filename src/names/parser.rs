//! Structured name parsing
//!
//! Assigns the tokens produced by [`super::split_name`] to name parts.
//! The flow mirrors how people actually write names: an optional comma
//! splits the string into either `last, first` or `first last, suffix`
//! form, and within each part tokens are assigned positionally with
//! recognized titles and suffixes peeled off the ends.

use crate::models::PersonName;
use crate::names::{are_suffixes, is_an_initial, is_roman_numeral, is_suffix, is_title};
use crate::names::{join_pieces, split_name};

/// Result of parsing one name string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedName {
    /// Recognized leading title, e.g. `Dr.`
    pub title: String,
    /// First (given) name
    pub first: String,
    /// Middle name or names
    pub middle: String,
    /// Last name (surname)
    pub last: String,
    /// Recognized trailing suffixes, e.g. `Jr.`
    pub suffix: String,
    /// Nickname found in quotes or parentheses
    pub nickname: String,
    /// True when nothing could be extracted from the input
    pub unparsable: bool,
}

impl ParsedName {
    /// Convert to the entity name shape; the nickname is not part of it
    #[must_use]
    pub fn to_person_name(&self) -> PersonName {
        PersonName {
            prefix: self.title.clone(),
            first: self.first.clone(),
            middle: self.middle.clone(),
            last: self.last.clone(),
            suffix: self.suffix.clone(),
        }
    }
}

/// Token lists accumulated during parsing, joined at the end
#[derive(Default)]
struct Accumulator {
    title: Vec<String>,
    first: Vec<String>,
    middle: Vec<String>,
    last: Vec<String>,
    suffix: Vec<String>,
    nickname: String,
}

impl Accumulator {
    fn finish(self) -> ParsedName {
        let unparsable = self.title.is_empty()
            && self.first.is_empty()
            && self.middle.is_empty()
            && self.last.is_empty()
            && self.suffix.is_empty()
            && self.nickname.is_empty();
        ParsedName {
            title: self.title.join(" "),
            first: self.first.join(" "),
            middle: self.middle.join(" "),
            last: self.last.join(" "),
            suffix: self.suffix.join(" "),
            nickname: self.nickname,
            unparsable,
        }
    }
}

/// Parse a name string into structured parts.
///
/// Never fails: empty or unrecognizable input yields all-empty parts
/// with the `unparsable` flag set.
#[must_use]
pub fn parse_name(name: &str) -> ParsedName {
    let mut acc = Accumulator::default();
    let working = extract_nickname(name, &mut acc.nickname);
    let working = collapse_whitespace(&working);

    let parts: Vec<&str> = working.split(',').map(str::trim).collect();
    if parts.len() == 1 {
        parse_undelimited(&mut acc, parts[0]);
    } else {
        parse_comma_delimited(&mut acc, &parts);
    }
    acc.finish()
}

/// `title first middle... last suffix...` with no commas
fn parse_undelimited(acc: &mut Accumulator, part: &str) {
    let pieces = join_pieces(split_name(part));
    let len = pieces.len();
    for (i, piece) in pieces.iter().enumerate() {
        let next = pieces.get(i + 1);

        // a title must be followed by a name, unless it is all there is
        if is_title(piece) && (next.is_some() || len == 1) && acc.first.is_empty() {
            acc.title.push(piece.clone());
            continue;
        }
        if acc.first.is_empty() {
            if len == 1 && !acc.nickname.is_empty() {
                acc.last.push(piece.clone());
                continue;
            }
            acc.first.push(piece.clone());
            continue;
        }
        let rest = &pieces[i + 1..];
        let next_is_trailing_numeral = next.is_some_and(|n| is_roman_numeral(n))
            && i + 2 == len
            && !is_an_initial(piece);
        if are_suffixes(rest.iter().map(String::as_str)) || next_is_trailing_numeral {
            acc.last.push(piece.clone());
            acc.suffix.extend(rest.iter().cloned());
            break;
        }
        if next.is_none() {
            acc.last.push(piece.clone());
            continue;
        }
        acc.middle.push(piece.clone());
    }
}

/// Comma forms: either `first ... last, suffix [, suffix]` when every
/// token after the first comma is a suffix, or `last [suffix], title
/// first middle... [, suffix]` surname-first ordering otherwise.
fn parse_comma_delimited(acc: &mut Accumulator, parts: &[&str]) {
    let tokens_before_comma = split_name(parts[0]);
    let suffix_comma = are_suffixes(parts[1].split_whitespace()) && tokens_before_comma.len() > 1;

    if suffix_comma {
        acc.suffix
            .extend(parts[1..].iter().map(|part| (*part).to_string()));
        let pieces = join_pieces(tokens_before_comma);
        let len = pieces.len();
        for (i, piece) in pieces.iter().enumerate() {
            let next = pieces.get(i + 1);
            if is_title(piece) && (next.is_some() || len == 1) && acc.first.is_empty() {
                acc.title.push(piece.clone());
                continue;
            }
            if acc.first.is_empty() {
                acc.first.push(piece.clone());
                continue;
            }
            let rest = &pieces[i + 1..];
            if are_suffixes(rest.iter().map(String::as_str)) {
                acc.last.push(piece.clone());
                // suffixes inside the name part come before the comma ones
                acc.suffix.splice(0..0, rest.iter().cloned());
                break;
            }
            if next.is_none() {
                acc.last.push(piece.clone());
                continue;
            }
            acc.middle.push(piece.clone());
        }
    } else {
        // the first piece is always a last name, even if it looks like
        // a suffix
        let lastname_pieces = join_pieces(tokens_before_comma);
        for piece in lastname_pieces {
            if is_suffix(&piece) && !acc.last.is_empty() {
                acc.suffix.push(piece);
            } else {
                acc.last.push(piece);
            }
        }

        let post_comma_pieces = join_pieces(split_name(parts[1]));
        let len = post_comma_pieces.len();
        for (i, piece) in post_comma_pieces.iter().enumerate() {
            let next = post_comma_pieces.get(i + 1);
            if is_title(piece) && (next.is_some() || len == 1) && acc.first.is_empty() {
                acc.title.push(piece.clone());
                continue;
            }
            if acc.first.is_empty() {
                acc.first.push(piece.clone());
                continue;
            }
            if is_suffix(piece) {
                acc.suffix.push(piece.clone());
                continue;
            }
            acc.middle.push(piece.clone());
        }

        acc.suffix.extend(
            parts[2..]
                .iter()
                .filter(|part| !part.is_empty())
                .map(|part| (*part).to_string()),
        );
    }
}

/// Remove `"..."` and `(...)` segments, returning the remainder.
///
/// Extracted segments become the nickname, joined by spaces when more
/// than one is present.
fn extract_nickname(name: &str, nickname: &mut String) -> String {
    let mut remainder = String::with_capacity(name.len());
    let mut rest = name;
    loop {
        let double_quote = rest.find('"').map(|at| (at, '"'));
        let paren = rest.find('(').map(|at| (at, ')'));
        let first_opener = match (double_quote, paren) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (opener, None) | (None, opener) => opener,
        };
        let Some((open, closer)) = first_opener else {
            remainder.push_str(rest);
            break;
        };
        remainder.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find(closer) {
            Some(close) => {
                let segment = after[..close].trim();
                if !segment.is_empty() {
                    if !nickname.is_empty() {
                        nickname.push(' ');
                    }
                    nickname.push_str(segment);
                }
                rest = &after[close + 1..];
            }
            None => {
                // unterminated; keep the rest as ordinary text
                remainder.push_str(after);
                break;
            }
        }
    }
    remainder
}

fn collapse_whitespace(name: &str) -> String {
    let mut collapsed = String::with_capacity(name.len());
    let mut last_was_space = true;
    for c in name.chars() {
        if c.is_whitespace() {
            if !last_was_space {
                collapsed.push(' ');
            }
            last_was_space = true;
        } else {
            collapsed.push(c);
            last_was_space = false;
        }
    }
    collapsed.trim_end().to_string()
}
