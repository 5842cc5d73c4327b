//! Patterns matched by rewrite rules

use crate::tables::in_ranges;
use std::ops::RangeInclusive;

/// One element of a sequence pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    /// Exactly this code point
    One(char),
    /// This code point or nothing; tried greedily first
    Optional(char),
}

/// What a rule looks for in the working string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Any single code point inside one of the ranges
    Ranges(&'static [RangeInclusive<char>]),
    /// Any single code point from the list
    Chars(&'static [char]),
    /// A fixed multi-code-point sequence
    Sequence(&'static [Atom]),
}

impl Pattern {
    /// Find the leftmost match at or after byte offset `from`.
    ///
    /// Returns the byte span of the match. Empty matches are never
    /// reported, so a replacement loop always makes progress.
    pub fn find(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        let rest = &text[from..];
        match *self {
            Pattern::Ranges(ranges) => rest
                .char_indices()
                .find(|&(_, ch)| in_ranges(ranges, ch))
                .map(|(i, ch)| (from + i, from + i + ch.len_utf8())),
            Pattern::Chars(chars) => rest
                .char_indices()
                .find(|(_, ch)| chars.contains(ch))
                .map(|(i, ch)| (from + i, from + i + ch.len_utf8())),
            Pattern::Sequence(atoms) => rest.char_indices().find_map(|(i, _)| {
                match_atoms(atoms, &rest[i..])
                    .filter(|&len| len > 0)
                    .map(|len| (from + i, from + i + len))
            }),
        }
    }

    /// Check whether the pattern occurs anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.find(text, 0).is_some()
    }
}

/// Byte length of the match of `atoms` anchored at the start of `rest`
fn match_atoms(atoms: &[Atom], rest: &str) -> Option<usize> {
    let Some((atom, tail)) = atoms.split_first() else {
        return Some(0);
    };

    match *atom {
        Atom::One(ch) => rest
            .strip_prefix(ch)
            .and_then(|after| match_atoms(tail, after))
            .map(|len| len + ch.len_utf8()),
        Atom::Optional(ch) => rest
            .strip_prefix(ch)
            .and_then(|after| match_atoms(tail, after))
            .map(|len| len + ch.len_utf8())
            .or_else(|| match_atoms(tail, rest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAW_TEH: &[Atom] = &[
        Atom::One('و'),
        Atom::Optional('ا'),
        Atom::One('ة'),
    ];

    #[test]
    fn test_ranges_find() {
        const RANGES: &[RangeInclusive<char>] = &['a'..='c'];
        let pattern = Pattern::Ranges(RANGES);

        assert_eq!(pattern.find("xxbyy", 0), Some((2, 3)));
        assert_eq!(pattern.find("xxbyya", 3), Some((5, 6)));
        assert_eq!(pattern.find("xyz", 0), None);
    }

    #[test]
    fn test_chars_find_multibyte() {
        let pattern = Pattern::Chars(&['ب']);
        // 'ا' is two bytes in UTF-8
        assert_eq!(pattern.find("اب", 0), Some((2, 4)));
    }

    #[test]
    fn test_sequence_with_optional_present() {
        let pattern = Pattern::Sequence(WAW_TEH);
        let text = "الصلواة";
        let (start, end) = pattern.find(text, 0).unwrap();
        assert_eq!(&text[start..end], "واة");
    }

    #[test]
    fn test_sequence_with_optional_absent() {
        let pattern = Pattern::Sequence(WAW_TEH);
        let text = "الصلوة";
        let (start, end) = pattern.find(text, 0).unwrap();
        assert_eq!(&text[start..end], "وة");
    }

    #[test]
    fn test_sequence_requires_every_mandatory_atom() {
        let pattern = Pattern::Sequence(WAW_TEH);
        assert!(!pattern.is_match("واه"));
        assert!(!pattern.is_match("ة"));
        assert!(!pattern.is_match(""));
    }

    #[test]
    fn test_sequence_restarts_after_failed_prefix() {
        let pattern = Pattern::Sequence(WAW_TEH);
        let text = "ووة";
        let (start, end) = pattern.find(text, 0).unwrap();
        assert_eq!(&text[start..end], "وة");
        assert_eq!(start, 'و'.len_utf8());
    }

    #[test]
    fn test_all_optional_sequence_never_matches_empty() {
        let pattern = Pattern::Sequence(&[Atom::Optional('x')]);
        assert_eq!(pattern.find("abc", 0), None);
        assert_eq!(pattern.find("axc", 0), Some((1, 2)));
    }
}
