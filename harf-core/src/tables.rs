//! Code-point tables for the normalization rules
//!
//! Every class is stored as inclusive ranges or explicit code points so the
//! boundaries can be audited as data.

use std::ops::RangeInclusive;

/// Plain alif (ا)
pub const ALIF: char = '\u{0627}';
/// Arabic yeh (ي)
pub const YEH: char = '\u{064A}';
/// Arabic kaf (ك)
pub const KAF: char = '\u{0643}';
/// Lam (ل)
pub const LAM: char = '\u{0644}';
/// Waw (و)
pub const WAW: char = '\u{0648}';
/// Teh marbuta (ة)
pub const TEH_MARBUTA: char = '\u{0629}';
/// Superscript (dagger) alif (ٰ)
pub const SUPERSCRIPT_ALIF: char = '\u{0670}';
/// Tatweel / kashida (ـ)
pub const TATWEEL: char = '\u{0640}';

/// Tanween, harakat, shadda, sukun and the other combining marks
/// U+064B..=U+065F (21 code points)
pub const DIACRITIC_MARKS: &[RangeInclusive<char>] = &['\u{064B}'..='\u{065F}'];

/// Alif with madda above (آ)
pub const ALIF_MADDA: &[char] = &['\u{0622}'];

/// Alif wasla (ٱ)
pub const ALIF_WASLA: &[char] = &['\u{0671}'];

/// Alif with wavy hamza above (ٲ) and below (ٳ)
pub const ALIF_WAVY_HAMZA: &[char] = &['\u{0672}', '\u{0673}'];

/// Farsi yeh (ی) and yeh barree (ے)
pub const FARSI_YEH: &[char] = &['\u{06CC}', '\u{06D2}'];

/// Keheh, the Farsi/Urdu kaf (ک)
pub const FARSI_KAF: &[char] = &['\u{06A9}'];

/// Quranic annotation block: small high letters, end of ayah (U+06DD),
/// rub el hizb (U+06DE), sajdah (U+06E9), small waw/yeh and friends
pub const QURANIC_ANNOTATIONS: &[RangeInclusive<char>] = &['\u{06D6}'..='\u{06ED}'];

/// Ornate parentheses around verse numbers (﴾ ﴿)
pub const ORNATE_PARENS: &[char] = &['\u{FD3E}', '\u{FD3F}'];

/// Arabic-Indic and Extended Arabic-Indic decimal digits
pub const ARABIC_DIGITS: &[RangeInclusive<char>] =
    &['\u{0660}'..='\u{0669}', '\u{06F0}'..='\u{06F9}'];

/// Tatweel as a deletable class
pub const TATWEEL_CLASS: &[char] = &[TATWEEL];

/// ASCII and Arabic punctuation removed by the punctuation stage
pub const PUNCTUATION: &[char] = &[
    '.', ',', ';', ':', '!', '?', '\u{2026}', // ellipsis
    '\u{060C}', // Arabic comma
    '\u{061B}', // Arabic semicolon
    '\u{061F}', // Arabic question mark
];

/// Hamza forms written differently in Uthmani orthography:
/// standalone hamza, alif-hamza above, alif-hamza below, yeh-hamza.
/// Waw-hamza (U+0624) is spelled the same in both and is not listed.
pub const HAMZA_CARRIERS: &[char] = &['\u{0621}', '\u{0623}', '\u{0625}', '\u{0626}'];

/// Alif maqsura (ى)
pub const ALIF_MAQSURA: &[char] = &['\u{0649}'];

/// Whitespace as understood by the collapse stage.
///
/// This is the ECMAScript `\s` class rather than Unicode `White_Space`:
/// it includes U+FEFF and excludes U+0085.
pub const WHITESPACE: &[RangeInclusive<char>] = &[
    '\t'..='\r',
    ' '..=' ',
    '\u{00A0}'..='\u{00A0}',
    '\u{1680}'..='\u{1680}',
    '\u{2000}'..='\u{200A}',
    '\u{2028}'..='\u{2029}',
    '\u{202F}'..='\u{202F}',
    '\u{205F}'..='\u{205F}',
    '\u{3000}'..='\u{3000}',
    '\u{FEFF}'..='\u{FEFF}',
];

/// Check whether `ch` falls inside any of `ranges`
#[inline]
pub fn in_ranges(ranges: &[RangeInclusive<char>], ch: char) -> bool {
    ranges.iter().any(|range| range.contains(&ch))
}

/// Check whether `ch` is whitespace for the collapse stage
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    in_ranges(WHITESPACE, ch)
}
