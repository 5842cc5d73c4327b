//! The fixed, ordered pipeline stages and their rule lists

use crate::options::{Flag, NormalizeOptions};
use crate::rules::{apply_all, Atom, Pattern, Rule};
use crate::tables::{self, ALIF, LAM, SUPERSCRIPT_ALIF, TEH_MARBUTA, WAW, YEH};
use std::borrow::Cow;
use std::fmt;

// Alif + superscript alif must collapse before the lone superscript alif
// is rewritten, otherwise the pair becomes two alifs.
static DIACRITIC_RULES: &[Rule] = &[
    Rule::delete("harakat", Pattern::Ranges(tables::DIACRITIC_MARKS)),
    Rule::replace("alif-madda", Pattern::Chars(tables::ALIF_MADDA), "\u{0627}"),
    Rule::replace("alif-wasla", Pattern::Chars(tables::ALIF_WASLA), "\u{0627}"),
    Rule::replace(
        "alif-wavy-hamza",
        Pattern::Chars(tables::ALIF_WAVY_HAMZA),
        "\u{0627}",
    ),
    Rule::replace(
        "alif-superscript-alif",
        Pattern::Sequence(&[Atom::One(ALIF), Atom::One(SUPERSCRIPT_ALIF)]),
        "\u{0627}",
    ),
    Rule::replace(
        "superscript-alif",
        Pattern::Chars(&[SUPERSCRIPT_ALIF]),
        "\u{0627}",
    ),
    Rule::replace("farsi-yeh", Pattern::Chars(tables::FARSI_YEH), "\u{064A}"),
    Rule::replace("farsi-kaf", Pattern::Chars(tables::FARSI_KAF), "\u{0643}"),
];

static MARKER_RULES: &[Rule] = &[Rule::delete(
    "quranic-annotations",
    Pattern::Ranges(tables::QURANIC_ANNOTATIONS),
)];

static VERSE_NUMBER_RULES: &[Rule] = &[
    Rule::delete("ornate-parens", Pattern::Chars(tables::ORNATE_PARENS)),
    Rule::delete("arabic-digits", Pattern::Ranges(tables::ARABIC_DIGITS)),
];

static TATWEEL_RULES: &[Rule] = &[Rule::delete(
    "tatweel",
    Pattern::Chars(tables::TATWEEL_CLASS),
)];

static PUNCTUATION_RULES: &[Rule] = &[Rule::delete(
    "punctuation",
    Pattern::Chars(tables::PUNCTUATION),
)];

// Carrier deletion and maqsura folding touch disjoint code points; keep
// them in this order regardless.
static STRIP_HAMZA_RULES: &[Rule] = &[
    Rule::delete("hamza-carriers", Pattern::Chars(tables::HAMZA_CARRIERS)),
    Rule::replace("alif-maqsura", Pattern::Chars(tables::ALIF_MAQSURA), "\u{064A}"),
    Rule::replace(
        "uthmani-waw-teh-marbuta",
        Pattern::Sequence(&[Atom::One(WAW), Atom::Optional(ALIF), Atom::One(TEH_MARBUTA)]),
        "\u{0627}\u{0629}",
    ),
    Rule::replace(
        "double-yeh",
        Pattern::Sequence(&[Atom::One(YEH), Atom::One(YEH)]),
        "\u{064A}",
    ),
    Rule::replace(
        "alif-double-lam",
        Pattern::Sequence(&[Atom::One(ALIF), Atom::One(LAM), Atom::One(LAM)]),
        "\u{0627}\u{0644}",
    ),
];

/// One step of the normalization pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Harakat removal plus alif, yeh and kaf folding
    Diacritics,
    /// Quranic annotation block removal, gated by `markers` or `small_letters`
    Markers,
    /// Ornate brackets and Arabic-Indic digits
    VerseNumbers,
    /// Kashida removal
    Tatweel,
    /// Sentence punctuation removal
    Punctuation,
    /// Hamza carriers and Uthmani spelling folds
    StripHamza,
    /// Whitespace run collapsing and trimming
    Whitespace,
}

impl Stage {
    /// Pipeline order
    pub const ALL: [Stage; 7] = [
        Stage::Diacritics,
        Stage::Markers,
        Stage::VerseNumbers,
        Stage::Tatweel,
        Stage::Punctuation,
        Stage::StripHamza,
        Stage::Whitespace,
    ];

    /// Stable stage name
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Diacritics => "diacritics",
            Stage::Markers => "markers",
            Stage::VerseNumbers => "verse-numbers",
            Stage::Tatweel => "tatweel",
            Stage::Punctuation => "punctuation",
            Stage::StripHamza => "strip-hamza",
            Stage::Whitespace => "whitespace",
        }
    }

    /// Flags that switch the stage on; any one of them is enough
    pub fn flags(&self) -> &'static [Flag] {
        match self {
            Stage::Diacritics => &[Flag::Diacritics],
            Stage::Markers => &[Flag::Markers, Flag::SmallLetters],
            Stage::VerseNumbers => &[Flag::VerseNumbers],
            Stage::Tatweel => &[Flag::Tatweel],
            Stage::Punctuation => &[Flag::Punctuation],
            Stage::StripHamza => &[Flag::StripHamza],
            Stage::Whitespace => &[Flag::CollapseWhitespace],
        }
    }

    /// Whether `options` switch this stage on
    pub fn is_enabled(&self, options: &NormalizeOptions) -> bool {
        self.flags().iter().any(|flag| options.get(*flag))
    }

    /// Ordered rewrite rules; empty for the whitespace stage
    pub fn rules(&self) -> &'static [Rule] {
        match self {
            Stage::Diacritics => DIACRITIC_RULES,
            Stage::Markers => MARKER_RULES,
            Stage::VerseNumbers => VERSE_NUMBER_RULES,
            Stage::Tatweel => TATWEEL_RULES,
            Stage::Punctuation => PUNCTUATION_RULES,
            Stage::StripHamza => STRIP_HAMZA_RULES,
            Stage::Whitespace => &[],
        }
    }

    /// Whether the stage can only remove code points
    pub fn is_deletion_only(&self) -> bool {
        match self {
            Stage::Whitespace => false,
            _ => self.rules().iter().all(Rule::is_deletion),
        }
    }

    /// Run the stage unconditionally
    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let before = text.len();
        let out = match self {
            Stage::Whitespace => collapse_whitespace(text),
            _ => apply_all(self.rules(), text),
        };
        tracing::trace!(
            stage = self.name(),
            before,
            after = out.len(),
            changed = matches!(out, Cow::Owned(_)),
            "stage applied"
        );
        out
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Replace each whitespace run with one space and trim both ends
fn collapse_whitespace(text: Cow<'_, str>) -> Cow<'_, str> {
    if is_collapsed(&text) {
        return text;
    }

    let mut out = String::with_capacity(text.len());
    for word in text.split(tables::is_whitespace).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    Cow::Owned(out)
}

/// True when collapsing would not change `text`
fn is_collapsed(text: &str) -> bool {
    if text.starts_with(tables::is_whitespace) || text.ends_with(tables::is_whitespace) {
        return false;
    }

    let mut prev_space = false;
    for ch in text.chars() {
        if ch == ' ' {
            if prev_space {
                return false;
            }
            prev_space = true;
        } else if tables::is_whitespace(ch) {
            return false;
        } else {
            prev_space = false;
        }
    }
    true
}
