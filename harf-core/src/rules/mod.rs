//! Rewrite rules
//!
//! A rule pairs a [`Pattern`] with a replacement string. Applying a rule
//! replaces every non-overlapping match in a single left-to-right pass;
//! replaced output is never rescanned by the same rule.

pub mod pattern;

pub use pattern::{Atom, Pattern};

use std::borrow::Cow;

/// A single ordered rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Short identifier used in logs and listings
    pub name: &'static str,
    /// What to look for
    pub pattern: Pattern,
    /// What to put in its place (empty for deletions)
    pub replacement: &'static str,
}

impl Rule {
    /// Rule that deletes every match
    pub const fn delete(name: &'static str, pattern: Pattern) -> Self {
        Self {
            name,
            pattern,
            replacement: "",
        }
    }

    /// Rule that substitutes every match
    pub const fn replace(name: &'static str, pattern: Pattern, replacement: &'static str) -> Self {
        Self {
            name,
            pattern,
            replacement,
        }
    }

    /// Whether the rule only removes code points
    pub fn is_deletion(&self) -> bool {
        self.replacement.is_empty()
    }

    /// Apply the rule, borrowing the input untouched when nothing matches
    pub fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let Some(first) = self.pattern.find(&text, 0) else {
            return text;
        };

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;
        let mut next = Some(first);

        while let Some((start, end)) = next {
            out.push_str(&text[cursor..start]);
            out.push_str(self.replacement);
            cursor = end;
            next = self.pattern.find(&text, cursor);
        }
        out.push_str(&text[cursor..]);

        Cow::Owned(out)
    }
}

/// Fold an ordered rule list over `text`
pub fn apply_all<'a>(rules: &[Rule], text: Cow<'a, str>) -> Cow<'a, str> {
    rules.iter().fold(text, |acc, rule| rule.apply(acc))
}
