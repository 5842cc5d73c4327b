//! The normalizer entry points

use crate::options::NormalizeOptions;
use crate::stage::Stage;
use std::borrow::Cow;

/// Normalizer with a fixed set of options
///
/// Construction resolves which stages are enabled; normalizing is then a
/// fold of those stages over the input. The value holds no mutable state
/// and can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    options: NormalizeOptions,
    stages: Vec<Stage>,
}

impl Normalizer {
    /// Create a normalizer with default options
    pub fn new() -> Self {
        Self::with_options(NormalizeOptions::default())
    }

    /// Create a normalizer with custom options
    pub fn with_options(options: NormalizeOptions) -> Self {
        let stages: Vec<Stage> = Stage::ALL
            .into_iter()
            .filter(|stage| stage.is_enabled(&options))
            .collect();

        tracing::debug!(
            stages = ?stages.iter().map(Stage::name).collect::<Vec<_>>(),
            "normalizer configured"
        );

        Self { options, stages }
    }

    /// Options this normalizer was built with
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Stages that will run, in pipeline order
    pub fn enabled_stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Normalize `text`, borrowing it when no stage changes anything
    pub fn normalize_cow<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.stages
            .iter()
            .fold(Cow::Borrowed(text), |acc, stage| stage.apply(acc))
    }

    /// Normalize `text` into a new string
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_cow(text).into_owned()
    }

    /// Normalize many inputs, preserving their order
    #[cfg(feature = "parallel")]
    pub fn normalize_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.normalize(text.as_ref()))
            .collect()
    }

    /// Normalize many inputs, preserving their order
    #[cfg(not(feature = "parallel"))]
    pub fn normalize_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str>,
    {
        texts
            .iter()
            .map(|text| self.normalize(text.as_ref()))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize `text` with the given options
pub fn normalize(text: &str, options: &NormalizeOptions) -> String {
    Normalizer::with_options(*options).normalize(text)
}

/// Normalize `text` with default options
pub fn normalize_default(text: &str) -> String {
    normalize(text, &NormalizeOptions::default())
}

/// Normalize many inputs with the given options
#[cfg(feature = "parallel")]
pub fn normalize_batch<S>(texts: &[S], options: &NormalizeOptions) -> Vec<String>
where
    S: AsRef<str> + Sync,
{
    Normalizer::with_options(*options).normalize_batch(texts)
}

/// Normalize many inputs with the given options
#[cfg(not(feature = "parallel"))]
pub fn normalize_batch<S>(texts: &[S], options: &NormalizeOptions) -> Vec<String>
where
    S: AsRef<str>,
{
    Normalizer::with_options(*options).normalize_batch(texts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stages() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.enabled_stages(),
            &[
                Stage::Diacritics,
                Stage::Markers,
                Stage::VerseNumbers,
                Stage::Tatweel,
                Stage::Punctuation,
                Stage::Whitespace,
            ]
        );
    }

    #[test]
    fn test_no_stages_when_everything_off() {
        let normalizer = Normalizer::with_options(NormalizeOptions::none());
        assert!(normalizer.enabled_stages().is_empty());
        assert!(matches!(
            normalizer.normalize_cow("بِسْمِ"),
            Cow::Borrowed("بِسْمِ")
        ));
    }

    #[test]
    fn test_cow_borrows_clean_input() {
        let normalizer = Normalizer::new();
        assert!(matches!(
            normalizer.normalize_cow("بسم الله"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_free_functions_agree() {
        let text = "۞ الْحَمْدُ لِلَّهِ ﴿٢﴾";
        let options = NormalizeOptions::default();
        assert_eq!(normalize(text, &options), normalize_default(text));
        assert_eq!(normalize_default(text), "الحمد لله");
    }

    #[test]
    fn test_batch_preserves_order() {
        let inputs = vec!["بَ", "  تُ  ", "ثِ،"];
        let out = normalize_batch(&inputs, &NormalizeOptions::default());
        assert_eq!(out, vec!["ب", "ت", "ث"]);
    }

    #[test]
    fn test_batch_empty() {
        let inputs: Vec<String> = Vec::new();
        assert!(Normalizer::new().normalize_batch(&inputs).is_empty());
    }

    #[test]
    fn test_options_accessor() {
        let normalizer = Normalizer::with_options(NormalizeOptions::matching());
        assert!(normalizer.options().strip_hamza);
        assert!(normalizer.enabled_stages().contains(&Stage::StripHamza));
    }

    #[test]
    fn test_normalizer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Normalizer>();
    }
}
