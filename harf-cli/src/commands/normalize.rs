//! Normalize command implementation

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, NormalizedDocument, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use harf_core::{Flag, NormalizeOptions, Normalizer};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Source label used when reading stdin
const STDIN_SOURCE: &str = "<stdin>";

/// Arguments for the normalize command
#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Starting set of options
    #[arg(short, long, value_enum, default_value = "default", conflicts_with = "options")]
    pub preset: Preset,

    /// Partial options object overlaid on the defaults, e.g. '{"stripHamza":true}'
    #[arg(long, value_name = "JSON")]
    pub options: Option<String>,

    /// Turn a flag on (repeatable)
    #[arg(short, long, value_name = "FLAG")]
    pub enable: Vec<Flag>,

    /// Turn a flag off (repeatable, applied after --enable)
    #[arg(short, long, value_name = "FLAG")]
    pub disable: Vec<Flag>,

    /// Shorthand for --enable strip-hamza
    #[arg(long)]
    pub strip_hamza: bool,

    /// Normalize each line on its own instead of the whole document
    #[arg(long)]
    pub per_line: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Normalized text, one line per input
    Text,
    /// JSON array with source and character counts
    Json,
}

/// Option presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Preset {
    /// Every stage except hamza stripping
    Default,
    /// No stages; output equals input
    #[value(name = "none")]
    Identity,
    /// Defaults plus hamza stripping, for Uthmani-vs-modern matching
    Matching,
}

impl Preset {
    /// Options the preset stands for
    pub fn options(&self) -> NormalizeOptions {
        match self {
            Preset::Default => NormalizeOptions::default(),
            Preset::Identity => NormalizeOptions::none(),
            Preset::Matching => NormalizeOptions::matching(),
        }
    }
}

impl NormalizeArgs {
    /// Execute the normalize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting normalization");
        log::debug!("Arguments: {:?}", self);

        let options = self.resolve_options()?;
        let normalizer = Normalizer::with_options(options);
        log::debug!("Enabled stages: {:?}", normalizer.enabled_stages());

        let mut formatter = self.formatter()?;

        if self.input.is_empty() {
            log::info!("Reading from stdin");
            let text = FileReader::read_stdin()?;
            formatter.format_document(&self.normalize_document(&normalizer, STDIN_SOURCE, &text))?;
        } else {
            for document in self.normalize_files(&normalizer)? {
                formatter.format_document(&document)?;
            }
        }

        formatter.finish()
    }

    /// Build the effective options: preset or JSON, then --enable, then --disable
    pub fn resolve_options(&self) -> Result<NormalizeOptions> {
        let mut options = match &self.options {
            Some(json) => NormalizeOptions::from_json(json).map_err(CliError::from)?,
            None => self.preset.options(),
        };

        for flag in &self.enable {
            options.set(*flag, true);
        }
        if self.strip_hamza {
            options.set(Flag::StripHamza, true);
        }
        for flag in &self.disable {
            options.set(*flag, false);
        }

        Ok(options)
    }

    /// Read and normalize every resolved file, keeping input order
    fn normalize_files(&self, normalizer: &Normalizer) -> Result<Vec<NormalizedDocument>> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Resolved {} file(s)", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let documents = files
            .par_iter()
            .map(|path| -> Result<NormalizedDocument> {
                let source = path.display().to_string();
                let text = FileReader::read_text(path)?;
                let document = self.normalize_document(normalizer, &source, &text);
                log::debug!(
                    "{}: {} -> {} chars",
                    source,
                    document.input_chars,
                    document.output_chars
                );
                progress.file_completed(&source);
                Ok(document)
            })
            .collect::<Result<Vec<_>>>()?;

        progress.finish();
        Ok(documents)
    }

    /// Normalize one input, either whole or line by line
    pub fn normalize_document(
        &self,
        normalizer: &Normalizer,
        source: &str,
        text: &str,
    ) -> NormalizedDocument {
        let normalized = if self.per_line {
            let lines: Vec<&str> = text.lines().collect();
            normalizer.normalize_batch(&lines).join("\n")
        } else {
            normalizer.normalize(text)
        };
        NormalizedDocument::new(source, text, normalized)
    }

    /// Pick the formatter and destination
    fn formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
