//! Apply command implementation

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, ValueEnum};
use inflekt_core::{Ruleset, Transform};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the apply command
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Transformation to apply (see `inflekt list transforms`)
    #[arg(value_name = "TRANSFORM", value_parser = parse_transform)]
    pub transform: Transform,

    /// Words to transform (default: one per line from stdin)
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Item count for pluralize; a count of exactly 1 keeps the singular
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Separator for parameterize
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Extra JSON or TOML rules file, may be repeated
    #[arg(long, value_name = "FILE")]
    pub rules: Vec<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one result per line
    Text,
    /// JSON array of input/output pairs
    Json,
}

fn parse_transform(s: &str) -> Result<Transform, String> {
    s.parse()
}

impl ApplyArgs {
    /// Execute the apply command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;
        self.check_flags()?;

        log::info!("Applying {}", self.transform);
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let mut rs = inflekt_core::snapshot();
        for path in config.rules.files.iter().chain(&self.rules) {
            load_rules(&mut rs, path)?;
        }

        let words = if self.words.is_empty() {
            read_words(io::stdin().lock())?
        } else {
            self.words.clone()
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.output_format(&config)? {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json if config.output.pretty_json => {
                Box::new(JsonFormatter::new(io::stdout()))
            }
            OutputFormat::Json => Box::new(JsonFormatter::new(io::stdout()).compact()),
        };

        for word in &words {
            formatter.format_result(word, &self.transform_word(&rs, word))?;
        }
        formatter.finish()?;

        log::info!("Transformed {} word(s)", words.len());
        Ok(())
    }

    /// Run the selected transformation, honoring `--count` and `--separator`
    pub fn transform_word(&self, rs: &Ruleset, word: &str) -> String {
        match (self.transform, self.count, self.separator.as_deref()) {
            (Transform::Pluralize, Some(count), _) => rs.pluralize_with_size(word, count),
            (Transform::Parameterize, _, Some(sep)) => rs.parameterize_join(word, sep),
            (transform, _, _) => rs.apply(transform, word),
        }
    }

    fn check_flags(&self) -> Result<()> {
        if self.count.is_some() && self.transform != Transform::Pluralize {
            return Err(CliError::InvalidArgument(format!(
                "--count only applies to pluralize, not {}",
                self.transform
            ))
            .into());
        }
        if self.separator.is_some() && self.transform != Transform::Parameterize {
            return Err(CliError::InvalidArgument(format!(
                "--separator only applies to parameterize, not {}",
                self.transform
            ))
            .into());
        }
        Ok(())
    }

    fn output_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        <OutputFormat as ValueEnum>::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

fn load_rules(rs: &mut Ruleset, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    let count = rs
        .load_file(path)
        .map_err(|e| CliError::RulesError(e.to_string()))?;
    log::info!("Loaded {count} rule(s) from {}", path.display());
    Ok(())
}

/// One word per non-blank line, surrounding whitespace removed
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
