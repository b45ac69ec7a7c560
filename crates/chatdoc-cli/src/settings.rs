//! Merging command-line flags over the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chatdoc_config::Config;
use chatdoc_docx::DocxOptions;
use chatdoc_engine::{ExportOptions, Grammar};

use crate::ConvertArgs;

/// Effective options for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub export: ExportOptions,
    pub grammar: Grammar,
    pub document: DocxOptions,
    pub output_dir: PathBuf,
}

impl Settings {
    /// Flags win over the config, which wins over built-in defaults.
    pub fn resolve(args: &ConvertArgs, config: Config) -> Self {
        let Config {
            output_dir,
            mut export,
            grammar,
            mut document,
        } = config;

        if let Some(filename) = &args.filename {
            export.filename = filename.clone();
        }
        if let Some(title) = &args.title {
            export.title = title.clone();
        }
        if args.no_title {
            export.include_title = false;
        }
        if args.no_timestamp {
            export.include_timestamp = false;
        }
        if args.no_hyperlinks {
            document.hyperlinks = false;
        }
        if document.title.is_empty() {
            document.title = export.title.clone();
        }

        Self {
            export,
            grammar: args.grammar.map(Grammar::from).unwrap_or(grammar),
            document,
            output_dir: args
                .out_dir
                .clone()
                .or(output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Loads `path`, or the default config location when `None`.
///
/// A missing default config means built-in defaults; a missing explicit one
/// is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => {
            let config_path = Config::config_path();
            log::debug!("Config path: {}", config_path.display());
            let config = Config::load()
                .with_context(|| format!("Failed to load {}", config_path.display()))?;
            Ok(config.unwrap_or_default())
        }
    }
}
