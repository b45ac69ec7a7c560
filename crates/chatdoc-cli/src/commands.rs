use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use chatdoc_config::Config;
use chatdoc_docx::write_docx;
use chatdoc_engine::{Document, Grammar, compose_markdown, export_filename, parse_document};
use chrono::NaiveDateTime;

use crate::{ConvertArgs, InspectArgs, settings::Settings};

/// Writes the default config to `path`, or the standard location for `None`.
///
/// An existing file is only replaced with `force`.
pub fn init_config(path: Option<&Path>, force: bool) -> Result<PathBuf> {
    let config_path = path.map_or_else(Config::config_path, Path::to_path_buf);
    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to replace it)",
            config_path.display()
        );
    }

    let config = Config::default();
    match path {
        Some(path) => config.save_to_path(path),
        None => config.save(),
    }
    .with_context(|| format!("Failed to write {}", config_path.display()))?;

    log::info!("Wrote default config to {}", config_path.display());
    Ok(config_path)
}

/// Reads Markdown from `input`, or stdin for `None` and `-`.
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .context("Failed to read Markdown from stdin")?;
            Ok(markdown)
        }
    }
}

/// Converts the input to a `.docx` file and returns where it was written.
pub fn convert(args: &ConvertArgs, config: Config, now: NaiveDateTime) -> Result<PathBuf> {
    let settings = Settings::resolve(args, config);
    let markdown = read_input(args.input.as_deref())?;

    let composed = compose_markdown(&markdown, &settings.export, now)?;
    let doc = parse_document(&composed, &settings.grammar);
    let bytes = write_docx(&doc, &settings.document).context("Failed to build document")?;

    let path = match &args.output {
        Some(path) => path.clone(),
        None => settings
            .output_dir
            .join(export_filename(&settings.export, now)),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Exported {} block(s) to {}", doc.len(), path.display());
    Ok(path)
}

/// Parses the input without writing anything.
pub fn inspect(args: &InspectArgs, config: &Config) -> Result<Document> {
    let markdown = read_input(args.input.as_deref())?;
    let grammar = args.grammar.map(Grammar::from).unwrap_or(config.grammar);
    Ok(parse_document(&markdown, &grammar))
}
