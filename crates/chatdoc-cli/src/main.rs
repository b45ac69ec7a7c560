mod commands;
mod settings;

use std::path::PathBuf;

use anyhow::Result;
use chatdoc_engine::Grammar;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "chatdoc",
    version,
    about = "Export Markdown chat replies as Word documents"
)]
struct Cli {
    /// Config file to use instead of ~/.config/chatdoc/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a Markdown reply into a .docx file
    Convert(ConvertArgs),

    /// Print the parsed blocks and inline runs of a reply
    Inspect(InspectArgs),

    /// Write a config file holding the built-in defaults
    Init(InitArgs),
}

#[derive(clap::Args, Debug, Default)]
struct ConvertArgs {
    /// Markdown file to read; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write to exactly this file, ignoring --out-dir and --filename
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for the generated file
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Base filename, without extension
    #[arg(long)]
    filename: Option<String>,

    /// Title written as the first heading
    #[arg(long)]
    title: Option<String>,

    /// Leave out the title heading
    #[arg(long)]
    no_title: bool,

    /// Leave out the "Exported" line
    #[arg(long)]
    no_timestamp: bool,

    #[arg(long, value_enum)]
    grammar: Option<GrammarArg>,

    /// Write links as styled text only
    #[arg(long)]
    no_hyperlinks: bool,
}

#[derive(clap::Args, Debug)]
struct InspectArgs {
    /// Markdown file to read; stdin when omitted or `-`
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    grammar: Option<GrammarArg>,
}

#[derive(clap::Args, Debug)]
struct InitArgs {
    /// Replace an existing config file
    #[arg(long)]
    force: bool,
}

/// Block grammar preset.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum GrammarArg {
    /// Every rule: four heading levels and label headings
    Full,
    /// Label headings, three heading levels
    Chat,
    /// Four heading levels, no label headings
    Standalone,
}

impl From<GrammarArg> for Grammar {
    fn from(arg: GrammarArg) -> Self {
        match arg {
            GrammarArg::Full => Grammar::full(),
            GrammarArg::Chat => Grammar::chat(),
            GrammarArg::Standalone => Grammar::standalone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert(args) => {
            let config = settings::load_config(cli.config.as_deref())?;
            let path = commands::convert(&args, config, chrono::Local::now().naive_local())?;
            println!("{}", path.display());
        }
        Command::Inspect(args) => {
            let config = settings::load_config(cli.config.as_deref())?;
            let doc = commands::inspect(&args, &config)?;
            println!("{doc:#?}");
        }
        Command::Init(args) => {
            let path = commands::init_config(cli.config.as_deref(), args.force)?;
            println!("{}", path.display());
        }
    }
    Ok(())
}
