//! Command-line front end for `contactinfo`.
//!
//! ```text
//! contactinfo render page.html --data members.yaml --styling
//! contactinfo fields 1 --data members.yaml --json
//! ```
//!
//! Parsing and execution are split so tests can drive [`run`] in-process
//! with any writer.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use contactinfo::store::{MemoryStore, Op, RecordId};
use contactinfo::{Config, Engine, Language, Record};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "contactinfo", version, about = "Fill tagged regions with record fields")]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render every region of a content file.
    Render(RenderArgs),
    /// List the fields of one record.
    Fields(FieldsArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Content file, or `-` for stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Store data file (.json, .yaml, .yml).
    #[arg(short, long)]
    pub data: PathBuf,

    /// Config file (.json, .yaml, .yml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Wrap output in CSS styling spans.
    #[arg(long)]
    pub styling: bool,

    /// CSS class prefix.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Region tag name.
    #[arg(long)]
    pub tag: Option<String>,

    /// Diagnostic language.
    #[arg(long, value_enum)]
    pub lang: Option<LangArg>,

    /// Match query values with SQL LIKE semantics.
    #[arg(long)]
    pub like: bool,

    /// Only render when this rendering context is configured.
    #[arg(long)]
    pub context: Option<String>,
}

#[derive(Debug, Args)]
pub struct FieldsArgs {
    /// Record id.
    #[arg(allow_negative_numbers = true)]
    pub id: i64,

    /// Store data file (.json, .yaml, .yml).
    #[arg(short, long)]
    pub data: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LangArg {
    En,
    De,
}

impl From<LangArg> for Language {
    fn from(lang: LangArg) -> Self {
        match lang {
            LangArg::En => Language::En,
            LangArg::De => Language::De,
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Executes a parsed command, writing its output to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Command::Render(args) => render(args, out),
        Command::Fields(args) => fields(args, out),
    }
}

fn render(args: RenderArgs, out: &mut impl Write) -> Result<()> {
    let store = load_store(&args.data)?;
    let config = build_config(&args)?;
    let text = read_input(&args.input)?;

    let engine = Engine::new(store, config).context("failed to set up renderer")?;
    let rendered = match &args.context {
        Some(context) => {
            let mut text = text;
            let changed = engine
                .prepare_content(context, &mut text)
                .context("failed to render content")?;
            debug!(context = %context, changed, "prepared content");
            text
        }
        None => engine.transform(&text).context("failed to render content")?,
    };

    out.write_all(rendered.as_bytes())?;
    Ok(())
}

fn fields(args: FieldsArgs, out: &mut impl Write) -> Result<()> {
    let store = load_store(&args.data)?;
    let record = Record::fetch(&store, RecordId(args.id))
        .with_context(|| format!("failed to fetch record {}", args.id))?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, record.fields())?;
        writeln!(out)?;
        return Ok(());
    }

    let name_width = record.fields().iter().map(|f| f.name.len()).max().unwrap_or(0);
    let title_width = record.fields().iter().map(|f| f.title.len()).max().unwrap_or(0);
    for field in record.fields() {
        writeln!(
            out,
            "{:<name_width$}  {:<title_width$}  {}",
            field.name, field.title, field.value
        )?;
    }
    Ok(())
}

fn build_config(args: &RenderArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if args.styling {
        config = config.with_styling(true);
    }
    if let Some(prefix) = &args.prefix {
        config = config.with_css_prefix(prefix);
    }
    if let Some(tag) = &args.tag {
        config = config.with_tag(tag);
    }
    if let Some(lang) = args.lang {
        config = config.with_language(lang.into());
    }
    if args.like {
        config = config.with_match_mode(Op::Like);
    }
    Ok(config)
}

fn load_store(path: &Path) -> Result<MemoryStore> {
    MemoryStore::load(path).with_context(|| format!("failed to load data {}", path.display()))
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
