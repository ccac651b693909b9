//! Command-line front end: highlight a file (or stdin) into snippet HTML,
//! or print a theme's stylesheet.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glint::{Highlighter, SnippetOptions, build_snippet, detect_language};
use glint_theme::{Theme, builtin};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "glint", version, about = "Render source snippets as highlighted HTML")]
struct Cli {
    /// Input file; stdin when omitted
    input: Option<PathBuf>,

    /// Language id or alias (detected from the file extension when omitted)
    #[arg(short, long)]
    lang: Option<String>,

    /// Built-in theme name
    #[arg(short, long, default_value = "midnight")]
    theme: String,

    /// Load a TOML theme file instead of a built-in theme
    #[arg(long, value_name = "FILE", conflicts_with = "theme")]
    theme_file: Option<PathBuf>,

    /// Caption rendered with the snippet
    #[arg(long)]
    caption: Option<String>,

    /// Wrap each line in line-number markup
    #[arg(long)]
    line_numbers: bool,

    /// Omit the copy button
    #[arg(long)]
    no_copy: bool,

    /// Emit only the highlighted code body, without snippet chrome
    #[arg(long)]
    plain: bool,

    /// Print the theme stylesheet instead of highlighting
    #[arg(long)]
    css: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Highlight(#[from] glint::Error),
    #[error(transparent)]
    Theme(#[from] glint_theme::ThemeError),
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("glint: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let theme = resolve_theme(&cli)?;
    if cli.css {
        print!("{}", theme.css());
        return Ok(());
    }

    let code = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let language = cli
        .lang
        .clone()
        .or_else(|| {
            cli.input
                .as_deref()
                .and_then(detect_language)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "javascript".to_owned());

    let highlighter = Highlighter::new()?;
    if cli.plain {
        println!("{}", highlighter.highlight(&code, &language)?);
        return Ok(());
    }

    let options = SnippetOptions {
        language,
        theme: Some(theme.name.clone()),
        caption: cli.caption.clone(),
        no_copy: cli.no_copy,
        show_line_numbers: cli.line_numbers,
        ..SnippetOptions::default()
    };
    println!("{}", build_snippet(&highlighter, &code, &options)?);
    Ok(())
}

fn resolve_theme(cli: &Cli) -> Result<Theme, CliError> {
    if let Some(path) = &cli.theme_file {
        let source = fs::read_to_string(path)?;
        return Ok(Theme::from_toml(&source)?);
    }
    builtin::by_name(&cli.theme).ok_or_else(|| CliError::UnknownTheme(cli.theme.clone()))
}
