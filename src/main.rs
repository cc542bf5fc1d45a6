//! The `minigfm` binary.

use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;

use minigfm::{markdown_to_html_with_plugins, Options, Plugins};

#[derive(Parser)]
#[command(version, about = "Convert a GitHub Flavored Markdown subset to HTML")]
struct Cli {
    /// The Markdown files to convert; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Allow raw HTML and dangerous URLs
    #[arg(long = "unsafe")]
    unsafe_: bool,

    /// Write output to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Syntax highlighting theme for fenced code blocks
    #[cfg(feature = "syntect")]
    #[arg(long, value_name = "THEME")]
    syntax_highlighting: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut input = String::new();
    if cli.files.is_empty() {
        io::stdin().read_to_string(&mut input)?;
    } else {
        for file in &cli.files {
            input.push_str(&fs::read_to_string(file)?);
        }
    }

    let options = Options {
        unsafe_: cli.unsafe_,
    };

    let mut plugins = Plugins::default();
    #[cfg(feature = "syntect")]
    let adapter = cli
        .syntax_highlighting
        .as_deref()
        .map(minigfm::plugins::syntect::SyntectAdapter::new);
    #[cfg(feature = "syntect")]
    if let Some(ref adapter) = adapter {
        plugins.render.codefence_syntax_highlighter = Some(adapter);
    }

    let html = markdown_to_html_with_plugins(&input, &options, &plugins);

    match cli.output {
        Some(path) => fs::write(path, html)?,
        None => io::stdout().write_all(html.as_bytes())?,
    }

    Ok(())
}
