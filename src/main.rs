//! # textcanvas
//!
//! Line-oriented front end: reads drawing commands from a script or stdin and
//! prints the canvas after each one.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use textcanvas::{is_single_cell, DrawOptions, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for textcanvas.
#[derive(Debug, Clone, Parser)]
#[command(name = "textcanvas")]
#[command(about = "Draw lines, rectangles and flood fills on an ASCII canvas")]
#[command(version)]
struct CliArgs {
    /// Read commands from this file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Character used for lines and rectangles
    #[arg(long, default_value = "X")]
    ink: char,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only canvases
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "textcanvas=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = CliArgs::parse();
    if !is_single_cell(args.ink) {
        anyhow::bail!("ink '{}' must occupy exactly one cell", args.ink);
    }
    let options = DrawOptions {
        ink: args.ink,
        ..DrawOptions::default()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.script {
        Some(path) => {
            tracing::info!("Running script {}", path.display());
            let file = File::open(&path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            run(BufReader::new(file), &mut out, options, false)
        }
        None => run(io::stdin().lock(), &mut out, options, true),
    }
}

/// Feed every input line to a fresh session until EOF or `Q`
fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    options: DrawOptions,
    interactive: bool,
) -> anyhow::Result<()> {
    let mut session = Session::new(options);
    let prompt = |out: &mut W| -> io::Result<()> {
        if interactive {
            write!(out, "enter command: ")?;
            out.flush()?;
        }
        Ok(())
    };

    prompt(out)?;
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }
        match session.execute(&line) {
            Ok(Some(canvas)) => writeln!(out, "{canvas}")?,
            Ok(None) => {}
            Err(e) => {
                tracing::debug!("Rejected {:?}: {}", line.trim(), e);
                writeln!(out, "{e}")?;
            }
        }
        prompt(out)?;
    }
    Ok(())
}
