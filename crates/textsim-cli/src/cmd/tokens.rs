//! `tsim tokens` — show the tokens the set and vector metrics see.

use crate::output::{OutputMode, render};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use textsim_core::tokenize;

#[derive(Args, Debug)]
#[command(
    about = "Show the tokens the set and vector metrics see",
    long_about = "Tokenize a text the way the Jaccard and cosine metrics do:\n\
                  lowercase, then extract maximal runs of word characters\n\
                  (letters, digits, underscore).",
    after_help = "EXAMPLES:\n    # One token per line\n    tsim tokens \"Hello, world!\"\n\n\
                  # Machine-readable output\n    tsim tokens \"Hello, world!\" --json"
)]
pub struct TokensArgs {
    /// Text to tokenize.
    pub text: String,
}

/// JSON envelope for `tsim tokens` output.
#[derive(Debug, Serialize)]
pub struct TokensOutput {
    /// Number of tokens extracted.
    pub count: usize,
    /// Tokens in input order, duplicates preserved.
    pub tokens: Vec<String>,
}

/// Execute `tsim tokens <TEXT>`.
///
/// # Errors
///
/// Returns an error only if output rendering fails.
pub fn run_tokens(args: &TokensArgs, output: OutputMode) -> anyhow::Result<()> {
    let tokens = tokenize(&args.text);
    let out = TokensOutput {
        count: tokens.len(),
        tokens,
    };
    render(output, &out, render_human)
}

fn render_human(out: &TokensOutput, w: &mut dyn Write) -> io::Result<()> {
    for token in &out.tokens {
        writeln!(w, "{token}")?;
    }
    Ok(())
}
