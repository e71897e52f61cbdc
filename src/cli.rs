//! CLI argument parsing for letterpress.
//!
//! Uses clap derive macros. The tool intentionally takes no flags or
//! subcommands; parsing exists so `--help` and `--version` behave like any
//! other CLI and so stray arguments are rejected with a usage message.

use clap::Parser;

/// Letterpress: turn development-session memory letters into blog drafts.
///
/// Finds the newest `letter_*.md` in `.memory/`, asks the Anthropic API to
/// restructure it into a blog post with frontmatter, and writes the result
/// to `drafts/`.
#[derive(Parser, Debug)]
#[command(name = "letterpress")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
