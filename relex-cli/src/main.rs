mod acceptance;
mod automata;
mod dot;
mod fmt;
mod lex;
mod search;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "relex",
    version,
    about = "Regular expressions, NFAs and longest-match lexing"
)]
pub struct RelexArgs {
    /// Suppress progress logging, printing results only
    #[arg(long, global = true)]
    pub no_log: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Test whether each line of the input files is accepted by the pattern
    #[command(name = "match")]
    Match(MatchArgs),
    /// List the matches of the pattern inside a file
    Search(SearchArgs),
    /// Export the pattern's automaton as a Graphviz digraph
    Dot(DotArgs),
    /// Parse, validate and re-emit an automaton description
    Fmt(FmtArgs),
    /// Tokenize a file with a lexicon
    Lex(LexArgs),
}

/// Where the automaton comes from: an inline regular expression, or an automaton
/// description file.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct Source {
    /// Compile this regular expression
    #[arg(long)]
    pub regex: Option<String>,
    /// Load this automaton description file
    #[arg(long)]
    pub nfa: Option<PathBuf>,
}

#[derive(Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub source: Source,
    /// Files whose lines are tested one by one
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: Source,
    /// The file to search in
    pub file: PathBuf,
    /// Stop after the first match
    #[arg(long)]
    pub greedy: bool,
    /// Resume the scan inside earlier matches
    #[arg(long)]
    pub overlap: bool,
}

#[derive(Args)]
pub struct DotArgs {
    #[command(flatten)]
    pub source: Source,
    /// Write the graph here instead of to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct FmtArgs {
    /// The automaton description to reformat
    pub file: PathBuf,
}

#[derive(Args)]
pub struct LexArgs {
    /// The lexicon describing the patterns, one "regex TAB token-name" rule per line
    pub lexicon: PathBuf,
    /// The file to tokenize
    pub file: PathBuf,
}

fn main() -> ExitCode {
    let args = RelexArgs::parse();
    let result = match &args.command {
        Command::Match(cmd) => acceptance::run(&args, cmd),
        Command::Search(cmd) => search::run(cmd),
        Command::Dot(cmd) => dot::run(cmd),
        Command::Fmt(cmd) => fmt::run(cmd),
        Command::Lex(cmd) => lex::run(&args, cmd),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
