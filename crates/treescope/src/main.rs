//! treescope CLI - Main entry point

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use treescope_core::{
    parse_source, CaptureQueryRunner, Reporter, ScopeClassifier, SourceBuffer, TreeSerializer,
    DEFAULT_FUNCTION_KIND,
};

/// Default capture pattern: identifiers bound inside declarations.
const DEFAULT_PATTERN: &str = "(declaration (identifier) @id)";

#[derive(Parser)]
#[command(name = "treescope")]
#[command(version)]
#[command(about = "Inspect tree-sitter syntax trees and classify declaration scopes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Grammars this build links against.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Grammar {
    C,
    Python,
}

impl Grammar {
    fn language(self) -> tree_sitter::Language {
        match self {
            Grammar::C => tree_sitter_c::LANGUAGE.into(),
            Grammar::Python => tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// Kind tag of string-literal nodes in this grammar.
    fn string_kind(self) -> &'static str {
        match self {
            Grammar::C => "string_literal",
            Grammar::Python => "string",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run a capture query and classify each capture as global or local
    Scopes {
        /// Input source file
        file: PathBuf,

        /// Grammar to parse with
        #[arg(short, long, value_enum, default_value = "c")]
        language: Grammar,

        /// Capture pattern (tree-sitter query syntax)
        #[arg(short, long, default_value = DEFAULT_PATTERN)]
        pattern: String,

        /// Node kind that delimits function scope
        #[arg(long, default_value = DEFAULT_FUNCTION_KIND)]
        sentinel: String,
    },

    /// Serialize the syntax tree to JSON
    Dump {
        /// Input source file
        file: PathBuf,

        /// Grammar to parse with
        #[arg(short, long, value_enum, default_value = "c")]
        language: Grammar,
    },

    /// Print the root node's S-expression
    Sexp {
        /// Input source file
        file: PathBuf,

        /// Grammar to parse with
        #[arg(short, long, value_enum, default_value = "c")]
        language: Grammar,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "treescope=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scopes {
            file,
            language,
            pattern,
            sentinel,
        } => scopes(&file, language, &pattern, &sentinel),
        Commands::Dump { file, language } => dump(&file, language),
        Commands::Sexp { file, language } => sexp(&file, language),
    }
}

fn read_and_parse(
    file: &Path,
    grammar: Grammar,
) -> Result<(SourceBuffer, tree_sitter::Language, tree_sitter::Tree)> {
    let buffer =
        SourceBuffer::from_path(file).with_context(|| format!("reading {}", file.display()))?;
    let language = grammar.language();
    let tree = parse_source(&language, &buffer)
        .with_context(|| format!("parsing {}", file.display()))?;
    if tree.root_node().has_error() {
        tracing::warn!(file = %file.display(), "source contains syntax errors; results cover the recovered tree");
    }
    Ok((buffer, language, tree))
}

fn scopes(file: &Path, grammar: Grammar, pattern: &str, sentinel: &str) -> Result<()> {
    let (buffer, language, tree) = read_and_parse(file, grammar)?;

    let runner = CaptureQueryRunner::new(&language, pattern)?;
    let captures = runner.run(tree.root_node(), buffer.as_bytes());
    tracing::debug!(captures = captures.len(), "query evaluated");

    let classifier = ScopeClassifier::for_language(&language, sentinel);
    let reporter = Reporter::new(&buffer, &classifier);
    let mut stdout = std::io::stdout().lock();
    reporter.report(&captures, &mut stdout)?;
    Ok(())
}

fn dump(file: &Path, grammar: Grammar) -> Result<()> {
    let (buffer, _language, tree) = read_and_parse(file, grammar)?;

    let serializer = TreeSerializer::new(grammar.string_kind());
    let document = serializer.serialize(tree.root_node(), &buffer)?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &document)?;
    writeln!(stdout)?;
    Ok(())
}

fn sexp(file: &Path, grammar: Grammar) -> Result<()> {
    let (_buffer, _language, tree) = read_and_parse(file, grammar)?;
    println!("{}", tree.root_node().to_sexp());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn grammar_string_kinds_match_their_grammars() {
        for grammar in [Grammar::C, Grammar::Python] {
            let language = grammar.language();
            assert_ne!(
                language.id_for_node_kind(grammar.string_kind(), true),
                0,
                "{:?}",
                grammar
            );
        }
    }
}
