use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use hlslex::{is_shader_source, tokenize, Category, CompiledLexicon, LexiconBuilder};

#[derive(Parser)]
#[command(name = "hlslex")]
#[command(author, version, about = "HLSL tokenizer and lexical classifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Extra type names to recognize
    #[arg(long = "extend-type", value_name = "WORD", global = true)]
    extend_types: Vec<String>,

    /// Extra qualifier names to recognize
    #[arg(long = "extend-qualifier", value_name = "WORD", global = true)]
    extend_qualifiers: Vec<String>,

    /// Extra keyword names to recognize
    #[arg(long = "extend-keyword", value_name = "WORD", global = true)]
    extend_keywords: Vec<String>,

    /// Extra builtin names to recognize
    #[arg(long = "extend-builtin", value_name = "WORD", global = true)]
    extend_builtins: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize an HLSL source file and print the classified tokens
    Tokens {
        /// The source file to tokenize
        input: PathBuf,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,

        /// Include whitespace tokens in the output
        #[arg(long)]
        keep_whitespace: bool,
    },

    /// Classify bare lexemes without tokenizing a file
    Classify {
        /// Lexemes to classify
        lexemes: Vec<String>,
    },

    /// Check a source file for unterminated comments and strings
    Check {
        /// The source file to check
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let lexicon = build_lexicon(&cli)?;

    let result = match &cli.command {
        Commands::Tokens {
            input,
            json,
            keep_whitespace,
        } => dump_tokens(&lexicon, input, *json, *keep_whitespace),
        Commands::Classify { lexemes } => classify(&lexicon, lexemes),
        Commands::Check { input } => check(&lexicon, input),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Build the lexicon once, with any extension words from the command line.
fn build_lexicon(cli: &Cli) -> Result<CompiledLexicon> {
    log::debug!(
        "building lexicon ({} extension words)",
        cli.extend_types.len()
            + cli.extend_qualifiers.len()
            + cli.extend_keywords.len()
            + cli.extend_builtins.len()
    );
    LexiconBuilder::new()
        .types(cli.extend_types.iter().cloned())
        .qualifiers(cli.extend_qualifiers.iter().cloned())
        .keywords(cli.extend_keywords.iter().cloned())
        .builtins(cli.extend_builtins.iter().cloned())
        .build()
        .context("failed to compile lexicon tables")
}

fn read_source(input: &Path) -> Result<String> {
    if !is_shader_source(input) {
        log::warn!("{} does not have a known shader extension", input.display());
    }
    fs::read_to_string(input).with_context(|| format!("failed to read source file: {input:?}"))
}

fn dump_tokens(
    lexicon: &CompiledLexicon,
    input: &Path,
    json: bool,
    keep_whitespace: bool,
) -> Result<()> {
    let source = read_source(input)?;
    let stream = tokenize(lexicon, &source);

    let tokens: Vec<_> = stream
        .tokens
        .iter()
        .filter(|t| keep_whitespace || t.category != Category::Whitespace)
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for (i, token) in tokens.iter().enumerate() {
            println!("{i:4}: {token}");
        }
    }

    if !stream.diagnostics.is_empty() {
        eprintln!(
            "{}: {} unterminated construct(s)",
            "warning".yellow().bold(),
            stream.diagnostics.len()
        );
    }

    Ok(())
}

fn classify(lexicon: &CompiledLexicon, lexemes: &[String]) -> Result<()> {
    for lexeme in lexemes {
        let category = lexicon.classify(lexeme);
        let shown = match category {
            Category::Identifier => category.to_string().dimmed(),
            _ => category.to_string().green(),
        };
        println!("{lexeme}: {shown}");
    }
    Ok(())
}

fn check(lexicon: &CompiledLexicon, input: &Path) -> Result<()> {
    let source = read_source(input)?;

    let mut files = SimpleFiles::new();
    let file_id = files.add(input.display().to_string(), source.clone());

    let stream = tokenize(lexicon, &source);

    if stream.diagnostics.is_empty() {
        println!(
            "{}: {} tokens, no unterminated constructs",
            "ok".green().bold(),
            stream.tokens.len()
        );
        return Ok(());
    }

    let writer = StandardStream::stderr(ColorChoice::Always);
    let config = codespan_reporting::term::Config::default();
    for warning in &stream.diagnostics {
        let diagnostic = warning.to_diagnostic(file_id);
        codespan_reporting::term::emit(&mut writer.lock(), &config, &files, &diagnostic)?;
    }
    anyhow::bail!("{} unterminated construct(s)", stream.diagnostics.len());
}
