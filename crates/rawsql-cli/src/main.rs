//! rawsql CLI
//!
//! Command-line tool for formatting and inspecting SELECT queries.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use rawsql_core::dialect::dialect_by_name;
use rawsql_core::{DialectConfig, Formatter, SelectQuery, Tokenizer};

/// Format and inspect SQL SELECT queries.
#[derive(Parser)]
#[command(name = "rawsql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print it in canonical form.
    Format {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,

        #[command(flatten)]
        dialect: DialectArgs,
    },

    /// Print one lexeme per line.
    Tokens {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,
    },

    /// Print the parse tree as JSON.
    Ast {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,
    },

    /// Fail with the positioned error if the query does not parse.
    Check {
        /// Input file (stdin if not specified).
        file: Option<PathBuf>,
    },
}

/// Output dialect options.
#[derive(Args)]
struct DialectArgs {
    /// Dialect preset (generic, postgres, mysql, sqlserver, sqlite).
    #[arg(short, long, env = "RAWSQL_DIALECT", default_value = "generic")]
    dialect: String,

    /// JSON dialect configuration file, used instead of the preset.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quote every identifier.
    #[arg(long)]
    quote_all: bool,
}

impl DialectArgs {
    fn resolve(&self) -> anyhow::Result<DialectConfig> {
        let config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid dialect config {}", path.display()))?
            }
            None => dialect_by_name(&self.dialect)
                .with_context(|| format!("Unknown dialect `{}`", self.dialect))?
                .config(),
        };
        Ok(if self.quote_all {
            config.quote_all()
        } else {
            config
        })
    }
}

/// Reads the query from `file`, or from stdin.
fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut sql = String::new();
            std::io::stdin()
                .read_to_string(&mut sql)
                .context("Failed to read stdin")?;
            Ok(sql)
        }
    }
}

fn parse_input(file: Option<&Path>) -> anyhow::Result<SelectQuery> {
    let sql = read_input(file)?;
    debug!(length = sql.len(), "read query");
    rawsql_core::parse(&sql).context("Query does not parse")
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Format { file, dialect } => {
            let config = dialect.resolve()?;
            debug!(?config, "resolved dialect");
            let query = parse_input(file.as_deref())?;
            let sql = Formatter::new(config)
                .format(&query)
                .context("Failed to format query")?;
            println!("{sql}");
        }

        Commands::Tokens { file } => {
            let sql = read_input(file.as_deref())?;
            let lexemes = Tokenizer::new(&sql)
                .tokenize()
                .context("Failed to tokenize query")?;
            for lexeme in &lexemes {
                println!(
                    "{:>6}  {:<24} {}",
                    lexeme.position,
                    lexeme.kind.as_str(),
                    lexeme.text
                );
            }
        }

        Commands::Ast { file } => {
            let query = parse_input(file.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&query)?);
        }

        Commands::Check { file } => {
            parse_input(file.as_deref())?;
            info!("Query is valid.");
        }
    }

    Ok(())
}
