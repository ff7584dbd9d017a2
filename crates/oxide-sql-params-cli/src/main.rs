//! oxide-params CLI
//!
//! Command-line tool for rewriting SQL parameters.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_sql_params_cli::commands::{expand_query, lex_query, resolve_expand_query, resolve_query};
use oxide_sql_params_cli::input::{load_params, read_query, BindingSources};
use oxide_sql_params_cli::Format;

/// Rewrite named and explicit SQL parameters into `?` placeholders.
#[derive(Parser)]
#[command(name = "oxide-params")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format.
    #[arg(
        short,
        long,
        value_enum,
        env = "OXIDE_PARAMS_FORMAT",
        default_value = "text",
        global = true
    )]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct QueryArgs {
    /// Query text (read from --file or stdin if omitted).
    query: Option<String>,

    /// Read the query from a file.
    #[arg(long, conflicts_with = "query")]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct BindingArgs {
    /// Named bindings as a JSON object.
    #[arg(short, long, value_name = "JSON")]
    named: Option<String>,

    /// Positional bindings as a JSON array.
    #[arg(short, long, value_name = "JSON")]
    positional: Option<String>,

    /// JSON file with `named` and `positional` members.
    #[arg(short, long, value_name = "FILE")]
    bindings: Option<PathBuf>,
}

impl BindingArgs {
    fn sources(&self) -> BindingSources<'_> {
        BindingSources {
            file: self.bindings.as_deref(),
            named: self.named.as_deref(),
            positional: self.positional.as_deref(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a query is tokenized.
    Lex {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Replace named and explicit parameters with `?`.
    Resolve {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        bindings: BindingArgs,
    },

    /// Expand `?` placeholders bound to lists (positional bindings only).
    Expand {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        bindings: BindingArgs,
    },

    /// Resolve, then expand, in one pass.
    ResolveExpand {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        bindings: BindingArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
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

    let (query_args, binding_args) = match &cli.command {
        Commands::Lex { query } => (query, None),
        Commands::Resolve { query, bindings }
        | Commands::Expand { query, bindings }
        | Commands::ResolveExpand { query, bindings } => (query, Some(bindings)),
    };

    let query = read_query(
        query_args.query.as_deref(),
        query_args.file.as_deref(),
        std::io::stdin().lock(),
    )?;
    debug!(bytes = query.len(), "read query");

    let params = match binding_args {
        Some(args) => load_params(&args.sources())?,
        None => oxide_sql_params::Params::new(),
    };

    let output = match &cli.command {
        Commands::Lex { .. } => lex_query(&query, cli.format)?,
        Commands::Resolve { .. } => resolve_query(&query, &params, cli.format)?,
        Commands::Expand { .. } => expand_query(&query, &params, cli.format)?,
        Commands::ResolveExpand { .. } => resolve_expand_query(&query, &params, cli.format)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }

    Ok(())
}
