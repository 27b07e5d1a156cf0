use clap::{Parser, Subcommand};
use std::process;

mod commands;

use commands::{Accessor, Outcome};

/// dynval - inspect JSON documents as engine values
#[derive(Parser)]
#[command(name = "dynval")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect JSON documents as dynamically-typed engine values")]
struct Cli {
    /// Read documents in the lossless tagged format instead of plain JSON
    #[arg(long, global = true)]
    tagged: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a human-readable description of a document
    Describe {
        /// File to read, or `-` for stdin
        file: String,
        /// Spaces per nesting level
        #[arg(long)]
        indent: Option<usize>,
        /// Show at most this many entries per container
        #[arg(long)]
        max_items: Option<usize>,
    },
    /// Print the type of the top-level value
    Type {
        /// File to read, or `-` for stdin
        file: String,
    },
    /// Compare two documents (exit code 1 when they differ)
    Eq {
        left: String,
        right: String,
    },
    /// Read the top-level value through one of the scalar accessors
    Get {
        /// File to read, or `-` for stdin
        file: String,
        /// Accessor to apply
        #[arg(value_enum)]
        accessor: Accessor,
    },
    /// Re-encode a document in the other format (plain <-> tagged)
    Convert {
        /// File to read, or `-` for stdin
        file: String,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let tagged = cli.tagged;

    let result = match cli.command {
        Commands::Describe {
            file,
            indent,
            max_items,
        } => commands::load(&file, tagged)
            .map(|value| Outcome::success(commands::describe(&value, indent, max_items))),
        Commands::Type { file } => commands::load(&file, tagged)
            .map(|value| Outcome::success(commands::type_of(&value))),
        Commands::Eq { left, right } => eq_command(&left, &right, tagged),
        Commands::Get { file, accessor } => commands::load(&file, tagged)
            .and_then(|value| commands::get(&value, accessor))
            .map(Outcome::success),
        Commands::Convert { file, pretty } => commands::load(&file, tagged)
            .and_then(|value| commands::convert(&value, !tagged, pretty))
            .map(Outcome::success),
    };

    match result {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if outcome.code != 0 {
                process::exit(outcome.code);
            }
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(2);
        }
    }
}

fn eq_command(left: &str, right: &str, tagged: bool) -> anyhow::Result<Outcome> {
    let a = commands::load(left, tagged)?;
    let b = commands::load(right, tagged)?;
    Ok(commands::compare(&a, &b))
}
