use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use varicode_cli::commands::{self, TableOpts};
use varicode_cli::ReadMode;

#[derive(Parser)]
#[command(name = "varicode")]
#[command(about = "Varicode - variable-length binary code channel toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a table specification and print its canonical form
    Check {
        #[command(flatten)]
        table: TableOpts,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Encode plain text into a bitstring
    Encode {
        #[command(flatten)]
        table: TableOpts,

        /// Input text file
        #[arg(short, long)]
        input: Option<String>,

        /// Inline text to encode
        #[arg(long)]
        text: Option<String>,

        /// Output file for the bitstring (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Signature text stamped at the start of every line
        #[arg(long)]
        sign_start: Option<String>,

        /// Signature text stamped at the end of every line
        #[arg(long)]
        sign_end: Option<String>,

        /// Append the end-of-message marker after encoding
        #[arg(long)]
        terminate: bool,
    },

    /// Decode a bitstring back into text
    Decode {
        #[command(flatten)]
        table: TableOpts,

        /// Input bitstring file
        #[arg(short, long)]
        input: Option<String>,

        /// Inline bitstring to decode
        #[arg(long)]
        bits: Option<String>,

        /// Output file for the text (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Fail on undecodable input instead of passing it through
        #[arg(long)]
        strict: bool,
    },

    /// Split a channel bitstream into messages and display them
    Read {
        #[command(flatten)]
        table: TableOpts,

        /// Input bitstream file
        #[arg(short, long)]
        input: Option<String>,

        /// Inline bitstream to read
        #[arg(long)]
        bits: Option<String>,

        /// Output file for the messages (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Interpretation of the framed messages
        #[arg(long, value_enum, default_value = "binary")]
        mode: ReadMode,

        /// Keep only messages starting with this bit pattern
        #[arg(long)]
        starts: Option<String>,

        /// Keep only messages ending with this bit pattern
        #[arg(long)]
        ends: Option<String>,

        /// Fail on undecodable messages instead of passing them through
        #[arg(long)]
        strict: bool,

        /// Emit the messages as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Check { table, json } => commands::check::execute(&table, json),

        Commands::Encode {
            table,
            input,
            text,
            output,
            sign_start,
            sign_end,
            terminate,
        } => commands::encode::execute(
            &table,
            input.as_deref(),
            text.as_deref(),
            output.as_deref(),
            sign_start.as_deref(),
            sign_end.as_deref(),
            terminate,
        ),

        Commands::Decode {
            table,
            input,
            bits,
            output,
            strict,
        } => commands::decode::execute(
            &table,
            input.as_deref(),
            bits.as_deref(),
            output.as_deref(),
            strict,
        ),

        Commands::Read {
            table,
            input,
            bits,
            output,
            mode,
            starts,
            ends,
            strict,
            json,
        } => commands::read::execute(
            &table,
            input.as_deref(),
            bits.as_deref(),
            output.as_deref(),
            mode,
            starts.as_deref(),
            ends.as_deref(),
            strict,
            json,
        ),
    }
}
