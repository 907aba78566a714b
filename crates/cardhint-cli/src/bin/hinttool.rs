use clap::{Parser, Subcommand};

use cardhint_cli::commands::{table_ops, update_ops};
use cardhint_cli::trace_init::init_tracing;
use cardhint_core::DEFAULT_DATASET_PATH;

#[derive(Parser)]
#[command(name = "hinttool", about = "Flashcard hint diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Romanize IPA strings
    Romanize {
        /// IPA transcriptions
        #[arg(required = true)]
        ipa: Vec<String>,
        /// Custom IPA table TOML (optional)
        #[arg(long)]
        table: Option<String>,
    },
    /// Export the default IPA table as TOML
    TableExport,
    /// Validate a custom IPA table TOML file
    TableValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Report what add-romanization would change, without writing
    Check {
        /// Flashcard JSON file
        #[arg(default_value = DEFAULT_DATASET_PATH)]
        input: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Romanize { ipa, table } => table_ops::romanize_cmd(&ipa, table.as_deref()),
        Command::TableExport => table_ops::table_export(),
        Command::TableValidate { file } => table_ops::table_validate(&file),
        Command::Check { input } => update_ops::check(&input),
    }
}
