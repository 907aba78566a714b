use clap::Parser;

use cardhint_cli::commands::update_ops;
use cardhint_cli::trace_init::init_tracing;
use cardhint_core::DEFAULT_DATASET_PATH;

#[derive(Parser)]
#[command(
    name = "add-romanization",
    about = "Add \"Sounds like\" romanization hints to flashcards with an IPA hint"
)]
struct Cli {
    /// Flashcard JSON file to read
    #[arg(default_value = DEFAULT_DATASET_PATH)]
    input: String,
    /// File to write (defaults to the input file)
    output: Option<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let output = cli.output.as_deref().unwrap_or(&cli.input);
    update_ops::add_romanization(&cli.input, output);
}
