use std::path::Path;

use cardhint_core::dataset;
use cardhint_core::updater::{missing_orders, update};
use cardhint_core::Romanizer;

/// Add romanization hints to `input` and write the collection to `output`.
pub fn add_romanization(input: &str, output: &str) {
    let report = die!(
        dataset::process_file(Path::new(input), Path::new(output), Romanizer::global()),
        "Error: {}"
    );
    println!("Processed {} flashcards", report.processed);
    println!("Added romanization hints to {} entries", report.romanized);
}

/// Dry run: report what `add_romanization` would change without writing.
pub fn check(input: &str) {
    let mut cards = die!(dataset::load(Path::new(input)), "Error: {}");
    let unordered = missing_orders(&cards);
    let report = update(&mut cards, Romanizer::global());
    println!("Flashcards: {}", report.processed);
    println!("Romanization hints to add: {}", report.romanized);
    println!("Hint orders to assign: {}", unordered);
}
