//! Romanization hints for flashcard datasets.
//!
//! Reads a JSON array of flashcards, derives a "sounds like" spelling from
//! each card's IPA hint and puts it in front of the card's hints.

pub mod dataset;
pub mod flashcard;
pub mod romanize;
pub mod updater;

pub use dataset::{process_file, DatasetError, DEFAULT_DATASET_PATH};
pub use flashcard::{Flashcard, Hint, HintKind, Hints};
pub use romanize::{romanize, Romanizer};
pub use updater::{update, update_flashcard, UpdateReport};
