//! Whole-file load and save of a flashcard collection (a JSON array).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::flashcard::Flashcard;
use crate::romanize::Romanizer;
use crate::updater::{update, UpdateReport};

/// Conventional location of the flashcard dataset, relative to the app root.
pub const DEFAULT_DATASET_PATH: &str = "assets/data/flashcards.json";

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("cannot read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("not a flashcard collection: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("cannot encode flashcards: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn parse_collection(text: &str) -> Result<Vec<Flashcard>, DatasetError> {
    serde_json::from_str(text).map_err(DatasetError::Parse)
}

pub fn load(path: &Path) -> Result<Vec<Flashcard>, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    parse_collection(&text)
}

/// Pretty JSON with two-space indentation; non-ASCII is written as-is.
pub fn to_json(cards: &[Flashcard]) -> Result<String, DatasetError> {
    serde_json::to_string_pretty(cards).map_err(DatasetError::Encode)
}

/// Atomic write: write to `<file name>.tmp` then rename.
pub fn save(path: &Path, cards: &[Flashcard]) -> Result<(), DatasetError> {
    let json = to_json(cards)?;
    let write_err = |source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    };
    let tmp = tmp_path(path).ok_or_else(|| {
        write_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "destination has no file name",
        ))
    })?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(&tmp, json).map_err(write_err)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }
    Ok(())
}

/// `cards.json` -> `cards.json.tmp`, next to the destination.
fn tmp_path(path: &Path) -> Option<PathBuf> {
    let mut name = path.file_name()?.to_os_string();
    name.push(".tmp");
    Some(path.with_file_name(name))
}

/// Load `input`, add romanization hints, write the result to `output`.
/// Nothing is written when loading fails.
pub fn process_file(
    input: &Path,
    output: &Path,
    romanizer: &Romanizer,
) -> Result<UpdateReport, DatasetError> {
    let mut cards = load(input)?;
    let report = update(&mut cards, romanizer);
    save(output, &cards)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        processed = report.processed,
        romanized = report.romanized,
        "flashcards updated"
    );
    Ok(report)
}
