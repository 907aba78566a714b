//! Adds romanization hints to flashcards that carry an IPA hint, and fills in
//! missing `hintOrder` values.


use tracing::{debug, debug_span};

use crate::flashcard::{Flashcard, Hint, HintKind};
use crate::romanize::Romanizer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Flashcards visited.
    pub processed: usize,
    /// Flashcards that received a new romanization hint.
    pub romanized: usize,
}

/// Update every flashcard in place, in order.
pub fn update(cards: &mut [Flashcard], romanizer: &Romanizer) -> UpdateReport {
    let _span = debug_span!("update", cards = cards.len()).entered();
    let mut report = UpdateReport {
        processed: cards.len(),
        romanized: 0,
    };
    for (index, card) in cards.iter_mut().enumerate() {
        if update_flashcard(card, romanizer) {
            debug!(index, "inserted romanization hint");
            report.romanized += 1;
        }
    }
    report
}

/// Update a single flashcard. Returns `true` if a romanization hint was inserted.
///
/// Cards without a hint list (absent, `null`, not a list, or empty) are left
/// alone. The first `soundIpa` hint gets its order right away; a romanization
/// hint is only added when that hint has string content and the card has no
/// romanization hint yet. A final pass fills in orders for every known hint
/// kind whose `hintOrder` key is absent.
pub fn update_flashcard(card: &mut Flashcard, romanizer: &Romanizer) -> bool {
    let Some(hints) = card.hints_mut() else {
        return false;
    };
    if hints.is_empty() {
        return false;
    }

    let ipa = hints
        .iter_mut()
        .find(|h| h.is(HintKind::SoundIpa))
        .map(|h| {
            h.ensure_order(HintKind::SoundIpa.default_order());
            h.content_or_empty().to_string()
        });

    let mut inserted = false;
    if let Some(ipa) = ipa.filter(|c| !c.is_empty()) {
        if !hints.iter().any(|h| h.is(HintKind::Romanization)) {
            hints.insert(0, Hint::romanization(romanizer.romanize(&ipa)));
            inserted = true;
        }
    }

    for hint in hints.iter_mut() {
        if let Some(kind) = hint.kind() {
            hint.ensure_order(kind.default_order());
        }
    }

    inserted
}

/// Count hints of a known kind that still lack a `hintOrder` key.
pub fn missing_orders(cards: &[Flashcard]) -> usize {
    cards
        .iter()
        .flat_map(|c| c.hints())
        .filter(|h| h.kind().is_some() && !h.has_order())
        .count()
}
