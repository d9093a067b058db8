//! Uniform random selection of one venue from a candidate list.

use rand::Rng;

use mukpick_naver::Restaurant;

/// Why a selection attempt produced nothing. Distinct from an error: the
/// caller presents a "nothing nearby, try again" prompt, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The candidate list was empty (zero matches or a swallowed search
    /// failure; the two look identical here by design).
    NoCandidates,
    /// The chosen candidate had no usable title. Not retried automatically;
    /// the caller decides whether to prompt for another attempt.
    UntitledCandidate,
}

/// Outcome of a selection attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Chosen(Restaurant),
    Empty(EmptyReason),
}

/// Picks one candidate uniformly at random, or signals the empty outcome.
///
/// The chosen candidate is returned unmodified; the only validation is a
/// presence check on the title before hand-off to presentation.
pub fn select_one<R: Rng + ?Sized>(candidates: &[Restaurant], rng: &mut R) -> Selection {
    if candidates.is_empty() {
        return Selection::Empty(EmptyReason::NoCandidates);
    }

    let index = rng.random_range(0..candidates.len());
    let chosen = &candidates[index];
    if !chosen.has_usable_title() {
        tracing::warn!(index, "selected candidate has no usable title");
        return Selection::Empty(EmptyReason::UntitledCandidate);
    }

    Selection::Chosen(chosen.clone())
}
