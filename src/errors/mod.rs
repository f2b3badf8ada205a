//! Substitution rules
//!
//! Each rule scans the sentence buffer for an eligible token that has not
//! been modified yet, picks one uniformly at random, applies its transform
//! through the buffer, and reports whether it fired. A rule that finds no
//! target leaves the buffer untouched and returns false.

pub mod affix;
pub mod enclitic;
pub mod hyphenation;
pub mod ligature;
pub mod morphology;
pub mod ng_nang;
pub mod repetition;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::injection::SentenceBuffer;

/// Picks one unmodified position whose token satisfies `eligible`, uniformly
/// at random. Returns `None` when no such position exists.
fn pick_target<R, F>(buffer: &SentenceBuffer, rng: &mut R, eligible: F) -> Option<usize>
where
    R: Rng,
    F: Fn(&str) -> bool,
{
    let candidates: Vec<usize> = buffer
        .unmodified_indices()
        .into_iter()
        .filter(|&i| eligible(buffer.token(i)))
        .collect();
    candidates.choose(rng).copied()
}
